use crate::auth::CurrentUser;
use crate::database::postgres_repository::PostgresRepository;
use crate::error::app_error::AppError;
use crate::models::equipment::EquipmentRequest;
use crate::models::pagination::PageParams;
use crate::routes::{FormResponse, validation_summary};
use crate::service::equipment::EquipmentService;
use rocket::form::Form;
use rocket::http::Status;
use rocket::response::Redirect;
use rocket::{State, get, post, routes};
use rocket_dyn_templates::{Template, context};
use sqlx::PgPool;
use tracing::info;
use validator::Validate;

fn register_form(current_user: &CurrentUser) -> Template {
    Template::render("registerdevice", context! { username: &current_user.username })
}

#[get("/registrar")]
pub fn register_page(current_user: CurrentUser) -> Template {
    register_form(&current_user)
}

#[get("/registerdevice")]
pub fn register_device_page(current_user: CurrentUser) -> Template {
    register_form(&current_user)
}

#[post("/registerdevice", data = "<form>")]
pub async fn register_device(pool: &State<PgPool>, current_user: CurrentUser, form: Form<EquipmentRequest>) -> Result<FormResponse, AppError> {
    if let Err(errors) = form.validate() {
        return Ok(FormResponse::Rejected((
            Status::BadRequest,
            Template::render(
                "registerdevice",
                context! { username: &current_user.username, error: validation_summary(&errors) },
            ),
        )));
    }

    let repo = PostgresRepository { pool: pool.inner().clone() };
    let equipment = EquipmentService::new(&repo).register(&form).await?;
    info!(
        equipment_id = equipment.id,
        system_code = %equipment.system_code,
        username = %current_user.username,
        "equipment registered"
    );

    Ok(FormResponse::Redirect(Redirect::to("/equipos")))
}

#[get("/equipos?<pagina>")]
pub async fn list_equipment(pool: &State<PgPool>, current_user: CurrentUser, pagina: Option<&str>) -> Result<Template, AppError> {
    let repo = PostgresRepository { pool: pool.inner().clone() };
    let page = EquipmentService::new(&repo).page(PageParams::from_query(pagina)).await?;

    Ok(Template::render(
        "equipos",
        context! {
            username: &current_user.username,
            equipos: &page.items,
            pagina: page.page,
            pagina_anterior: page.previous_page,
            pagina_siguiente: page.next_page,
            page_size: page.page_size,
            total_items: page.total_items,
            total_pages: page.total_pages,
        },
    ))
}

pub fn routes() -> Vec<rocket::Route> {
    routes![register_page, register_device_page, register_device, list_equipment]
}
