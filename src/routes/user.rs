use crate::config::Config;
use crate::database::postgres_repository::PostgresRepository;
use crate::error::app_error::AppError;
use crate::models::user::{CreateUserForm, LoginForm};
use crate::routes::{FormResponse, validation_summary};
use crate::service::auth::AuthService;
use crate::session::{clear_session, is_session_active, set_session};
use rocket::Either;
use rocket::form::Form;
use rocket::http::{CookieJar, Status};
use rocket::response::Redirect;
use rocket::{State, get, post, routes};
use rocket_dyn_templates::{Template, context};
use sqlx::PgPool;
use tracing::{info, warn};
use validator::Validate;

/// Shown for unknown users and wrong passwords alike.
pub const LOGIN_FAILED_MESSAGE: &str = "Invalid username or password";

/// Users who already hold a session skip the form.
#[get("/login")]
pub fn login_page(config: &State<Config>, cookies: &CookieJar<'_>) -> Either<Redirect, Template> {
    if is_session_active(cookies, &config.session) {
        return Either::Left(Redirect::to("/"));
    }
    Either::Right(Template::render("login", context! {}))
}

async fn login(pool: &PgPool, config: &Config, cookies: &CookieJar<'_>, form: &LoginForm) -> Result<FormResponse, AppError> {
    let repo = PostgresRepository { pool: pool.clone() };

    match AuthService::new(&repo).authenticate(&form.username, &form.password).await {
        Ok(user) => {
            set_session(cookies, &config.session, &user.username);
            info!(username = %user.username, "user logged in");
            Ok(FormResponse::Redirect(Redirect::to("/")))
        }
        Err(err) if err.is_authentication_failure() => {
            warn!(username = %form.username, reason = %err, "login rejected");
            Ok(FormResponse::Rejected((
                Status::Unauthorized,
                Template::render("login", context! { error: LOGIN_FAILED_MESSAGE, form_username: &form.username }),
            )))
        }
        Err(err) => Err(err),
    }
}

#[post("/login", data = "<form>")]
pub async fn post_login(pool: &State<PgPool>, config: &State<Config>, cookies: &CookieJar<'_>, form: Form<LoginForm>) -> Result<FormResponse, AppError> {
    login(pool, config, cookies, &form).await
}

#[post("/auth", data = "<form>")]
pub async fn post_auth(pool: &State<PgPool>, config: &State<Config>, cookies: &CookieJar<'_>, form: Form<LoginForm>) -> Result<FormResponse, AppError> {
    login(pool, config, cookies, &form).await
}

#[get("/create_user")]
pub fn create_user_page() -> Template {
    Template::render("create_user", context! {})
}

#[post("/create_user", data = "<form>")]
pub async fn post_create_user(
    pool: &State<PgPool>,
    config: &State<Config>,
    cookies: &CookieJar<'_>,
    form: Form<CreateUserForm>,
) -> Result<FormResponse, AppError> {
    if let Err(errors) = form.validate() {
        return Ok(FormResponse::Rejected((
            Status::BadRequest,
            Template::render("create_user", context! { error: validation_summary(&errors), form_username: &form.username }),
        )));
    }

    let repo = PostgresRepository { pool: pool.inner().clone() };
    match AuthService::new(&repo).create_user(&form.username, &form.password).await {
        Ok(user) => {
            set_session(cookies, &config.session, &user.username);
            info!(username = %user.username, "user created");
            Ok(FormResponse::Redirect(Redirect::to("/")))
        }
        Err(AppError::UserAlreadyExists(username)) => {
            warn!(username = %username, "username already taken");
            Ok(FormResponse::Rejected((
                Status::Conflict,
                Template::render(
                    "create_user",
                    context! { error: format!("The username {username} is already taken"), form_username: &username },
                ),
            )))
        }
        Err(err) => Err(err),
    }
}

#[get("/logout")]
pub fn logout(config: &State<Config>, cookies: &CookieJar<'_>) -> Redirect {
    clear_session(cookies, &config.session);
    Redirect::to("/login")
}

pub fn routes() -> Vec<rocket::Route> {
    routes![login_page, post_login, post_auth, create_user_page, post_create_user, logout]
}
