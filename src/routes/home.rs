use crate::auth::CurrentUser;
use rocket::{get, routes};
use rocket_dyn_templates::{Template, context};

#[get("/")]
pub fn index(current_user: CurrentUser) -> Template {
    Template::render("index", context! { username: &current_user.username })
}

pub fn routes() -> Vec<rocket::Route> {
    routes![index]
}
