pub mod equipment;
pub mod error;
pub mod health;
pub mod home;
pub mod user;

use rocket::Responder;
use rocket::http::Status;
use rocket::response::Redirect;
use rocket_dyn_templates::Template;
use validator::ValidationErrors;

/// Outcome of a form submission: either move on, or show the form again
/// with an explanation and an error status.
#[derive(Responder)]
pub enum FormResponse {
    Redirect(Redirect),
    Rejected((Status, Template)),
}

/// Human readable summary of validation failures, in a stable order.
pub(crate) fn validation_summary(errors: &ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .values()
        .flat_map(|field_errors| field_errors.iter())
        .map(|e| e.message.as_ref().map(|m| m.to_string()).unwrap_or_else(|| e.code.to_string()))
        .collect();
    messages.sort();
    messages.join(". ")
}

pub fn routes() -> Vec<rocket::Route> {
    let mut routes = Vec::new();
    routes.extend(home::routes());
    routes.extend(user::routes());
    routes.extend(equipment::routes());
    routes.extend(health::routes());
    routes
}
