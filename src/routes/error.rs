use crate::config::Config;
use crate::session::clear_session;
use rocket::http::Status;
use rocket::response::Redirect;
use rocket::{Request, catch};
use rocket_dyn_templates::{Template, context};

/// Session-gated routes fail with 401 when there is no usable session. The
/// cookie is dropped as well, otherwise a session whose user no longer exists
/// would bounce between `/login` and `/` forever.
#[catch(401)]
pub fn unauthorized(req: &Request) -> Redirect {
    if let Some(config) = req.rocket().state::<Config>() {
        clear_session(req.cookies(), &config.session);
    }
    Redirect::to("/login")
}

#[catch(404)]
pub fn not_found(req: &Request) -> Template {
    Template::render(
        "error",
        context! { status: Status::NotFound.code, message: format!("No page found at {}", req.uri().path()) },
    )
}

#[catch(500)]
pub fn internal_error(_: &Request) -> Template {
    Template::render(
        "error",
        context! { status: Status::InternalServerError.code, message: "Something went wrong. Please try again later." },
    )
}

#[cfg(test)]
mod tests {
    use crate::session::session_cookie_value;
    use crate::{Config, build_rocket};
    use rocket::http::{ContentType, Cookie, Status};
    use rocket::local::asynchronous::Client;
    use rocket::{get, routes};

    #[get("/denied")]
    fn denied() -> Status {
        Status::Unauthorized
    }

    #[rocket::async_test]
    async fn unauthorized_drops_the_session_cookie() {
        let rocket = build_rocket(Config::default()).mount("/test", routes![denied]);
        let client = Client::tracked(rocket).await.expect("valid rocket instance");
        let expires_at = chrono::Utc::now().timestamp() + 600;

        let response = client
            .get("/test/denied")
            .private_cookie(Cookie::new("session", session_cookie_value("ghost", expires_at)))
            .dispatch()
            .await;
        assert_eq!(response.status(), Status::SeeOther);
        assert_eq!(response.headers().get_one("Location"), Some("/login"));
        let removal = response.cookies().get("session").cloned().expect("session removal cookie");
        assert_eq!(removal.value(), "");
    }

    #[rocket::async_test]
    async fn unknown_page_renders_html_not_found() {
        let client = Client::tracked(build_rocket(Config::default())).await.expect("valid rocket instance");

        let response = client.get("/does-not-exist").dispatch().await;

        assert_eq!(response.status(), Status::NotFound);
        assert_eq!(response.content_type(), Some(ContentType::HTML));
        let body = response.into_string().await.unwrap_or_default();
        assert!(body.contains("No page found"));
    }

    #[rocket::async_test]
    async fn static_assets_are_served_from_template_dir() {
        let client = Client::tracked(build_rocket(Config::default())).await.expect("valid rocket instance");

        let response = client.get("/templates/static/style.css").dispatch().await;

        assert_eq!(response.status(), Status::Ok);
        assert_eq!(response.content_type(), Some(ContentType::CSS));
    }
}
