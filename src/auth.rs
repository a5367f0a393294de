use crate::config::Config;
use crate::database::postgres_repository::PostgresRepository;
use crate::error::app_error::AppError;
use crate::service::auth::AuthService;
use crate::session::get_session;
use rocket::http::Status;
use rocket::outcome::Outcome;
use rocket::request::{FromRequest, Outcome as RequestOutcome, Request};
use serde::Serialize;
use sqlx::PgPool;
use tracing::error;

/// The logged-in user of a session-gated route. Guard failures surface as
/// 401, which the catcher turns into a redirect to the login page.
#[derive(Debug, Clone, Serialize)]
pub struct CurrentUser {
    pub id: i32,
    pub username: String,
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for CurrentUser {
    type Error = AppError;

    async fn from_request(req: &'r Request<'_>) -> RequestOutcome<Self, Self::Error> {
        let Some(config) = req.rocket().state::<Config>() else {
            return Outcome::Error((Status::InternalServerError, AppError::MissingState("Config")));
        };
        let Some(pool) = req.rocket().state::<PgPool>() else {
            return Outcome::Error((Status::InternalServerError, AppError::MissingState("PgPool")));
        };

        let Ok(username) = get_session(req.cookies(), &config.session) else {
            return Outcome::Error((Status::Unauthorized, AppError::SessionNotFound));
        };

        let repo = PostgresRepository { pool: pool.clone() };
        match AuthService::new(&repo).user_for_session(Some(username.as_str())).await {
            Ok(Some(user)) => {
                let current_user = CurrentUser {
                    id: user.id,
                    username: user.username,
                };
                req.local_cache(|| Some(current_user.clone()));
                Outcome::Success(current_user)
            }
            Ok(None) => Outcome::Error((Status::Unauthorized, AppError::Unauthorized)),
            Err(err) => {
                error!(error = ?err, uri = %req.uri(), "failed to resolve session user");
                Outcome::Error((Status::InternalServerError, err))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::CurrentUser;
    use rocket::http::Status;
    use rocket::local::asynchronous::Client;
    use rocket::{get, routes};

    #[get("/whoami")]
    fn whoami(user: CurrentUser) -> String {
        user.username
    }

    #[rocket::async_test]
    async fn guard_without_managed_state_is_a_server_error() {
        let rocket = rocket::build().mount("/", routes![whoami]);
        let client = Client::tracked(rocket).await.expect("valid rocket instance");

        let response = client.get("/whoami").dispatch().await;

        assert_eq!(response.status(), Status::InternalServerError);
    }
}
