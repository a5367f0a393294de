use crate::database::postgres_repository::PostgresRepository;
use crate::error::app_error::AppError;
use crate::models::health::HealthResponse;
use rocket::serde::json::Json;
use rocket::{State, get, routes};
use sqlx::PgPool;

#[get("/health")]
pub async fn healthcheck(pool: &State<PgPool>) -> Result<Json<HealthResponse>, AppError> {
    let repo = PostgresRepository { pool: pool.inner().clone() };
    repo.ping().await?;
    Ok(Json(HealthResponse { status: "ok" }))
}

pub fn routes() -> Vec<rocket::Route> {
    routes![healthcheck]
}
