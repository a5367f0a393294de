use crate::database::postgres_repository::PostgresRepository;
use crate::error::app_error::AppError;
use crate::models::user::User;

#[async_trait::async_trait]
pub trait UserRepository {
    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>, AppError>;
    /// Inserts a user with an already hashed password. Uniqueness of the
    /// username is enforced by the table constraint only.
    async fn create_user(&self, username: &str, password_hash: &str) -> Result<User, AppError>;
}

#[async_trait::async_trait]
impl UserRepository for PostgresRepository {
    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, login AS username, password_hash
            FROM users
            WHERE login = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::db("Failed to look up user", e))?;

        Ok(user)
    }

    async fn create_user(&self, username: &str, password_hash: &str) -> Result<User, AppError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (login, password_hash)
            VALUES ($1, $2)
            RETURNING id, login AS username, password_hash
            "#,
        )
        .bind(username)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => AppError::UserAlreadyExists(username.to_string()),
            _ => AppError::db("Failed to create user", e),
        })?;

        Ok(user)
    }
}
