use rocket::FromForm;
use validator::Validate;

/// Row of the `users` table.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub password_hash: String,
}

#[derive(FromForm, Debug, Validate)]
pub struct CreateUserForm {
    #[validate(length(min = 1, max = 64, message = "Username must be between 1 and 64 characters"))]
    pub username: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
}

#[derive(FromForm, Debug)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}
