use crate::database::user::UserRepository;
use crate::error::app_error::AppError;
use crate::models::user::User;
use argon2::Argon2;
use password_hash::rand_core::OsRng;
use password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use std::sync::LazyLock;
use tracing::debug;

/// A real Argon2 hash generated once, used as a timing decoy so that logins
/// for unknown usernames cost the same as logins for existing ones.
static DUMMY_HASH: LazyLock<Option<String>> = LazyLock::new(|| hash_password("dummy-never-matches").ok());

pub struct AuthService<'a, R> {
    repository: &'a R,
}

impl<'a, R> AuthService<'a, R>
where
    R: UserRepository + Sync,
{
    pub fn new(repository: &'a R) -> Self {
        AuthService { repository }
    }

    /// Hashes `password` and stores a new user. A taken username surfaces as
    /// [`AppError::UserAlreadyExists`] from the storage layer.
    pub async fn create_user(&self, username: &str, password: &str) -> Result<User, AppError> {
        let password = password.to_owned();
        let password_hash = tokio::task::spawn_blocking(move || hash_password(&password))
            .await
            .map_err(|e| AppError::task("Password hashing task failed", e))??;

        self.repository.create_user(username, &password_hash).await
    }

    pub async fn authenticate(&self, username: &str, password: &str) -> Result<User, AppError> {
        let Some(user) = self.repository.get_user_by_username(username).await? else {
            let password = password.to_owned();
            tokio::task::spawn_blocking(move || dummy_verify(&password))
                .await
                .map_err(|e| AppError::task("Password verification task failed", e))?;
            return Err(AppError::UserNotFound);
        };

        let password = password.to_owned();
        let stored_hash = user.password_hash.clone();
        tokio::task::spawn_blocking(move || verify_password(&stored_hash, &password))
            .await
            .map_err(|e| AppError::task("Password verification task failed", e))??;

        Ok(user)
    }

    /// Loads the user named by a session. `Ok(None)` means the request is
    /// unauthenticated, either because there is no session or because the
    /// user it names no longer exists.
    pub async fn user_for_session(&self, session_username: Option<&str>) -> Result<Option<User>, AppError> {
        let Some(username) = session_username else {
            return Ok(None);
        };

        let user = self.repository.get_user_by_username(username).await?;
        if user.is_none() {
            debug!(username = %username, "session refers to an unknown user");
        }

        Ok(user)
    }
}

pub(crate) fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    let password_hash = Argon2::default().hash_password(password.as_bytes(), &salt)?;

    Ok(password_hash.to_string())
}

pub(crate) fn verify_password(stored_hash: &str, password: &str) -> Result<(), AppError> {
    let password_hash = PasswordHash::new(stored_hash).map_err(|e| AppError::password_hash("Failed to parse stored password hash", e))?;
    Argon2::default()
        .verify_password(password.as_bytes(), &password_hash)
        .map_err(|_| AppError::InvalidCredentials)
}

fn dummy_verify(password: &str) {
    if let Some(hash) = DUMMY_HASH.as_deref() {
        let _ = verify_password(hash, password);
    }
}
