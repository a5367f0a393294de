use crate::config::SessionConfig;
use crate::error::app_error::AppError;
use chrono::Utc;
use rocket::http::{Cookie, CookieJar};
use rocket::time::Duration;

const EXPIRY_SEPARATOR: char = '|';

/// Cookie payload: the username followed by the unix time the session stops
/// being valid. The payload is only ever stored through the private cookie
/// jar, so clients can neither read nor alter it.
pub(crate) fn session_cookie_value(username: &str, expires_at: i64) -> String {
    format!("{username}{EXPIRY_SEPARATOR}{expires_at}")
}

pub(crate) fn parse_session_cookie_value(value: &str, now: i64) -> Option<String> {
    let (username, expires_at) = value.rsplit_once(EXPIRY_SEPARATOR)?;
    let expires_at = expires_at.parse::<i64>().ok()?;
    if username.is_empty() || expires_at <= now {
        return None;
    }
    Some(username.to_string())
}

/// Issues the session cookie for `username`.
pub fn set_session(cookies: &CookieJar<'_>, config: &SessionConfig, username: &str) {
    let expires_at = Utc::now().timestamp() + config.ttl_minutes * 60;
    let cookie = Cookie::build((config.cookie_name.clone(), session_cookie_value(username, expires_at)))
        .path("/")
        .max_age(Duration::minutes(config.ttl_minutes))
        .build();

    cookies.add_private(cookie);
}

/// Username held by the session, or [`AppError::SessionNotFound`] when the
/// cookie is missing, was not issued by this server, or has expired.
pub fn get_session(cookies: &CookieJar<'_>, config: &SessionConfig) -> Result<String, AppError> {
    cookies
        .get_private(&config.cookie_name)
        .and_then(|cookie| parse_session_cookie_value(cookie.value(), Utc::now().timestamp()))
        .ok_or(AppError::SessionNotFound)
}

pub fn clear_session(cookies: &CookieJar<'_>, config: &SessionConfig) {
    cookies.remove_private(Cookie::build(config.cookie_name.clone()).path("/").build());
}

pub fn is_session_active(cookies: &CookieJar<'_>, config: &SessionConfig) -> bool {
    get_session(cookies, config).is_ok()
}
