use rocket::fairing::{Fairing, Info, Kind};
use rocket::http::Header;
use rocket::request::Request;
use rocket::{Data, Response};
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Request ID that is attached to every request for tracking
#[derive(Debug, Clone)]
pub struct RequestId(pub String);

impl RequestId {
    pub fn new() -> Self {
        RequestId(Uuid::new_v4().to_string())
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

fn is_static_asset(request: &Request<'_>) -> bool {
    request.uri().path().as_str().starts_with("/templates/")
}

/// Fairing that tags every request with an id, logs it, and adds the
/// response headers every page shares.
pub struct RequestLogger;

#[rocket::async_trait]
impl Fairing for RequestLogger {
    fn info(&self) -> Info {
        Info {
            name: "Request Logger",
            kind: Kind::Request | Kind::Response,
        }
    }

    async fn on_request(&self, request: &mut Request<'_>, _: &mut Data<'_>) {
        let request_id = RequestId::new();
        request.local_cache(|| Some(request_id.clone()));

        if is_static_asset(request) {
            debug!(request_id = %request_id.0, uri = %request.uri(), "static asset request");
        } else {
            info!(
                request_id = %request_id.0,
                method = %request.method(),
                uri = %request.uri(),
                "incoming request"
            );
        }
    }

    async fn on_response<'r>(&self, request: &'r Request<'_>, response: &mut Response<'r>) {
        let request_id = request
            .local_cache(|| None::<RequestId>)
            .as_ref()
            .map(|r| r.0.clone())
            .unwrap_or_else(|| "unknown".to_string());

        let status = response.status();

        response.set_header(Header::new("X-Request-Id", request_id.clone()));
        response.set_header(Header::new("X-Content-Type-Options", "nosniff"));
        response.set_header(Header::new("X-Frame-Options", "DENY"));

        if !is_static_asset(request) {
            // Rendered pages carry per-user content.
            response.set_header(Header::new("Cache-Control", "no-store"));
        }

        if status.class().is_server_error() || status.class().is_client_error() {
            warn!(
                request_id = %request_id,
                method = %request.method(),
                uri = %request.uri(),
                status = %status.code,
                "request completed with error"
            );
        } else {
            info!(
                request_id = %request_id,
                method = %request.method(),
                uri = %request.uri(),
                status = %status.code,
                "request completed"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rocket::http::Status;
    use rocket::local::asynchronous::Client;
    use rocket::{get, routes};

    #[get("/page")]
    fn page() -> &'static str {
        "ok"
    }

    #[get("/templates/style.css")]
    fn asset() -> &'static str {
        "body {}"
    }

    #[test]
    fn test_request_ids_are_unique_uuids() {
        let id1 = RequestId::new();
        let id2 = RequestId::default();
        assert!(Uuid::parse_str(&id1.0).is_ok());
        assert_ne!(id1.0, id2.0);
    }

    #[rocket::async_test]
    async fn responses_carry_request_id_and_security_headers() {
        let rocket = rocket::build().attach(RequestLogger).mount("/", routes![page, asset]);
        let client = Client::tracked(rocket).await.expect("valid rocket instance");

        let response = client.get("/page").dispatch().await;
        assert_eq!(response.status(), Status::Ok);
        let request_id = response.headers().get_one("X-Request-Id").expect("request id header");
        assert!(Uuid::parse_str(request_id).is_ok());
        assert_eq!(response.headers().get_one("X-Frame-Options"), Some("DENY"));
        assert_eq!(response.headers().get_one("Cache-Control"), Some("no-store"));

        let response = client.get("/templates/style.css").dispatch().await;
        assert_eq!(response.headers().get_one("Cache-Control"), None);
    }
}
