use crate::{error::GameError, http};
use actix_web::{error, web, HttpRequest};

/// Unreadable JSON bodies get the same `{error}` shape as rule failures.
fn json_error(err: error::JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    log::debug!("bad json body: {err}");
    GameError::MalformedBody(err.to_string()).into()
}

/// Mount every HTTP sub-module under `/api`.
pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .app_data(web::JsonConfig::default().error_handler(json_error))
            .configure(http::game::init_routes)
            .configure(http::shop::init_routes)
            .configure(http::pets::init_routes)
            .configure(http::battle::init_routes)
            .configure(http::health::init_routes),
    );
}
