//! Simple liveness / readiness probe

use crate::game::session::GameHandle;
use actix_web::{get, web, HttpResponse, Responder};

#[get("/healthz")]
pub async fn healthz(game: web::Data<GameHandle>) -> impl Responder {
    // The game task must still be answering commands.
    if game.snapshot().await.is_err() {
        return HttpResponse::ServiceUnavailable().body("game session");
    }

    HttpResponse::Ok().body("ok")
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(healthz);
}
