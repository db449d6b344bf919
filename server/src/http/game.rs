//! Whole-game reads and the reset button.

use crate::{error::GameError, game::catalog, game::session::GameHandle};
use actix_web::{get, post, web, HttpResponse, Responder};
use serde_json::json;

/// GET /api/game
#[get("/game")]
pub async fn get_game(game: web::Data<GameHandle>) -> Result<HttpResponse, GameError> {
    let state = game.snapshot().await?;
    Ok(HttpResponse::Ok().json(state))
}

/// GET /api/pet-types
#[get("/pet-types")]
pub async fn pet_types() -> impl Responder {
    HttpResponse::Ok().json(catalog::pet_types())
}

/// POST /api/reset
#[post("/reset")]
pub async fn reset(game: web::Data<GameHandle>) -> Result<HttpResponse, GameError> {
    game.reset().await?;
    Ok(HttpResponse::Ok().json(json!({ "success": true, "message": "Game direset!" })))
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(get_game).service(pet_types).service(reset);
}
