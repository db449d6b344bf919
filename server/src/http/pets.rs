//! Per-pet actions: food search and training.

use crate::{
    error::GameError,
    game::{logic::FoodSearch, session::GameHandle},
};
use actix_web::{post, web, HttpResponse};
use serde_json::json;

/// POST /api/search-food/{pet_id}
///
/// Holds the request open for the whole search (1–3 s by default).
#[post("/search-food/{pet_id}")]
pub async fn search_food(
    path: web::Path<u64>,
    game: web::Data<GameHandle>,
) -> Result<HttpResponse, GameError> {
    let body = match game.search_food(path.into_inner()).await? {
        FoodSearch::Found { power, pet } => json!({
            "success": true,
            "message": format!("Menemukan makanan ajaib! +{power} Energy & HP!"),
            "pet": pet,
        }),
        FoodSearch::Lost => json!({
            "success": false,
            "message": "Tersesat di hutan!",
        }),
    };
    Ok(HttpResponse::Ok().json(body))
}

/// POST /api/train/{pet_id}
#[post("/train/{pet_id}")]
pub async fn train(
    path: web::Path<u64>,
    game: web::Data<GameHandle>,
) -> Result<HttpResponse, GameError> {
    let out = game.train(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "pet": out.pet,
        "coins": out.coins,
        "leveledUp": out.leveled_up,
    })))
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(search_food).service(train);
}
