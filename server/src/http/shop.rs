use crate::{error::GameError, game::catalog, game::session::GameHandle};
use actix_web::{get, post, web, HttpResponse, Responder};
use serde::Deserialize;
use serde_json::json;

#[derive(Deserialize)]
pub struct BuyReq {
    /// Missing type reads as empty and is rejected as not in the shop.
    #[serde(rename = "type", default)]
    pub pet_type: String,
}

/// GET /api/shop
#[get("/shop")]
pub async fn list_shop() -> impl Responder {
    HttpResponse::Ok().json(catalog::shop())
}

/// POST /api/buy-pet
#[post("/buy-pet")]
pub async fn buy(
    info: web::Json<BuyReq>,
    game: web::Data<GameHandle>,
) -> Result<HttpResponse, GameError> {
    let BuyReq { pet_type } = info.into_inner();
    let purchase = game.buy(pet_type).await?;

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "pet": purchase.pet,
        "coins": purchase.coins,
    })))
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(list_shop).service(buy);
}
