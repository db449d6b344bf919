use crate::{error::GameError, game::session::GameHandle};
use actix_web::{post, web, HttpResponse};
use serde::Deserialize;
use serde_json::json;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BattleReq {
    #[serde(default)]
    pub pet1_id: Option<u64>,
    #[serde(default)]
    pub pet2_id: Option<u64>,
}

/// POST /api/battle
#[post("/battle")]
pub async fn battle(
    info: web::Json<BattleReq>,
    game: web::Data<GameHandle>,
) -> Result<HttpResponse, GameError> {
    let (Some(pet1_id), Some(pet2_id)) = (info.pet1_id, info.pet2_id) else {
        return Err(GameError::MissingPetId);
    };
    let report = game.battle(pet1_id, pet2_id).await?;
    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "winner": report.winner,
        "battleLog": report.battle_log,
        "coins": report.coins,
    })))
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(battle);
}
