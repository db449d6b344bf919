use actix_web::{middleware::Logger, web, App, HttpServer};
use anyhow::Context;
use pet_sim_server::{
    config::settings,
    game::{logic::Engine, rng::GameRng, session},
    http, metrics,
};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    // Configuration
    let cfg = settings();
    let rng = match cfg.rng_seed {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_entropy(),
    };
    log::info!("game rng seed {}", rng.seed());

    // One game task owns all state; handlers talk to it through the handle.
    let engine = Engine::with_search_delay(Box::new(rng), cfg.feed_delay_ms());
    let game = web::Data::new(session::spawn(engine));

    log::info!("pet simulator listening on http://{}", cfg.server_addr);
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(metrics::METRICS.clone())
            .app_data(game.clone())
            .configure(http::routes::init_routes)
    })
    .bind(&cfg.server_addr)
    .with_context(|| format!("binding {}", cfg.server_addr))?
    .run()
    .await
    .context("http server")
}
