use actix_web::{App, HttpServer, web};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod api;
mod app;
mod model;
mod service;

use app::AppState;
use model::Config;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present (ignore if missing)
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    let bind_addr = config.bind_addr();

    let state = AppState::new(config).map_err(std::io::Error::other)?;
    let quiz_service = web::Data::from(state.quiz_service);

    tracing::info!("Starting Load Calculator on {}", bind_addr);

    HttpServer::new(move || {
        App::new()
            .app_data(quiz_service.clone())
            .configure(api::pages::configure)
            .configure(api::score::configure)
            .configure(api::health::configure)
            .configure(api::openapi::configure)
            .default_service(web::to(api::error::not_found))
    })
    .bind(&bind_addr)?
    .run()
    .await
}
