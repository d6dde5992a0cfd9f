use actix_web::{web, App, HttpServer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use loancalc::config::Config;
use loancalc::middleware::RequestLogger;
use loancalc::modules::rates::services::{RateCache, RateScraper};
use loancalc::modules::{health, loans, rates};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "loancalc=debug,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().expect("Failed to load configuration");
    config.validate().expect("Configuration validation failed");

    tracing::info!("Starting loan calculation service");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Server binding to: {}", config.server.bind_address());

    // Lazy pool: the service starts and serves computed schedules even when
    // the result store is down.
    let db_pool = config
        .database
        .connect_lazy()
        .expect("Invalid database configuration");

    let rate_scraper = web::Data::new(RateScraper::new(config.rates.clone()));
    let rate_cache = web::Data::new(RateCache::new(config.rates.cache_ttl_hours));

    let bind_address = config.server.bind_address();
    let server = HttpServer::new(move || {
        App::new()
            .wrap(RequestLogger)
            .app_data(web::Data::new(db_pool.clone()))
            .app_data(rate_scraper.clone())
            .app_data(rate_cache.clone())
            .service(
                web::scope("/api")
                    .configure(loans::controllers::configure)
                    .configure(rates::controllers::configure),
            )
            .configure(health::controllers::configure)
    })
    .bind(&bind_address)?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await
}
