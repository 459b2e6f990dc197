use actix_cors::Cors;
use actix_web::middleware::NormalizePath;
use actix_web::web::{self, Data};
use actix_web::{App, HttpServer};
use dotenvy::dotenv;
use tracing::info;
use tracing_subscriber::EnvFilter;

use fichajes_backend::{api, config::Config, db, routes};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env();

    // One pool for the process lifetime, built before the server accepts
    // traffic and handed to handlers through app data. Connections
    // themselves are established lazily, on first use.
    let pool = db::connect_lazy(&config);

    // Best effort: a boot-time outage must not crash the service.
    db::ensure_schema(&pool).await;

    info!(port = config.port, "Server starting...");

    let addr = ("0.0.0.0", config.port);
    HttpServer::new(move || {
        App::new()
            .wrap(actix_web::middleware::Logger::default())
            .wrap(NormalizePath::trim())
            .app_data(Data::new(pool.clone()))
            .service(api::health::index)
            .service(api::health::health)
            .service(
                web::scope("/api")
                    .wrap(Cors::permissive())
                    .configure(routes::configure),
            )
            .default_service(web::route().to(api::not_found))
    })
    .bind(addr)?
    .run()
    .await
}
