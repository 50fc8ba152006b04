mod api;
mod config;
mod database;
mod middleware;
mod models;
mod services;
mod utils;

use actix_cors::Cors;
use actix_web::{middleware::{Compress, Logger}, web, App, HttpServer};
use dotenv::dotenv;
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::database::{MongoDB, Store};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = config::Config::from_env();

    log::info!("🚀 Starting Drug Interaction Service...");
    log::info!("📊 Database: {}", config.mongo_uri);

    // An unparsable connection string is fatal; an unreachable server is not
    let db = MongoDB::new(&config.mongo_uri, config.mongo_database.as_deref())
        .await
        .map_err(|e| std::io::Error::other(format!("Invalid MongoDB configuration: {}", e)))?;

    match db.ping().await {
        Ok(()) => {
            log::info!("✅ MongoDB connected successfully");
            let failed = db.ensure_indexes().await;
            if failed > 0 {
                log::error!("❌ {} index(es) could not be created", failed);
            }
        }
        Err(e) => log::error!("❌ MongoDB connection error: {}", e),
    }

    let store: Arc<dyn Store> = Arc::new(db);
    let store_data = web::Data::from(store);

    let host = config.host.clone();
    let port = config.port;

    log::info!("🌐 Server starting on {}:{}", host, port);
    log::info!("📚 Swagger UI available at: http://{}:{}/swagger-ui/", host, port);
    log::info!("📄 OpenAPI spec at: http://{}:{}/api-docs/openapi.json", host, port);

    // Start HTTP server
    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .expose_headers(vec![
                actix_web::http::header::CONTENT_TYPE,
            ])
            .max_age(3600);

        // Generate OpenAPI specification
        let openapi = api::swagger::ApiDoc::openapi();

        App::new()
            .app_data(store_data.clone())
            .wrap(cors)
            .wrap(middleware::RequestMetrics)
            .wrap(Compress::default())
            .wrap(Logger::default())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi)
            )
            .configure(api::configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
