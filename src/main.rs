use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use actix_web::middleware::Logger;
use actix_web_prom::PrometheusMetricsBuilder;
use dotenv::dotenv;
use env_logger::Env;
use log::info;
use std::collections::HashMap;
use std::io;
use std::sync::Arc;

use fitplan_backend::config::Config;
use fitplan_backend::db::{MemoryStore, UserStore};
use fitplan_backend::routes;
use fitplan_backend::utils::catalog::load_catalog;

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = Config::load();

    // Catalog is read once and shared read-only across workers
    let catalog = web::Data::new(load_catalog(&config.data_dir));
    let store: Arc<dyn UserStore> = Arc::new(MemoryStore::new());
    let store = web::Data::from(store);

    // Set up Prometheus metrics
    let mut labels = HashMap::new();
    labels.insert("app".to_string(), "fitplan".to_string());
    let prometheus = PrometheusMetricsBuilder::new("api")
        .endpoint("/metrics")
        .const_labels(labels)
        .build()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;

    info!("Starting server at {} with {} workers", config.bind_address, config.workers);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .send_wildcard()
            .allow_any_method()
            .allow_any_header();

        App::new()
            .wrap(cors)
            .wrap(Logger::default())
            .wrap(prometheus.clone())
            .app_data(store.clone())
            .app_data(catalog.clone())
            .configure(routes::configure)
    })
    .workers(config.workers)
    .bind(&config.bind_address)?
    .run()
    .await
}
