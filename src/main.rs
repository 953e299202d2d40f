use actix_web::{self, middleware::Logger, web, App, HttpServer};
use std::sync::{Arc, LazyLock};

use crate::modules::file_upload::{FileUploadService, LocalStorage};

mod api;
mod configs;
mod constants;
mod middlewares;
mod modules;
mod utils;


pub static ENV: LazyLock<constants::Env> = LazyLock::new(|| {
    dotenvy::dotenv().ok();
    env_logger::init();
    log::info!("Environment variables loaded from .env file");
    constants::Env::default()
});

#[actix_web::get("/")]
async fn health_check() -> &'static str {
    "Server is running"
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let config = configs::upload_config(&ENV);

    let storage = configs::connect_storage(&config)
        .await
        .map_err(|e| {
            log::error!("Storage initialization error: {:?}", e);
            std::io::Error::other("Storage initialization error")
        })?;

    let upload_service = FileUploadService::new(Arc::new(storage), config);

    log::info!("Starting server at http://{}:{}", ENV.ip.as_str(), ENV.port);
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(upload_service.clone()))
            .service(health_check)
            .configure(modules::file_upload::route::configure::<LocalStorage>)
    })
    .bind((ENV.ip.as_str(), ENV.port))?
    .workers(ENV.workers)
    .run()
    .await
}
