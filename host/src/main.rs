mod assets;
mod config;

use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use env_logger::Env;
use log::{info, warn};
use std::thread;
use std::time::Duration;

use crate::config::HostConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // `.env` first so it can also set RUST_LOG.
    if let Err(err) = dotenvy::dotenv() {
        if !err.not_found() {
            eprintln!("failed to read .env: {err}");
        }
    }
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = HostConfig::from_env();
    let url = config.url();

    if !assets::has_bundle() {
        warn!("No frontend bundle embedded; run `trunk build` in frontend/ and rebuild the host");
    }

    if config.open_browser {
        let url = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            if let Err(err) = webbrowser::open(&url) {
                warn!("Could not open browser: {err}");
            }
        });
    }

    info!("Server running at {}", url);

    HttpServer::new(|| {
        App::new()
            .wrap(Logger::default())
            .default_service(web::route().to(assets::serve_embedded))
    })
        .bind((config.host.as_str(), config.port))?
        .run()
        .await
}
