mod config;
mod services;

use crate::config::Config;
use crate::services::certificates::FontSource;
use crate::services::proxy::Upstream;
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use clap::Parser;
use env_logger::Env;
use include_dir::{include_dir, Dir};
use log::{info, warn};
use mime_guess::from_path;
use std::thread;
use std::time::Duration;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

/// Request bodies carry photos inline as data URLs.
const PAYLOAD_LIMIT: usize = 10 * 1024 * 1024;

async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    let path = req.path().trim_start_matches('/');
    let file_path = if path.is_empty() { "index.html" } else { path };

    match STATIC_DIR.get_file(file_path) {
        Some(file) => {
            let mime = from_path(file_path).first_or_octet_stream();
            HttpResponse::Ok()
                .content_type(mime.as_ref())
                .body(file.contents().to_vec())
        }
        None => match STATIC_DIR.get_file("index.html") {
            Some(index) => HttpResponse::Ok()
                .content_type("text/html; charset=utf-8")
                .body(index.contents().to_vec()),
            None => HttpResponse::NotFound().body("Not Found"),
        },
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let config = Config::parse();
    let url = config.url();

    if !config.no_browser {
        let url = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            if let Err(err) = webbrowser::open(&url) {
                warn!("Could not open a browser: {}", err);
            }
        });
    }

    if STATIC_DIR.get_file("index.html").is_none() {
        warn!("No console bundle embedded; run `trunk build` in frontend/ and rebuild");
    }

    let upstream = web::Data::new(Upstream::new(&config.api_upstream));
    let fonts = web::Data::new(FontSource::from(&config));

    info!("Forwarding /api to {}", config.api_upstream);
    info!("Server running at {}", url);

    HttpServer::new(move || {
        App::new()
            .app_data(web::JsonConfig::default().limit(PAYLOAD_LIMIT))
            .app_data(web::PayloadConfig::new(PAYLOAD_LIMIT))
            .app_data(upstream.clone())
            .app_data(fonts.clone())
            .service(services::proxy::configure_routes())
            .service(services::certificates::configure_routes())
            .default_service(web::route().to(serve_embedded))
    })
        .bind((config.host.as_str(), config.port))?
        .run()
        .await
}
