//! Notes service: a REST API over a non-persistent, in-memory note list.
//!
//! The binary in `main.rs` wires this into an `actix_web::HttpServer`; tests and
//! other crates can mount the same routes through [`configure`].

use actix_cors::Cors;
use actix_web::{error::InternalError, web, HttpResponse};
use notes_types::MessageResponse;
use std::sync::Arc;

pub mod config;
pub mod controllers;
pub mod store;

pub use config::{Config, IdPolicy};
pub use store::NoteStore;

pub struct AppState {
    pub store: Arc<NoteStore>,
    pub config: Config,
    /// Server start time for uptime calculation
    pub started_at: std::time::Instant,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            store: Arc::new(NoteStore::new(config.id_policy)),
            config,
            started_at: std::time::Instant::now(),
        }
    }
}

/// Register the JSON extractor config and every route.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .configure(controllers::health::config_routes)
        .configure(controllers::notes::config);
}

/// Any origin, any method, any header.
pub fn cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allow_any_method()
        .allow_any_header()
        .max_age(3600)
}

/// Accept JSON bodies whatever their Content-Type, and answer parse failures
/// with a `{message}` body instead of plain text.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .content_type_required(false)
        .error_handler(|err, _req| {
            let message = err.to_string();
            log::warn!("Rejected request body: {}", message);
            InternalError::from_response(
                err,
                HttpResponse::BadRequest().json(MessageResponse::new(message)),
            )
            .into()
        })
}
