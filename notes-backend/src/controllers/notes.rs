//! Notes REST API: list, create, replace and delete.
//!
//! Path ids are parsed leniently: leading digits are taken as the id and the
//! rest is ignored, so `/notes/1abc` addresses note 1. A path with no leading
//! digits matches no note.

use actix_web::{web, HttpResponse, Responder};
use notes_types::{MessageResponse, NotePayload};

use crate::AppState;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/notes")
            .route(web::get().to(list_notes))
            .route(web::post().to(create_note)),
    );
    cfg.service(
        web::resource("/notes/{id}")
            .route(web::put().to(update_note))
            .route(web::delete().to(delete_note)),
    );
}

fn parse_id(raw: &str) -> Option<u64> {
    let raw = raw.trim_start();
    let raw = raw.strip_prefix('+').unwrap_or(raw);
    let end = raw
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(raw.len());
    raw[..end].parse().ok()
}

/// Return the whole collection in insertion order
async fn list_notes(data: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(data.store.list())
}

async fn create_note(
    data: web::Data<AppState>,
    body: web::Json<NotePayload>,
) -> impl Responder {
    let note = data.store.create(body.into_inner());
    log::info!("Created note {}", note.id);
    HttpResponse::Ok().json(note)
}

/// Full replace; the id from the path always wins
async fn update_note(
    data: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<NotePayload>,
) -> impl Responder {
    let updated = parse_id(&path).and_then(|id| data.store.update(id, body.into_inner()));

    match updated {
        Some(note) => {
            log::info!("Updated note {}", note.id);
            HttpResponse::Ok().json(note)
        }
        None => {
            log::debug!("Update for unknown note '{}'", path.as_str());
            HttpResponse::NotFound().json(MessageResponse::not_found())
        }
    }
}

/// Always acknowledges, whether or not anything was removed
async fn delete_note(data: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let removed = parse_id(&path).map(|id| data.store.delete(id)).unwrap_or(0);
    log::info!("Delete note '{}': {} removed", path.as_str(), removed);
    HttpResponse::Ok().json(MessageResponse::deleted())
}
