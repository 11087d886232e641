//! Health check endpoint.

use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, web};

use crate::state::AppState;

/// Liveness probe - `ok` while the database answers, 503 otherwise.
///
/// GET /health
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    match state.db.ping().await {
        Ok(()) => HttpResponse::Ok()
            .content_type(ContentType::plaintext())
            .body("ok"),
        Err(e) => {
            tracing::warn!("Health check failed to reach database: {}", e);
            HttpResponse::ServiceUnavailable()
                .content_type(ContentType::plaintext())
                .body("database unavailable")
        }
    }
}
