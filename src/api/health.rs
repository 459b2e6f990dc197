use actix_web::{HttpResponse, Responder, get, web};
use chrono::Utc;
use serde_json::json;
use sqlx::PgPool;
use tracing::error;

use crate::db;

/// Liveness probe for the container runtime. No database round-trip.
#[get("/")]
pub async fn index() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "status": "OK",
        "message": "Backend funcionando correctamente",
        "timestamp": Utc::now().naive_utc(),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Readiness probe: one trivial query against the database.
#[get("/health")]
pub async fn health(pool: web::Data<PgPool>) -> impl Responder {
    match db::ping(pool.get_ref()).await {
        Ok(()) => HttpResponse::Ok().json(json!({
            "status": "healthy",
            "database": "connected",
        })),
        Err(e) => {
            error!(error = %e, "Health check failed");
            HttpResponse::ServiceUnavailable().json(json!({
                "status": "unhealthy",
                "error": e.to_string(),
            }))
        }
    }
}
