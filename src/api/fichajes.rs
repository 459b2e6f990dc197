use actix_web::{HttpResponse, web};
use serde_json::json;
use sqlx::PgPool;
use tracing::{error, info};

use crate::db;
use crate::error::ApiError;
use crate::model::fichaje::NuevoFichaje;

/// Registers one check-in/check-out event.
///
/// Validation runs before any storage call: body present and parseable,
/// required fields non-empty, tipo within the enumeration. The first
/// violation is returned as a 400 and nothing is written.
pub async fn registrar_fichaje(
    pool: web::Data<PgPool>,
    body: web::Bytes,
) -> Result<HttpResponse, ApiError> {
    let payload: NuevoFichaje = serde_json::from_slice(&body)
        .map_err(|_| ApiError::Validation("Request body is required".to_string()))?;

    let fichaje = payload.validar()?;

    let (fichaje_id, created_at) = db::insertar_fichaje(pool.get_ref(), &fichaje)
        .await
        .map_err(|e| {
            error!(error = %e, empleado_id = %fichaje.empleado_id, "Error registering fichaje");
            e
        })?;

    info!(
        empleado_id = %fichaje.empleado_id,
        tipo = fichaje.tipo.as_str(),
        "Fichaje registrado"
    );

    Ok(HttpResponse::Created().json(json!({
        "success": true,
        "mensaje": "Fichaje registrado exitosamente",
        "fichaje_id": fichaje_id,
        "timestamp": created_at,
    })))
}

/// Lists the most recent events for one employee (newest first, max 100).
pub async fn obtener_fichajes(
    pool: web::Data<PgPool>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let empleado_id = path.into_inner();

    let fichajes = db::fichajes_de_empleado(pool.get_ref(), &empleado_id)
        .await
        .map_err(|e| {
            error!(error = %e, empleado_id = %empleado_id, "Error fetching fichajes");
            e
        })?;

    Ok(HttpResponse::Ok().json(json!({
        "fichajes": fichajes,
        "total": fichajes.len(),
    })))
}
