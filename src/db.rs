use chrono::NaiveDateTime;
use sqlx::PgPool;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use tracing::{error, info};

use crate::config::Config;
use crate::error::ApiError;
use crate::model::fichaje::{Fichaje, FichajeValido};

const CREATE_FICHAJES: &str = "\
    CREATE TABLE IF NOT EXISTS fichajes (
        id SERIAL PRIMARY KEY,
        empleado_id VARCHAR(50) NOT NULL,
        tipo VARCHAR(20) NOT NULL,
        actividad TEXT,
        latitud DOUBLE PRECISION,
        longitud DOUBLE PRECISION,
        created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
    )";

/// Builds the one process-wide pool. `connect_lazy_with` performs no I/O
/// here: connections are established on first use and re-established on
/// demand after drops. The private/public addressing choice is fixed at
/// startup and not re-evaluated per call.
pub fn connect_lazy(config: &Config) -> PgPool {
    let host = if config.use_private_ip {
        config.db_private_host.as_deref().unwrap_or(&config.db_host)
    } else {
        &config.db_host
    };

    let options = PgConnectOptions::new()
        .host(host)
        .port(config.db_port)
        .username(&config.db_user)
        .password(&config.db_pass)
        .database(&config.db_name);

    PgPoolOptions::new()
        .max_connections(5)
        .connect_lazy_with(options)
}

/// Idempotent table creation. Best effort: a failure here is logged and the
/// process keeps serving, so a transient outage at boot does not take the
/// service down. Later requests surface their own connection errors.
pub async fn ensure_schema(pool: &PgPool) {
    match sqlx::query(CREATE_FICHAJES).execute(pool).await {
        Ok(_) => info!("Database initialized successfully"),
        Err(e) => error!(error = %e, "Error initializing database"),
    }
}

/// Trivial round-trip used by the health probe.
pub async fn ping(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Inserts exactly one row. `created_at` is assigned by the database, not
/// the application clock, so audit ordering is immune to client skew. The
/// single-statement insert commits atomically before this returns.
pub async fn insertar_fichaje(
    pool: &PgPool,
    fichaje: &FichajeValido,
) -> Result<(i32, NaiveDateTime), ApiError> {
    let (id, created_at) = sqlx::query_as::<_, (i32, NaiveDateTime)>(
        "INSERT INTO fichajes (empleado_id, tipo, actividad, latitud, longitud) \
         VALUES ($1, $2, $3, $4, $5) \
         RETURNING id, created_at",
    )
    .bind(&fichaje.empleado_id)
    .bind(fichaje.tipo.as_str())
    .bind(&fichaje.actividad)
    .bind(fichaje.latitud)
    .bind(fichaje.longitud)
    .fetch_one(pool)
    .await?;

    Ok((id, created_at))
}

/// Most recent events for one employee, newest first, capped at 100 rows.
/// An unknown employee yields an empty list, not an error.
pub async fn fichajes_de_empleado(
    pool: &PgPool,
    empleado_id: &str,
) -> Result<Vec<Fichaje>, ApiError> {
    let fichajes = sqlx::query_as::<_, Fichaje>(
        "SELECT id, empleado_id, tipo, actividad, latitud, longitud, created_at \
         FROM fichajes \
         WHERE empleado_id = $1 \
         ORDER BY created_at DESC \
         LIMIT 100",
    )
    .bind(empleado_id)
    .fetch_all(pool)
    .await?;

    Ok(fichajes)
}
