use actix_web::{get, web, HttpResponse, Responder};
use deadpool_redis::{redis, Pool};
use sea_orm::{ConnectionTrait, DatabaseConnection, Statement};
use serde::Serialize;
use std::sync::Arc;

/// Connections the readiness probe pings. Either may be absent when its URL is
/// not configured.
#[derive(Clone, Default)]
pub struct Backends {
    pub db: Option<Arc<DatabaseConnection>>,
    pub redis: Option<Arc<Pool>>,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

#[derive(Serialize)]
struct ReadinessResponse {
    status: &'static str,
    database: &'static str,
    redis: &'static str,
}

const OK: &str = "ok";
const UNHEALTHY: &str = "unhealthy";
const NOT_CONFIGURED: &str = "not_configured";

/// LIVENESS PROBE
/// - No I/O
/// - No DB
/// - No Redis
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse { status: "ok" })
}

async fn database_status(db: Option<&DatabaseConnection>) -> &'static str {
    let Some(db) = db else {
        return NOT_CONFIGURED;
    };

    match db
        .execute(Statement::from_string(
            db.get_database_backend(),
            "SELECT 1",
        ))
        .await
    {
        Ok(_) => OK,
        Err(e) => {
            tracing::warn!("Readiness: database ping failed: {}", e);
            UNHEALTHY
        }
    }
}

async fn redis_status(pool: Option<&Pool>) -> &'static str {
    let Some(pool) = pool else {
        return NOT_CONFIGURED;
    };

    let mut conn = match pool.get().await {
        Ok(conn) => conn,
        Err(e) => {
            tracing::warn!("Readiness: redis pool error: {}", e);
            return UNHEALTHY;
        }
    };

    match redis::cmd("PING").query_async::<String>(&mut conn).await {
        Ok(_) => OK,
        Err(e) => {
            tracing::warn!("Readiness: redis ping failed: {}", e);
            UNHEALTHY
        }
    }
}

/// READINESS PROBE
/// - Pings every configured backend
/// - An unconfigured backend is reported but does not fail the probe, the
///   server runs degraded without it
#[get("/ready")]
pub async fn readiness(backends: web::Data<Backends>) -> impl Responder {
    let database = database_status(backends.db.as_deref()).await;
    let redis = redis_status(backends.redis.as_deref()).await;

    if database == UNHEALTHY || redis == UNHEALTHY {
        HttpResponse::ServiceUnavailable().json(ReadinessResponse {
            status: UNHEALTHY,
            database,
            redis,
        })
    } else {
        HttpResponse::Ok().json(ReadinessResponse {
            status: OK,
            database,
            redis,
        })
    }
}
