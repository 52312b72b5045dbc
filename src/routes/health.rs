use axum::response::IntoResponse;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::SERVICE_NAME;

#[derive(Serialize)]
pub struct HealthResponse {
    ok: bool,
    service: &'static str,
    time: DateTime<Utc>,
}

pub async fn check_health() -> impl IntoResponse {
    Json(HealthResponse {
        ok: true,
        service: SERVICE_NAME,
        time: Utc::now(),
    })
}
