use axum::Json;
use serde_json::{json, Value};

#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = 200, description = "Service is up")
    ),
    tag = "System"
)]
pub async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
