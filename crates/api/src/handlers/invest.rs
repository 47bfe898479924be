use axum::extract::{Extension, Json, Path, State};
use fundbridge_core::services::investment_service::InvestmentService;
use fundbridge_core::{AppState, Claims};
use fundbridge_primitives::error::ApiError;
use fundbridge_primitives::models::{InvestSubmitRequest, InvestmentRequestDto};
use http::StatusCode;
use std::sync::Arc;
use tracing::error;
use uuid::Uuid;
use validator::Validate;

#[utoipa::path(
    post,
    path = "/api/projects/{project_id}/invest",
    params(("project_id" = Uuid, Path, description = "Project id")),
    request_body = InvestSubmitRequest,
    responses(
        (status = 201, description = "Investment request pending review", body = InvestmentRequestDto),
        (status = 400, description = "Invalid input or business-rule rejection"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Unknown project"),
        (status = 409, description = "Duplicate request for this project")
    ),
    security(("bearerAuth" = [])),
    tag = "Investments"
)]
pub async fn submit_investment(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Path(project_id): Path<Uuid>,
    Json(req): Json<InvestSubmitRequest>,
) -> Result<(StatusCode, Json<InvestmentRequestDto>), ApiError> {
    req.validate().map_err(|e| {
        error!("Validation error: {}", e);
        ApiError::Validation(e)
    })?;

    let request = InvestmentService::submit(&state, &claims, project_id, req).await?;
    Ok((StatusCode::CREATED, Json(request)))
}
