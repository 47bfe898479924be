use axum::extract::{Extension, Json, State};
use fundbridge_core::services::ticket_service::TicketService;
use fundbridge_core::{AppState, Claims};
use fundbridge_primitives::error::ApiError;
use fundbridge_primitives::models::{CreateTicketRequest, TicketDto};
use http::StatusCode;
use std::sync::Arc;
use validator::Validate;

#[utoipa::path(
    post,
    path = "/api/support/tickets",
    request_body = CreateTicketRequest,
    responses(
        (status = 201, description = "Ticket opened", body = TicketDto),
        (status = 400, description = "Invalid input"),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearerAuth" = [])),
    tag = "Support"
)]
pub async fn create_ticket(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Json(req): Json<CreateTicketRequest>,
) -> Result<(StatusCode, Json<TicketDto>), ApiError> {
    req.validate().map_err(ApiError::Validation)?;

    let ticket = TicketService::create(&state, &claims, req).await?;
    Ok((StatusCode::CREATED, Json(ticket)))
}
