use axum::extract::{Extension, Json, Path, State};
use fundbridge_core::services::ticket_service::TicketService;
use fundbridge_core::{AppState, Claims};
use fundbridge_primitives::error::ApiError;
use fundbridge_primitives::models::{TicketMessageDto, TicketMessageRequest};
use http::StatusCode;
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

#[utoipa::path(
    post,
    path = "/api/support/tickets/{ticket_id}/messages",
    params(("ticket_id" = Uuid, Path, description = "Ticket id")),
    request_body = TicketMessageRequest,
    responses(
        (status = 201, description = "Message appended", body = TicketMessageDto),
        (status = 400, description = "Invalid input"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Ticket is closed"),
        (status = 404, description = "Unknown ticket")
    ),
    security(("bearerAuth" = [])),
    tag = "Support"
)]
pub async fn add_ticket_message(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Path(ticket_id): Path<Uuid>,
    Json(req): Json<TicketMessageRequest>,
) -> Result<(StatusCode, Json<TicketMessageDto>), ApiError> {
    req.validate().map_err(ApiError::Validation)?;

    let message = TicketService::add_message(&state, &claims, ticket_id, req).await?;
    Ok((StatusCode::CREATED, Json(message)))
}
