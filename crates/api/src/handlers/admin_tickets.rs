use axum::extract::{Extension, Json, Path, State};
use fundbridge_core::access::AccessControl;
use fundbridge_core::services::ticket_service::TicketService;
use fundbridge_core::{AppState, Claims};
use fundbridge_primitives::error::ApiError;
use fundbridge_primitives::models::entities::enum_types::Capability;
use fundbridge_primitives::models::{
    TicketDto, TicketMessageDto, TicketMessageRequest, TicketsResponse,
};
use http::StatusCode;
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

#[utoipa::path(
    get,
    path = "/api/admin/tickets",
    responses(
        (status = 200, description = "All tickets, most recently active first", body = TicketsResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Missing capability")
    ),
    security(("bearerAuth" = [])),
    tag = "Admin"
)]
pub async fn list_all_tickets(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<TicketsResponse>, ApiError> {
    AccessControl::require_reviewer(&state, &claims, Capability::SupportTickets)?;

    let tickets = TicketService::list_all(&state).await?;
    Ok(Json(tickets))
}

#[utoipa::path(
    post,
    path = "/api/admin/tickets/{ticket_id}/reply",
    params(("ticket_id" = Uuid, Path, description = "Ticket id")),
    request_body = TicketMessageRequest,
    responses(
        (status = 201, description = "Reply appended; ticket marked answered", body = TicketMessageDto),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Missing capability or ticket closed"),
        (status = 404, description = "Unknown ticket")
    ),
    security(("bearerAuth" = [])),
    tag = "Admin"
)]
pub async fn admin_reply_ticket(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Path(ticket_id): Path<Uuid>,
    Json(req): Json<TicketMessageRequest>,
) -> Result<(StatusCode, Json<TicketMessageDto>), ApiError> {
    req.validate().map_err(ApiError::Validation)?;
    let reviewer = AccessControl::require_reviewer(&state, &claims, Capability::SupportTickets)?;

    let message = TicketService::reply(&state, &reviewer, ticket_id, req).await?;
    Ok((StatusCode::CREATED, Json(message)))
}

#[utoipa::path(
    post,
    path = "/api/admin/tickets/{ticket_id}/close",
    params(("ticket_id" = Uuid, Path, description = "Ticket id")),
    responses(
        (status = 200, description = "Ticket closed", body = TicketDto),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Missing capability"),
        (status = 404, description = "Unknown ticket")
    ),
    security(("bearerAuth" = [])),
    tag = "Admin"
)]
pub async fn close_ticket(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Path(ticket_id): Path<Uuid>,
) -> Result<Json<TicketDto>, ApiError> {
    let reviewer = AccessControl::require_reviewer(&state, &claims, Capability::SupportTickets)?;

    let ticket = TicketService::close(&state, &reviewer, ticket_id).await?;
    Ok(Json(ticket))
}
