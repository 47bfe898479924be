use axum::extract::{Extension, Json, Path, State};
use fundbridge_core::services::ticket_service::TicketService;
use fundbridge_core::{AppState, Claims};
use fundbridge_primitives::error::ApiError;
use fundbridge_primitives::models::{TicketDetailResponse, TicketsResponse};
use std::sync::Arc;
use uuid::Uuid;

#[utoipa::path(
    get,
    path = "/api/support/tickets",
    responses(
        (status = 200, description = "Caller's tickets, most recently active first", body = TicketsResponse),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearerAuth" = [])),
    tag = "Support"
)]
pub async fn user_tickets(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<TicketsResponse>, ApiError> {
    let tickets = TicketService::list_mine(&state, &claims).await?;
    Ok(Json(tickets))
}

#[utoipa::path(
    get,
    path = "/api/support/tickets/{ticket_id}",
    params(("ticket_id" = Uuid, Path, description = "Ticket id")),
    responses(
        (status = 200, description = "Ticket with its message thread", body = TicketDetailResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Unknown ticket")
    ),
    security(("bearerAuth" = [])),
    tag = "Support"
)]
pub async fn ticket_detail(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Path(ticket_id): Path<Uuid>,
) -> Result<Json<TicketDetailResponse>, ApiError> {
    let detail = TicketService::detail(&state, &claims, ticket_id).await?;
    Ok(Json(detail))
}
