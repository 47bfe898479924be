use crate::app_state::AppState;
use crate::repositories::ticket_repository::TicketRepository;
use crate::repositories::user_repository::UserRepository;
use crate::security::Claims;
use diesel::prelude::*;
use fundbridge_primitives::error::ApiError;
use fundbridge_primitives::models::dtos::{
    CreateTicketRequest, TicketDetailResponse, TicketDto, TicketMessageDto, TicketMessageRequest,
    TicketsResponse,
};
use fundbridge_primitives::models::entities::enum_types::TicketStatus;
use fundbridge_primitives::models::entities::support_ticket::{NewSupportTicket, NewTicketMessage};
use fundbridge_primitives::models::entities::User;
use tracing::info;
use uuid::Uuid;

pub struct TicketService;

impl TicketService {
    pub async fn create(
        state: &AppState,
        claims: &Claims,
        req: CreateTicketRequest,
    ) -> Result<TicketDto, ApiError> {
        let mut conn = state.db.get()?;
        let user = UserRepository::require_by_subject(&mut conn, claims.subject())?;

        let ticket = conn.transaction::<_, ApiError, _>(|conn| {
            let ticket = TicketRepository::create(
                conn,
                NewSupportTicket {
                    user_id: user.id,
                    subject: &req.subject,
                    status: TicketStatus::Open,
                },
            )?;

            TicketRepository::add_message(
                conn,
                NewTicketMessage {
                    ticket_id: ticket.id,
                    author_id: user.id,
                    body: &req.message,
                },
            )?;

            Ok(ticket)
        })?;

        info!(ticket_id = %ticket.id, "support ticket opened");

        Ok(TicketDto::from(ticket))
    }

    pub async fn list_mine(state: &AppState, claims: &Claims) -> Result<TicketsResponse, ApiError> {
        let mut conn = state.db.get()?;
        let user = UserRepository::require_by_subject(&mut conn, claims.subject())?;
        let tickets = TicketRepository::list_by_user(&mut conn, user.id)?;

        Ok(TicketsResponse {
            tickets: tickets.into_iter().map(TicketDto::from).collect(),
        })
    }

    pub async fn detail(
        state: &AppState,
        claims: &Claims,
        ticket_id: Uuid,
    ) -> Result<TicketDetailResponse, ApiError> {
        let mut conn = state.db.get()?;
        let user = UserRepository::require_by_subject(&mut conn, claims.subject())?;

        let ticket = TicketRepository::find_by_id(&mut conn, ticket_id)?
            .ok_or_else(|| ApiError::NotFound("Ticket".into()))?;
        if ticket.user_id != user.id {
            return Err(ApiError::NotFound("Ticket".into()));
        }

        let messages = TicketRepository::messages_of(&mut conn, ticket_id)?;

        Ok(TicketDetailResponse {
            ticket: TicketDto::from(ticket),
            messages: messages.into_iter().map(TicketMessageDto::from).collect(),
        })
    }

    /// A user reply re-opens an answered ticket.
    pub async fn add_message(
        state: &AppState,
        claims: &Claims,
        ticket_id: Uuid,
        req: TicketMessageRequest,
    ) -> Result<TicketMessageDto, ApiError> {
        let mut conn = state.db.get()?;
        let user = UserRepository::require_by_subject(&mut conn, claims.subject())?;

        let ticket = TicketRepository::find_by_id(&mut conn, ticket_id)?
            .ok_or_else(|| ApiError::NotFound("Ticket".into()))?;
        if ticket.user_id != user.id {
            return Err(ApiError::NotFound("Ticket".into()));
        }
        if ticket.status == TicketStatus::Closed {
            return Err(ApiError::Forbidden("Ticket is closed".into()));
        }

        let message = conn.transaction::<_, ApiError, _>(|conn| {
            let message = TicketRepository::add_message(
                conn,
                NewTicketMessage {
                    ticket_id,
                    author_id: user.id,
                    body: &req.body,
                },
            )?;
            TicketRepository::set_status(conn, ticket_id, TicketStatus::Open)?;
            Ok(message)
        })?;

        Ok(TicketMessageDto::from(message))
    }

    pub async fn list_all(state: &AppState) -> Result<TicketsResponse, ApiError> {
        let mut conn = state.db.get()?;
        let tickets = TicketRepository::list_all(&mut conn)?;

        Ok(TicketsResponse {
            tickets: tickets.into_iter().map(TicketDto::from).collect(),
        })
    }

    pub async fn reply(
        state: &AppState,
        reviewer: &User,
        ticket_id: Uuid,
        req: TicketMessageRequest,
    ) -> Result<TicketMessageDto, ApiError> {
        let mut conn = state.db.get()?;

        let ticket = TicketRepository::find_by_id(&mut conn, ticket_id)?
            .ok_or_else(|| ApiError::NotFound("Ticket".into()))?;
        if ticket.status == TicketStatus::Closed {
            return Err(ApiError::Forbidden("Ticket is closed".into()));
        }

        let message = conn.transaction::<_, ApiError, _>(|conn| {
            let message = TicketRepository::add_message(
                conn,
                NewTicketMessage {
                    ticket_id,
                    author_id: reviewer.id,
                    body: &req.body,
                },
            )?;
            TicketRepository::set_status(conn, ticket_id, TicketStatus::Answered)?;
            Ok(message)
        })?;

        Ok(TicketMessageDto::from(message))
    }

    pub async fn close(
        state: &AppState,
        reviewer: &User,
        ticket_id: Uuid,
    ) -> Result<TicketDto, ApiError> {
        let mut conn = state.db.get()?;

        TicketRepository::find_by_id(&mut conn, ticket_id)?
            .ok_or_else(|| ApiError::NotFound("Ticket".into()))?;

        let ticket = TicketRepository::set_status(&mut conn, ticket_id, TicketStatus::Closed)?;
        info!(ticket_id = %ticket_id, reviewer = %reviewer.id, "ticket closed");

        Ok(TicketDto::from(ticket))
    }
}
