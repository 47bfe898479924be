use crate::models::entities::enum_types::TicketStatus;
use crate::models::entities::{SupportTicket, TicketMessage};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct CreateTicketRequest {
    #[validate(length(min = 3, max = 200))]
    pub subject: String,
    #[validate(length(min = 1, max = 5000))]
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct TicketMessageRequest {
    #[validate(length(min = 1, max = 5000))]
    pub body: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TicketDto {
    pub id: Uuid,
    pub user_id: Uuid,
    pub subject: String,
    pub status: TicketStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<SupportTicket> for TicketDto {
    fn from(ticket: SupportTicket) -> Self {
        Self {
            id: ticket.id,
            user_id: ticket.user_id,
            subject: ticket.subject,
            status: ticket.status,
            created_at: ticket.created_at,
            updated_at: ticket.updated_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TicketMessageDto {
    pub id: Uuid,
    pub author_id: Uuid,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

impl From<TicketMessage> for TicketMessageDto {
    fn from(message: TicketMessage) -> Self {
        Self {
            id: message.id,
            author_id: message.author_id,
            body: message.body,
            created_at: message.created_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TicketDetailResponse {
    #[serde(flatten)]
    pub ticket: TicketDto,
    pub messages: Vec<TicketMessageDto>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TicketsResponse {
    pub tickets: Vec<TicketDto>,
}
