use chrono::{DateTime, Utc};
use diesel::prelude::*;
use fundbridge_primitives::error::ApiError;
use fundbridge_primitives::models::entities::enum_types::TicketStatus;
use fundbridge_primitives::models::entities::support_ticket::{
    NewSupportTicket, NewTicketMessage, SupportTicket, TicketMessage,
};
use fundbridge_primitives::schema::{support_tickets, ticket_messages};
use uuid::Uuid;

pub struct TicketRepository;

impl TicketRepository {
    pub fn create(
        conn: &mut PgConnection,
        new_ticket: NewSupportTicket,
    ) -> Result<SupportTicket, ApiError> {
        diesel::insert_into(support_tickets::table)
            .values(&new_ticket)
            .get_result::<SupportTicket>(conn)
            .map_err(ApiError::from)
    }

    pub fn find_by_id(
        conn: &mut PgConnection,
        ticket_id: Uuid,
    ) -> Result<Option<SupportTicket>, ApiError> {
        support_tickets::table
            .find(ticket_id)
            .first::<SupportTicket>(conn)
            .optional()
            .map_err(ApiError::from)
    }

    pub fn list_by_user(
        conn: &mut PgConnection,
        user_id: Uuid,
    ) -> Result<Vec<SupportTicket>, ApiError> {
        support_tickets::table
            .filter(support_tickets::user_id.eq(user_id))
            .order(support_tickets::updated_at.desc())
            .load::<SupportTicket>(conn)
            .map_err(ApiError::from)
    }

    pub fn list_all(conn: &mut PgConnection) -> Result<Vec<SupportTicket>, ApiError> {
        support_tickets::table
            .order(support_tickets::updated_at.desc())
            .load::<SupportTicket>(conn)
            .map_err(ApiError::from)
    }

    pub fn add_message(
        conn: &mut PgConnection,
        new_message: NewTicketMessage,
    ) -> Result<TicketMessage, ApiError> {
        diesel::insert_into(ticket_messages::table)
            .values(&new_message)
            .get_result::<TicketMessage>(conn)
            .map_err(ApiError::from)
    }

    pub fn messages_of(
        conn: &mut PgConnection,
        ticket_id: Uuid,
    ) -> Result<Vec<TicketMessage>, ApiError> {
        ticket_messages::table
            .filter(ticket_messages::ticket_id.eq(ticket_id))
            .order(ticket_messages::created_at.asc())
            .load::<TicketMessage>(conn)
            .map_err(ApiError::from)
    }

    pub fn set_status(
        conn: &mut PgConnection,
        ticket_id: Uuid,
        status: TicketStatus,
    ) -> Result<SupportTicket, ApiError> {
        diesel::update(support_tickets::table.find(ticket_id))
            .set((
                support_tickets::status.eq(status),
                support_tickets::updated_at.eq(Utc::now()),
            ))
            .get_result::<SupportTicket>(conn)
            .map_err(ApiError::from)
    }

    /// Maintenance: close answered tickets with no activity since `cutoff`.
    pub fn close_idle_answered(
        conn: &mut PgConnection,
        cutoff: DateTime<Utc>,
    ) -> Result<usize, ApiError> {
        diesel::update(
            support_tickets::table
                .filter(support_tickets::status.eq(TicketStatus::Answered))
                .filter(support_tickets::updated_at.lt(cutoff)),
        )
        .set((
            support_tickets::status.eq(TicketStatus::Closed),
            support_tickets::updated_at.eq(Utc::now()),
        ))
        .execute(conn)
        .map_err(ApiError::from)
    }
}
