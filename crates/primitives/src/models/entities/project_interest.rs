use crate::schema::project_interests;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, Queryable, Selectable, Identifiable, Serialize)]
#[diesel(table_name = project_interests)]
pub struct ProjectInterest {
    pub id: Uuid,
    pub project_id: Uuid,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = project_interests)]
pub struct NewProjectInterest {
    pub project_id: Uuid,
    pub user_id: Uuid,
}
