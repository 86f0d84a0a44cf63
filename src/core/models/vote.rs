use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Vote {
    pub id: Uuid,
    pub voter_name: String,
    pub trip_id: Uuid,
    pub destination_id: Option<Uuid>,
    pub date_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct VoteCreate {
    pub voter_name: String,
    pub destination_id: Option<Uuid>,
    pub date_id: Option<Uuid>,
}

#[derive(Debug, Clone)]
pub struct Insert {
    pub voter_name: String,
    pub trip_id: Uuid,
    pub destination_id: Option<Uuid>,
    pub date_id: Option<Uuid>,
}

#[derive(Debug, Default)]
pub struct Query {
    pub trip_id_eq: Option<Uuid>,
}
