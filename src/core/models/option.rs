use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Something a vote can point at: it has a stable id and a display label.
pub trait Candidate {
    fn id(&self) -> Uuid;
    fn label(&self) -> String;
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Destination {
    pub id: Uuid,
    pub trip_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Candidate for Destination {
    fn id(&self) -> Uuid {
        self.id
    }

    fn label(&self) -> String {
        self.name.clone()
    }
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct RidingDate {
    pub id: Uuid,
    pub trip_id: Uuid,
    pub date: NaiveDate,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Candidate for RidingDate {
    fn id(&self) -> Uuid {
        self.id
    }

    // e.g. "Sat, Mar 15"
    fn label(&self) -> String {
        self.date.format("%a, %b %-d").to_string()
    }
}

#[derive(Debug, Deserialize)]
pub struct DestinationCreate {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DateCreate {
    pub date: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone)]
pub struct DestinationInsert {
    pub trip_id: Uuid,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone)]
pub struct DateInsert {
    pub trip_id: Uuid,
    pub date: NaiveDate,
    pub description: Option<String>,
}

#[derive(Debug, Default)]
pub struct Query {
    pub trip_id_eq: Option<Uuid>,
}
