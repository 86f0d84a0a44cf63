use crate::core::models::option::{Destination, RidingDate};
use crate::core::models::tally::Counted;
use crate::error::Error;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TripStatus {
    #[default]
    Planning,
    Active,
    Completed,
}

impl TripStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TripStatus::Planning => "planning",
            TripStatus::Active => "active",
            TripStatus::Completed => "completed",
        }
    }
}

impl FromStr for TripStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "planning" => Ok(TripStatus::Planning),
            "active" => Ok(TripStatus::Active),
            "completed" => Ok(TripStatus::Completed),
            other => Err(Error::ServerError(format!("unknown trip status: {}", other))),
        }
    }
}

/// A voting session. The passcode never leaves the server.
#[derive(Debug, Clone, Serialize)]
pub struct Trip {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    #[serde(skip_serializing)]
    pub passcode: String,
    pub status: TripStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct TripCreate {
    pub title: String,
    pub description: Option<String>,
    pub passcode: String,
    #[serde(default)]
    pub destinations: Vec<String>,
    #[serde(default)]
    pub dates: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct Insert {
    pub title: String,
    pub description: Option<String>,
    pub passcode: String,
    pub status: TripStatus,
}

#[derive(Debug, Serialize)]
pub struct TripSummary {
    #[serde(flatten)]
    pub trip: Trip,
    pub participant_count: usize,
}

#[derive(Debug, Serialize)]
pub struct TripDetail {
    #[serde(flatten)]
    pub trip: Trip,
    pub destinations: Vec<Counted<Destination>>,
    pub dates: Vec<Counted<RidingDate>>,
    pub participant_count: usize,
}

#[derive(Debug, Deserialize)]
pub struct AccessRequest {
    pub passcode: String,
}
