use crate::core::models::vote::Vote;
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Destination,
    Date,
}

impl Category {
    pub fn pick(&self, vote: &Vote) -> Option<Uuid> {
        match self {
            Category::Destination => vote.destination_id,
            Category::Date => vote.date_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TallyRow {
    pub option_id: Uuid,
    pub label: String,
    pub count: usize,
    pub voters: Vec<String>,
    pub percentage: f64,
    pub is_leading: bool,
}

impl TallyRow {
    pub fn new(option_id: Uuid, label: String) -> Self {
        Self {
            option_id,
            label,
            count: 0,
            voters: Vec::new(),
            percentage: 0.0,
            is_leading: false,
        }
    }
}

/// An option together with how many votes reference it.
#[derive(Debug, Clone, Serialize)]
pub struct Counted<T> {
    #[serde(flatten)]
    pub option: T,
    pub vote_count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct TripResults {
    pub destinations: Vec<TallyRow>,
    pub dates: Vec<TallyRow>,
    pub participant_count: usize,
    pub total_votes: usize,
}
