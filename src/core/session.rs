//! What a client session is looking at.
//!
//! One tagged value replaces a set of independent "modal open" flags, so two
//! dialogs can never be open at once and a vote form always knows its trip.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PendingAction {
    Vote,
    Results,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum View {
    #[default]
    Idle,
    Creating,
    AwaitingPasscode {
        trip: Uuid,
        action: PendingAction,
    },
    Voting {
        trip: Uuid,
    },
    ViewingResults {
        trip: Uuid,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    OpenCreate,
    TripCreated,
    RequestVote(Uuid),
    RequestResults(Uuid),
    PasscodeAccepted,
    PasscodeRejected,
    VoteCast,
    Close,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Session {
    pub view: View,
    /// Bumped whenever trip data changed and lists should be re-read.
    pub refresh: u64,
}

impl Session {
    pub fn apply(self, event: Event) -> Session {
        let Session { view, refresh } = self;
        match (view, event) {
            (_, Event::Close) => Session { view: View::Idle, refresh },
            (View::Idle, Event::OpenCreate) => Session { view: View::Creating, refresh },
            (View::Creating, Event::TripCreated) => Session {
                view: View::Idle,
                refresh: refresh + 1,
            },
            (View::Idle, Event::RequestVote(trip)) => Session {
                view: View::AwaitingPasscode {
                    trip,
                    action: PendingAction::Vote,
                },
                refresh,
            },
            (View::Idle, Event::RequestResults(trip)) => Session {
                view: View::AwaitingPasscode {
                    trip,
                    action: PendingAction::Results,
                },
                refresh,
            },
            (View::AwaitingPasscode { trip, action }, Event::PasscodeAccepted) => Session {
                view: match action {
                    PendingAction::Vote => View::Voting { trip },
                    PendingAction::Results => View::ViewingResults { trip },
                },
                refresh,
            },
            (View::Voting { .. }, Event::VoteCast) => Session {
                view: View::Idle,
                refresh: refresh + 1,
            },
            // a rejected passcode keeps the prompt open for another try;
            // everything else is ignored in the current view
            (view, _) => Session { view, refresh },
        }
    }

    pub fn selected_trip(&self) -> Option<Uuid> {
        match self.view {
            View::AwaitingPasscode { trip, .. } | View::Voting { trip } | View::ViewingResults { trip } => Some(trip),
            View::Idle | View::Creating => None,
        }
    }
}
