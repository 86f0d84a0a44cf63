//! In-process store used by the tests in place of Postgres.

use crate::core::models::{
    option::{DateInsert, Destination, DestinationInsert, Query as OptionQuery, RidingDate},
    trip::{Insert as TripInsert, Trip},
    vote::{Insert as VoteInsert, Query as VoteQuery, Vote},
};
use crate::core::ports::repository::{Common, DateCommon, DestinationCommon, Manager, Store, TripCommon, TxStore, VoteCommon};
use crate::error::Error;
use chrono::Utc;
use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

pub static TRIPS: &str = "trips";
pub static DESTINATIONS: &str = "destinations";
pub static RIDING_DATES: &str = "riding_dates";
pub static VOTES: &str = "votes";

#[derive(Debug, Default, Clone)]
struct Tables {
    trips: Vec<Trip>,
    destinations: Vec<Destination>,
    dates: Vec<RidingDate>,
    votes: Vec<Vote>,
}

impl Tables {
    fn append(&mut self, other: Tables) {
        self.trips.extend(other.trips);
        self.destinations.extend(other.destinations);
        self.dates.extend(other.dates);
        self.votes.extend(other.votes);
    }
}

#[derive(Debug, Default)]
struct Shared {
    tables: Tables,
    broken: HashSet<&'static str>,
    rollbacks: usize,
}

#[derive(Debug, Clone, Default)]
pub struct MemManager {
    shared: Arc<Mutex<Shared>>,
}

impl MemManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every later access to `table` fails, as if the backend were down.
    pub fn break_table(&self, table: &'static str) {
        self.shared.lock().unwrap().broken.insert(table);
    }

    /// Transactions rolled back so far.
    pub fn rollbacks(&self) -> usize {
        self.shared.lock().unwrap().rollbacks
    }
}

/// Writes go straight to the shared tables, or into `staged` inside a
/// transaction until `commit`.
pub struct MemStore {
    shared: Arc<Mutex<Shared>>,
    staged: Option<Tables>,
}

impl MemStore {
    fn check(&self, table: &'static str) -> Result<(), Error> {
        if self.shared.lock().unwrap().broken.contains(table) {
            return Err(Error::ServerError(format!("{} unavailable", table)));
        }
        Ok(())
    }

    fn read<T, F>(&self, table: &'static str, f: F) -> Result<Vec<T>, Error>
    where
        F: Fn(&Tables) -> Vec<T>,
    {
        self.check(table)?;
        let mut rows = f(&self.shared.lock().unwrap().tables);
        if let Some(staged) = &self.staged {
            rows.extend(f(staged));
        }
        Ok(rows)
    }

    fn write<F>(&mut self, table: &'static str, f: F) -> Result<(), Error>
    where
        F: FnOnce(&mut Tables),
    {
        self.check(table)?;
        match &mut self.staged {
            Some(staged) => f(staged),
            None => f(&mut self.shared.lock().unwrap().tables),
        }
        Ok(())
    }
}

impl TripCommon for MemStore {
    async fn insert(&mut self, data: TripInsert) -> Result<Trip, Error> {
        let trip = Trip {
            id: Uuid::new_v4(),
            title: data.title,
            description: data.description,
            passcode: data.passcode,
            status: data.status,
            created_at: Utc::now(),
        };
        let row = trip.clone();
        self.write(TRIPS, |t| t.trips.push(row))?;
        Ok(trip)
    }

    async fn get(&mut self, id: Uuid) -> Result<Trip, Error> {
        self.read(TRIPS, |t| t.trips.iter().filter(|trip| trip.id == id).cloned().collect())?
            .pop()
            .ok_or_else(|| Error::NotFound(format!("trip {}", id)))
    }

    async fn query(&mut self) -> Result<Vec<Trip>, Error> {
        let mut trips = self.read(TRIPS, |t| t.trips.clone())?;
        trips.reverse();
        Ok(trips)
    }
}

impl DestinationCommon for MemStore {
    async fn insert(&mut self, data: DestinationInsert) -> Result<Destination, Error> {
        let destination = Destination {
            id: Uuid::new_v4(),
            trip_id: data.trip_id,
            name: data.name,
            description: data.description,
            created_at: Utc::now(),
        };
        let row = destination.clone();
        self.write(DESTINATIONS, |t| t.destinations.push(row))?;
        Ok(destination)
    }

    async fn bulk_insert(&mut self, data: Vec<DestinationInsert>) -> Result<(), Error> {
        for d in data {
            DestinationCommon::insert(self, d).await?;
        }
        Ok(())
    }

    async fn query(&mut self, query: &OptionQuery) -> Result<Vec<Destination>, Error> {
        self.read(DESTINATIONS, |t| {
            t.destinations.iter().filter(|d| query.trip_id_eq.map_or(true, |id| d.trip_id == id)).cloned().collect()
        })
    }
}

impl DateCommon for MemStore {
    async fn insert(&mut self, data: DateInsert) -> Result<RidingDate, Error> {
        let date = RidingDate {
            id: Uuid::new_v4(),
            trip_id: data.trip_id,
            date: data.date,
            description: data.description,
            created_at: Utc::now(),
        };
        let row = date.clone();
        self.write(RIDING_DATES, |t| t.dates.push(row))?;
        Ok(date)
    }

    async fn bulk_insert(&mut self, data: Vec<DateInsert>) -> Result<(), Error> {
        for d in data {
            DateCommon::insert(self, d).await?;
        }
        Ok(())
    }

    async fn query(&mut self, query: &OptionQuery) -> Result<Vec<RidingDate>, Error> {
        self.read(RIDING_DATES, |t| {
            t.dates.iter().filter(|d| query.trip_id_eq.map_or(true, |id| d.trip_id == id)).cloned().collect()
        })
    }
}

impl VoteCommon for MemStore {
    async fn insert(&mut self, data: VoteInsert) -> Result<Vote, Error> {
        let vote = Vote {
            id: Uuid::new_v4(),
            voter_name: data.voter_name,
            trip_id: data.trip_id,
            destination_id: data.destination_id,
            date_id: data.date_id,
            created_at: Utc::now(),
        };
        let row = vote.clone();
        self.write(VOTES, |t| t.votes.push(row))?;
        Ok(vote)
    }

    async fn query(&mut self, query: &VoteQuery) -> Result<Vec<Vote>, Error> {
        self.read(VOTES, |t| {
            t.votes.iter().filter(|v| query.trip_id_eq.map_or(true, |id| v.trip_id == id)).cloned().collect()
        })
    }
}

impl Common for MemStore {}
impl Store for MemStore {}

impl TxStore for MemStore {
    async fn commit(self) -> Result<(), Error> {
        if let Some(staged) = self.staged {
            self.shared.lock().unwrap().tables.append(staged);
        }
        Ok(())
    }

    async fn rollback(self) -> Result<(), Error> {
        self.shared.lock().unwrap().rollbacks += 1;
        Ok(())
    }
}

impl Manager for MemManager {
    type Store = MemStore;
    type TxStore = MemStore;

    async fn db(&self) -> Result<Self::Store, Error> {
        Ok(MemStore {
            shared: self.shared.clone(),
            staged: None,
        })
    }

    async fn tx(&self) -> Result<Self::TxStore, Error> {
        Ok(MemStore {
            shared: self.shared.clone(),
            staged: Some(Tables::default()),
        })
    }
}
