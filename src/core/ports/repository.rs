use crate::core::models::{
    option::{DateInsert, Destination, DestinationInsert, Query as OptionQuery, RidingDate},
    trip::{Insert as TripInsert, Trip},
    vote::{Insert as VoteInsert, Query as VoteQuery, Vote},
};
use crate::error::Error;
use uuid::Uuid;

pub trait TripCommon {
    async fn insert(&mut self, data: TripInsert) -> Result<Trip, Error>;
    async fn get(&mut self, id: Uuid) -> Result<Trip, Error>;
    /// Newest first.
    async fn query(&mut self) -> Result<Vec<Trip>, Error>;
}

pub trait DestinationCommon {
    async fn insert(&mut self, data: DestinationInsert) -> Result<Destination, Error>;
    async fn bulk_insert(&mut self, data: Vec<DestinationInsert>) -> Result<(), Error>;
    /// Oldest first.
    async fn query(&mut self, query: &OptionQuery) -> Result<Vec<Destination>, Error>;
}

pub trait DateCommon {
    async fn insert(&mut self, data: DateInsert) -> Result<RidingDate, Error>;
    async fn bulk_insert(&mut self, data: Vec<DateInsert>) -> Result<(), Error>;
    /// Oldest first.
    async fn query(&mut self, query: &OptionQuery) -> Result<Vec<RidingDate>, Error>;
}

pub trait VoteCommon {
    async fn insert(&mut self, data: VoteInsert) -> Result<Vote, Error>;
    /// In the order the votes were cast.
    async fn query(&mut self, query: &VoteQuery) -> Result<Vec<Vote>, Error>;
}

pub trait Common: TripCommon + DestinationCommon + DateCommon + VoteCommon {}

pub trait Store: Common {}

pub trait TxStore: Store {
    async fn commit(self) -> Result<(), Error>;
    async fn rollback(self) -> Result<(), Error>;
}

pub trait Manager {
    type Store: Store;
    type TxStore: TxStore;
    async fn db(&self) -> Result<Self::Store, Error>;
    async fn tx(&self) -> Result<Self::TxStore, Error>;
}
