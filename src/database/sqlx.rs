use crate::core::models::{
    option::{DateInsert, Destination, DestinationInsert, Query as OptionQuery, RidingDate},
    trip::{Insert as TripInsert, Trip},
    vote::{Insert as VoteInsert, Query as VoteQuery, Vote},
};
use crate::core::ports::repository::{Common, DateCommon, DestinationCommon, Manager, Store, TripCommon, TxStore, VoteCommon};
use crate::error::Error;
use chrono::{DateTime, Utc};
use sqlx::pool::PoolConnection;
use sqlx::{query_as, Executor, FromRow, PgPool, Postgres, QueryBuilder, Transaction};
use uuid::Uuid;

pub struct PgSqlx<E>
where
    for<'e> &'e mut E: Executor<'e>,
{
    executor: E,
}

impl<E> PgSqlx<E>
where
    for<'e> &'e mut E: Executor<'e>,
{
    pub fn new(executor: E) -> Self {
        Self { executor }
    }
}

#[derive(Debug, FromRow)]
struct TripRow {
    id: Uuid,
    title: String,
    description: Option<String>,
    passcode: String,
    status: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<TripRow> for Trip {
    type Error = Error;

    fn try_from(row: TripRow) -> Result<Self, Self::Error> {
        Ok(Trip {
            id: row.id,
            title: row.title,
            description: row.description,
            passcode: row.passcode,
            status: row.status.parse()?,
            created_at: row.created_at,
        })
    }
}

impl<E> TripCommon for PgSqlx<E>
where
    for<'e> &'e mut E: Executor<'e, Database = Postgres>,
{
    async fn insert(&mut self, data: TripInsert) -> Result<Trip, Error> {
        let row: TripRow = query_as("INSERT INTO trips (title, description, passcode, status) VALUES ($1, $2, $3, $4) RETURNING *")
            .bind(data.title)
            .bind(data.description)
            .bind(data.passcode)
            .bind(data.status.as_str())
            .fetch_one(&mut self.executor)
            .await?;
        row.try_into()
    }

    async fn get(&mut self, id: Uuid) -> Result<Trip, Error> {
        let row: TripRow = query_as("SELECT * FROM trips WHERE id = $1").bind(id).fetch_one(&mut self.executor).await?;
        row.try_into()
    }

    async fn query(&mut self) -> Result<Vec<Trip>, Error> {
        let rows: Vec<TripRow> = query_as("SELECT * FROM trips ORDER BY created_at DESC").fetch_all(&mut self.executor).await?;
        rows.into_iter().map(Trip::try_from).collect()
    }
}

impl<E> DestinationCommon for PgSqlx<E>
where
    for<'e> &'e mut E: Executor<'e, Database = Postgres>,
{
    async fn insert(&mut self, data: DestinationInsert) -> Result<Destination, Error> {
        let destination = query_as("INSERT INTO destinations (trip_id, name, description) VALUES ($1, $2, $3) RETURNING *")
            .bind(data.trip_id)
            .bind(data.name)
            .bind(data.description)
            .fetch_one(&mut self.executor)
            .await?;
        Ok(destination)
    }

    async fn bulk_insert(&mut self, data: Vec<DestinationInsert>) -> Result<(), Error> {
        if data.is_empty() {
            return Ok(());
        }
        QueryBuilder::<Postgres>::new("INSERT INTO destinations (trip_id, name, description) ")
            .push_values(data, |mut b, d| {
                b.push_bind(d.trip_id).push_bind(d.name).push_bind(d.description);
            })
            .build()
            .execute(&mut self.executor)
            .await?;
        Ok(())
    }

    async fn query(&mut self, query: &OptionQuery) -> Result<Vec<Destination>, Error> {
        let mut stmt = QueryBuilder::<Postgres>::new("SELECT * FROM destinations WHERE 1 = 1");
        if let Some(trip_id) = query.trip_id_eq {
            stmt.push(" AND trip_id = ").push_bind(trip_id);
        }
        stmt.push(" ORDER BY created_at");
        let destinations = stmt.build_query_as().fetch_all(&mut self.executor).await?;
        Ok(destinations)
    }
}

impl<E> DateCommon for PgSqlx<E>
where
    for<'e> &'e mut E: Executor<'e, Database = Postgres>,
{
    async fn insert(&mut self, data: DateInsert) -> Result<RidingDate, Error> {
        let date = query_as("INSERT INTO riding_dates (trip_id, date, description) VALUES ($1, $2, $3) RETURNING *")
            .bind(data.trip_id)
            .bind(data.date)
            .bind(data.description)
            .fetch_one(&mut self.executor)
            .await?;
        Ok(date)
    }

    async fn bulk_insert(&mut self, data: Vec<DateInsert>) -> Result<(), Error> {
        if data.is_empty() {
            return Ok(());
        }
        QueryBuilder::<Postgres>::new("INSERT INTO riding_dates (trip_id, date, description) ")
            .push_values(data, |mut b, d| {
                b.push_bind(d.trip_id).push_bind(d.date).push_bind(d.description);
            })
            .build()
            .execute(&mut self.executor)
            .await?;
        Ok(())
    }

    async fn query(&mut self, query: &OptionQuery) -> Result<Vec<RidingDate>, Error> {
        let mut stmt = QueryBuilder::<Postgres>::new("SELECT * FROM riding_dates WHERE 1 = 1");
        if let Some(trip_id) = query.trip_id_eq {
            stmt.push(" AND trip_id = ").push_bind(trip_id);
        }
        stmt.push(" ORDER BY created_at");
        let dates = stmt.build_query_as().fetch_all(&mut self.executor).await?;
        Ok(dates)
    }
}

impl<E> VoteCommon for PgSqlx<E>
where
    for<'e> &'e mut E: Executor<'e, Database = Postgres>,
{
    async fn insert(&mut self, data: VoteInsert) -> Result<Vote, Error> {
        let vote = query_as("INSERT INTO votes (voter_name, trip_id, destination_id, date_id) VALUES ($1, $2, $3, $4) RETURNING *")
            .bind(data.voter_name)
            .bind(data.trip_id)
            .bind(data.destination_id)
            .bind(data.date_id)
            .fetch_one(&mut self.executor)
            .await?;
        Ok(vote)
    }

    async fn query(&mut self, query: &VoteQuery) -> Result<Vec<Vote>, Error> {
        let mut stmt = QueryBuilder::<Postgres>::new("SELECT * FROM votes WHERE 1 = 1");
        if let Some(trip_id) = query.trip_id_eq {
            stmt.push(" AND trip_id = ").push_bind(trip_id);
        }
        stmt.push(" ORDER BY created_at");
        let votes = stmt.build_query_as().fetch_all(&mut self.executor).await?;
        Ok(votes)
    }
}

impl Common for PgSqlx<PoolConnection<Postgres>> {}
impl Common for PgSqlx<Transaction<'static, Postgres>> {}
impl Store for PgSqlx<PoolConnection<Postgres>> {}
impl Store for PgSqlx<Transaction<'static, Postgres>> {}

impl TxStore for PgSqlx<Transaction<'static, Postgres>> {
    async fn commit(self) -> Result<(), Error> {
        self.executor.commit().await?;
        Ok(())
    }

    async fn rollback(self) -> Result<(), Error> {
        self.executor.rollback().await?;
        Ok(())
    }
}

pub struct PgSqlxManager {
    pool: PgPool,
}

impl PgSqlxManager {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl Manager for PgSqlxManager {
    type Store = PgSqlx<PoolConnection<Postgres>>;
    type TxStore = PgSqlx<Transaction<'static, Postgres>>;

    async fn db(&self) -> Result<Self::Store, Error> {
        let conn = self.pool.acquire().await?;
        Ok(PgSqlx::new(conn))
    }

    async fn tx(&self) -> Result<Self::TxStore, Error> {
        let tx = self.pool.begin().await?;
        Ok(PgSqlx::new(tx))
    }
}
