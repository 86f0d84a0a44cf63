use crate::core::form;
use crate::core::models::{
    option::{DateInsert, DestinationInsert, Query as OptionQuery},
    tally::Category,
    trip::{Insert as TripInsert, Trip, TripCreate, TripDetail, TripStatus, TripSummary},
    vote::Query as VoteQuery,
};
use crate::core::passcode::check_passcode;
use crate::core::ports::repository::{DateCommon, DestinationCommon, Store, TripCommon, TxStore, VoteCommon};
use crate::core::tally;
use crate::error::Error;
use chrono::NaiveDate;
use log::{info, warn};
use uuid::Uuid;

/// Creates a trip with its destinations and dates, all or nothing.
pub async fn create_trip<T>(mut tx: T, trip: TripCreate) -> Result<Trip, Error>
where
    T: TxStore,
{
    let title = form::required("title", &trip.title)?;
    let passcode = form::required("passcode", &trip.passcode)?;
    let destinations = form::sanitize_names(trip.destinations);
    let dates = form::parse_dates(trip.dates)?;
    let (num_destinations, num_dates) = (destinations.len(), dates.len());
    let insert = TripInsert {
        title,
        description: form::optional_text(trip.description),
        passcode,
        status: TripStatus::Planning,
    };
    match insert_trip(&mut tx, insert, destinations, dates).await {
        Ok(created) => {
            tx.commit().await?;
            info!("trip {} created with {} destinations and {} dates", created.id, num_destinations, num_dates);
            Ok(created)
        }
        Err(e) => {
            warn!("rolling back trip creation: {}", e);
            tx.rollback().await?;
            Err(e)
        }
    }
}

async fn insert_trip<T>(tx: &mut T, insert: TripInsert, destinations: Vec<String>, dates: Vec<NaiveDate>) -> Result<Trip, Error>
where
    T: TxStore,
{
    // 创建行程
    let created = TripCommon::insert(&mut *tx, insert).await?;
    // 创建候选目的地
    DestinationCommon::bulk_insert(
        &mut *tx,
        destinations
            .into_iter()
            .map(|name| DestinationInsert {
                trip_id: created.id,
                name,
                description: None,
            })
            .collect(),
    )
    .await?;
    // 创建候选日期
    DateCommon::bulk_insert(
        &mut *tx,
        dates
            .into_iter()
            .map(|date| DateInsert {
                trip_id: created.id,
                date,
                description: None,
            })
            .collect(),
    )
    .await?;
    Ok(created)
}

pub async fn list_trips<S>(db: &mut S) -> Result<Vec<TripSummary>, Error>
where
    S: Store,
{
    let trips = TripCommon::query(db).await?;
    let mut summaries = Vec::with_capacity(trips.len());
    for trip in trips {
        let participant_count = match VoteCommon::query(db, &VoteQuery { trip_id_eq: Some(trip.id) }).await {
            Ok(votes) => tally::count_distinct_participants(&votes),
            Err(e) => {
                warn!("failed to count participants of trip {}: {}", trip.id, e);
                0
            }
        };
        summaries.push(TripSummary { trip, participant_count });
    }
    Ok(summaries)
}

pub async fn trip_detail<S>(db: &mut S, id: Uuid) -> Result<TripDetail, Error>
where
    S: Store,
{
    let trip = TripCommon::get(db, id).await?;
    let options = OptionQuery { trip_id_eq: Some(id) };
    let destinations = DestinationCommon::query(db, &options).await?;
    let dates = DateCommon::query(db, &options).await?;
    let votes = VoteCommon::query(db, &VoteQuery { trip_id_eq: Some(id) }).await?;
    Ok(TripDetail {
        trip,
        destinations: tally::count_by_option(&votes, destinations, Category::Destination),
        dates: tally::count_by_option(&votes, dates, Category::Date),
        participant_count: tally::count_distinct_participants(&votes),
    })
}

/// Passcode gate in front of voting and results.
pub async fn verify_access<S>(db: &mut S, id: Uuid, passcode: &str) -> Result<Trip, Error>
where
    S: Store,
{
    let trip = TripCommon::get(db, id).await?;
    if !check_passcode(passcode, &trip.passcode) {
        warn!("rejected passcode for trip {}", id);
        return Err(Error::InvalidPasscode);
    }
    Ok(trip)
}
