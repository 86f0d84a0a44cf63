use crate::core::models::{option::Query as OptionQuery, tally::TripResults, vote::Query as VoteQuery};
use crate::core::ports::repository::{DateCommon, DestinationCommon, Store, TripCommon, VoteCommon};
use crate::core::tally;
use crate::error::Error;
use uuid::Uuid;

pub async fn trip_results<S>(db: &mut S, trip_id: Uuid) -> Result<TripResults, Error>
where
    S: Store,
{
    TripCommon::get(db, trip_id).await?;
    let votes = VoteCommon::query(db, &VoteQuery { trip_id_eq: Some(trip_id) }).await?;
    let options = OptionQuery { trip_id_eq: Some(trip_id) };
    let destinations = DestinationCommon::query(db, &options).await?;
    let dates = DateCommon::query(db, &options).await?;
    Ok(tally::summarize(&votes, &destinations, &dates))
}
