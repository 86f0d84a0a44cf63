use crate::core::form;
use crate::core::models::vote::{Insert as VoteInsert, Vote, VoteCreate};
use crate::core::ports::repository::{Store, TripCommon, VoteCommon};
use crate::error::Error;
use log::info;
use uuid::Uuid;

/// Records one ballot. Repeat ballots from the same name are accepted, and
/// the chosen options are not checked against the trip.
pub async fn cast_vote<S>(db: &mut S, trip_id: Uuid, vote: VoteCreate) -> Result<Vote, Error>
where
    S: Store,
{
    let voter_name = form::required("voter name", &vote.voter_name)?;
    if vote.destination_id.is_none() && vote.date_id.is_none() {
        return Err(Error::BusinessError("select a destination or a date".into()));
    }
    TripCommon::get(db, trip_id).await?;
    let cast = VoteCommon::insert(
        db,
        VoteInsert {
            voter_name,
            trip_id,
            destination_id: vote.destination_id,
            date_id: vote.date_id,
        },
    )
    .await?;
    info!("vote {} cast on trip {}", cast.id, trip_id);
    Ok(cast)
}
