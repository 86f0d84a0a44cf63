use crate::context::TripAccess;
use crate::core::models::tally::TripResults;
use crate::core::ports::repository::Manager;
use crate::core::services::result;
use crate::error::Error;
use actix_web::web::{Data, Json};

pub async fn detail<M: Manager>(access: TripAccess, manager: Data<M>) -> Result<Json<TripResults>, Error> {
    let mut db = manager.db().await?;
    Ok(Json(result::trip_results(&mut db, access.trip_id).await?))
}
