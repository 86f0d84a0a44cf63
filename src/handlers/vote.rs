use crate::context::TripAccess;
use crate::core::models::vote::VoteCreate;
use crate::core::ports::repository::Manager;
use crate::core::services::vote;
use crate::error::Error;
use crate::response::CreateResponse;
use actix_web::web::{Data, Json};

pub async fn create<M: Manager>(access: TripAccess, Json(body): Json<VoteCreate>, manager: Data<M>) -> Result<Json<CreateResponse>, Error> {
    let mut db = manager.db().await?;
    let cast = vote::cast_vote(&mut db, access.trip_id, body).await?;
    Ok(Json(CreateResponse { id: cast.id }))
}
