use crate::context::TripAccess;
use crate::core::models::option::{DateCreate, DestinationCreate};
use crate::core::ports::repository::Manager;
use crate::core::services::option;
use crate::error::Error;
use crate::response::CreateResponse;
use actix_web::web::{Data, Json};

pub async fn add_destination<M: Manager>(access: TripAccess, Json(body): Json<DestinationCreate>, manager: Data<M>) -> Result<Json<CreateResponse>, Error> {
    let mut db = manager.db().await?;
    let created = option::add_destination(&mut db, access.trip_id, body).await?;
    Ok(Json(CreateResponse { id: created.id }))
}

pub async fn add_date<M: Manager>(access: TripAccess, Json(body): Json<DateCreate>, manager: Data<M>) -> Result<Json<CreateResponse>, Error> {
    let mut db = manager.db().await?;
    let created = option::add_date(&mut db, access.trip_id, body).await?;
    Ok(Json(CreateResponse { id: created.id }))
}
