use crate::core::models::trip::{AccessRequest, TripCreate, TripDetail, TripSummary};
use crate::core::ports::repository::Manager;
use crate::core::ports::tokener::Tokener;
use crate::core::services::trip;
use crate::error::Error;
use crate::impls::tokener::jwt::JWT;
use crate::middlewares::jwt::{Claim, TRIP_TOKEN};
use crate::response::{AccessResponse, CreateResponse, List};
use crate::AccessTtl;
use actix_web::{
    cookie::Cookie,
    web::{Data, Json, Path},
    HttpResponse,
};
use uuid::Uuid;

pub async fn list<M: Manager>(manager: Data<M>) -> Result<Json<List<TripSummary>>, Error> {
    let mut db = manager.db().await?;
    let trips = trip::list_trips(&mut db).await?;
    Ok(Json(List::new(trips)))
}

pub async fn create<M: Manager>(Json(body): Json<TripCreate>, manager: Data<M>) -> Result<Json<CreateResponse>, Error> {
    let tx = manager.tx().await?;
    let created = trip::create_trip(tx, body).await?;
    Ok(Json(CreateResponse { id: created.id }))
}

pub async fn detail<M: Manager>(path: Path<(Uuid,)>, manager: Data<M>) -> Result<Json<TripDetail>, Error> {
    let (trip_id,) = path.into_inner();
    let mut db = manager.db().await?;
    Ok(Json(trip::trip_detail(&mut db, trip_id).await?))
}

pub async fn access<M: Manager>(
    path: Path<(Uuid,)>,
    Json(AccessRequest { passcode }): Json<AccessRequest>,
    manager: Data<M>,
    tokener: Data<JWT>,
    ttl: Data<AccessTtl>,
) -> Result<HttpResponse, Error> {
    let (trip_id,) = path.into_inner();
    let mut db = manager.db().await?;
    let trip = trip::verify_access(&mut db, trip_id, &passcode).await?;
    let token = tokener.gen_token(&Claim::new(trip.id, ttl.0))?;
    Ok(HttpResponse::Ok()
        .cookie(Cookie::build(TRIP_TOKEN, token.clone()).path("/").http_only(true).finish())
        .json(AccessResponse { token }))
}
