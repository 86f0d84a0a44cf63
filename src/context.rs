use crate::error::Error;
use actix_web::{dev::Payload, FromRequest, HttpMessage, HttpRequest};
use std::future::{ready, Ready};
use uuid::Uuid;

/// Set by the trip gate once the access token has been checked.
#[derive(Debug, Clone)]
pub struct TripAccess {
    pub trip_id: Uuid,
}

impl FromRequest for TripAccess {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;
    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        if let Some(access) = req.extensions().get::<Self>() {
            ready(Ok(access.clone()))
        } else {
            ready(Err(Error::Unauthorized))
        }
    }
}
