use crate::context::TripAccess;
use crate::core::ports::tokener::{Payload, Tokener};
use crate::error::Error;
use crate::impls::tokener::jwt::JWT;
use actix_web::dev::{Service, ServiceRequest, Transform};
use actix_web::http::header::AUTHORIZATION;
use actix_web::HttpMessage;
use chrono::{Duration, Utc};
use futures_util::future::LocalBoxFuture;
use log::warn;
use serde::{Deserialize, Serialize};
use std::future::{ready, Ready};
use std::task::{Context, Poll};
use uuid::Uuid;

pub static TRIP_TOKEN: &str = "TRIP_TOKEN";

#[derive(Debug, Deserialize, Serialize)]
pub struct Claim {
    pub trip: String,
    pub exp: i64,
}

impl Claim {
    pub fn new(trip_id: Uuid, ttl: Duration) -> Self {
        Self {
            trip: trip_id.to_string(),
            exp: (Utc::now() + ttl).timestamp(),
        }
    }
}

impl Payload for Claim {
    fn subject(&self) -> &str {
        &self.trip
    }
}

/// Lets a request through only when it carries an access token issued for
/// the trip named in the path.
pub struct TripGate {
    secret: Vec<u8>,
    path_arg_name: &'static str,
}

impl TripGate {
    pub fn new(secret: Vec<u8>) -> Self {
        Self {
            secret,
            path_arg_name: "trip_id",
        }
    }
}

impl<S> Transform<S, ServiceRequest> for TripGate
where
    S: Service<ServiceRequest> + 'static,
    S::Future: 'static,
    S::Error: Into<actix_web::Error>,
{
    type Response = S::Response;
    type Error = actix_web::Error;
    type Transform = TripGateService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(TripGateService {
            tokener: JWT::new(self.secret.clone()),
            path_arg_name: self.path_arg_name,
            next_service: service,
        }))
    }
}

pub struct TripGateService<S> {
    tokener: JWT,
    path_arg_name: &'static str,
    next_service: S,
}

impl<S> TripGateService<S> {
    /// The `Authorization` header wins, the cookie left by the last unlocked
    /// trip is only a fallback.
    fn token(req: &ServiceRequest) -> Option<String> {
        let header = req
            .headers()
            .get(AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .map(|h| h.trim())
            .filter(|h| !h.is_empty());
        if let Some(header) = header {
            return Some(header.strip_prefix("Bearer ").unwrap_or(header).trim().to_owned());
        }
        req.cookie(TRIP_TOKEN).map(|c| c.value().to_owned())
    }

    fn authorize(&self, req: &ServiceRequest) -> Result<Uuid, Error> {
        let token = Self::token(req).ok_or(Error::Unauthorized)?;
        let claim: Claim = self.tokener.verify_token(&token)?;
        let trip_id = req
            .match_info()
            .get(self.path_arg_name)
            .and_then(|v| v.parse::<Uuid>().ok())
            .ok_or_else(|| Error::NotFound(format!("trip {}", req.path())))?;
        if claim.subject() != trip_id.to_string() {
            return Err(Error::Unauthorized);
        }
        Ok(trip_id)
    }
}

impl<S> Service<ServiceRequest> for TripGateService<S>
where
    S: Service<ServiceRequest>,
    S::Future: 'static,
    S::Error: Into<actix_web::Error>,
{
    type Response = S::Response;
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.next_service.poll_ready(ctx).map_err(|e| e.into())
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        match self.authorize(&req) {
            Ok(trip_id) => {
                req.extensions_mut().insert(TripAccess { trip_id });
            }
            Err(e) => {
                warn!("access denied to {}: {}", req.path(), e);
                return Box::pin(async move { Err(e.into()) });
            }
        }
        let res_fut = self.next_service.call(req);
        Box::pin(async move { res_fut.await.map_err(|e| e.into()) })
    }
}
