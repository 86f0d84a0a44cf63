use crate::core::ports::repository::Manager;
use crate::error::Error;
use crate::handlers;
use crate::middlewares::jwt::TripGate;
use actix_web::web::{get, post, resource, scope, JsonConfig, ServiceConfig};

/// Malformed request bodies answer 400 with the usual error body.
pub fn json_config() -> JsonConfig {
    JsonConfig::default().error_handler(|err, _| Error::BusinessError(err.to_string()).into())
}

pub fn configure<M>(secret: Vec<u8>) -> impl FnOnce(&mut ServiceConfig)
where
    M: Manager + 'static,
{
    move |cfg| {
        cfg.service(
            scope("trips")
                .route("", get().to(handlers::trip::list::<M>))
                .route("", post().to(handlers::trip::create::<M>))
                .service(
                    scope("{trip_id}")
                        .route("", get().to(handlers::trip::detail::<M>))
                        .route("access", post().to(handlers::trip::access::<M>))
                        .service(resource("votes").wrap(TripGate::new(secret.clone())).route(post().to(handlers::vote::create::<M>)))
                        .service(resource("results").wrap(TripGate::new(secret.clone())).route(get().to(handlers::result::detail::<M>)))
                        .service(
                            resource("destinations")
                                .wrap(TripGate::new(secret.clone()))
                                .route(post().to(handlers::option::add_destination::<M>)),
                        )
                        .service(resource("dates").wrap(TripGate::new(secret)).route(post().to(handlers::option::add_date::<M>))),
                ),
        );
    }
}
