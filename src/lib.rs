pub mod config;
pub mod context;
pub mod core;
pub mod database;
pub mod error;
pub mod handlers;
pub mod impls;
pub mod middlewares;
pub mod response;
pub mod routes;

/// Lifetime of the access tokens issued by the passcode gate.
#[derive(Debug, Clone, Copy)]
pub struct AccessTtl(pub chrono::Duration);
