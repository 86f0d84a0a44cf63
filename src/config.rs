use crate::error::Error;
use log::info;
use std::fmt::Display;
use std::str::FromStr;

pub static DATABASE_URL: &str = "DATABASE_URL";
pub static BIND_ADDRESS: &str = "BIND_ADDRESS";
pub static PORT: &str = "PORT";
pub static MAX_CONNECTIONS: &str = "MAX_CONNECTIONS";
pub static TRIP_TOKEN_SECRET: &str = "TRIP_TOKEN_SECRET";
pub static TRIP_TOKEN_TTL_MINUTES: &str = "TRIP_TOKEN_TTL_MINUTES";

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub bind_address: String,
    pub port: u16,
    pub max_connections: u32,
    pub token_secret: Vec<u8>,
    pub token_ttl_minutes: i64,
}

impl Config {
    /// Reads the process environment, which `dotenv` may have filled from `.env`.
    pub fn from_env() -> Result<Self, Error> {
        Ok(Self {
            database_url: dotenv::var(DATABASE_URL)?,
            bind_address: var_or(BIND_ADDRESS, "0.0.0.0"),
            port: parse_or(PORT, 8000)?,
            max_connections: parse_or(MAX_CONNECTIONS, 5)?,
            token_secret: dotenv::var(TRIP_TOKEN_SECRET)?.into_bytes(),
            token_ttl_minutes: parse_or(TRIP_TOKEN_TTL_MINUTES, 60)?,
        })
    }
}

fn var_or(key: &str, default: &str) -> String {
    dotenv::var(key).unwrap_or_else(|_| {
        info!("{} not set, using default: {}", key, default);
        default.to_owned()
    })
}

fn parse_or<T>(key: &str, default: T) -> Result<T, Error>
where
    T: FromStr + Display,
    T::Err: Display,
{
    match dotenv::var(key) {
        Ok(v) => v.trim().parse().map_err(|e| Error::ServerError(format!("invalid {}: {}", key, e))),
        Err(_) => {
            info!("{} not set, using default: {}", key, default);
            Ok(default)
        }
    }
}
