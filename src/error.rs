use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum Error {
    #[error("database error: {0}")]
    DatabaseError(#[from] sqlx::Error),

    #[error("dotenv error: {0}")]
    DotEnvError(#[from] dotenv::Error),

    #[error("jwt error: {0}")]
    JWTError(#[from] jsonwebtoken::errors::Error),

    #[error("failed to parse date: {0}")]
    ParseDate(#[from] chrono::ParseError),

    #[error("business error: {0}")]
    BusinessError(String),

    #[error("invalid passcode")]
    InvalidPasscode,

    #[error("unauthorized")]
    Unauthorized,

    #[error("not found: {0}")]
    NotFound(String),

    #[error("server error: {0}")]
    ServerError(String),
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Error::DatabaseError(sqlx::Error::RowNotFound) | Error::NotFound(_) => StatusCode::NOT_FOUND,
            Error::BusinessError(_) | Error::ParseDate(_) => StatusCode::BAD_REQUEST,
            // foreign key violation: a vote naming an option that does not exist
            Error::DatabaseError(sqlx::Error::Database(e)) if e.code().as_deref() == Some("23503") => StatusCode::BAD_REQUEST,
            Error::InvalidPasscode => StatusCode::FORBIDDEN,
            Error::Unauthorized | Error::JWTError(_) => StatusCode::UNAUTHORIZED,
            Error::DatabaseError(_) | Error::DotEnvError(_) | Error::ServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let message = if status.is_server_error() {
            log::error!("{}", self);
            "internal server error".to_owned()
        } else {
            self.to_string()
        };
        HttpResponse::build(status).json(json!({ "error": message }))
    }
}
