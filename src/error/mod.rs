//! Error types for the Bookden server.
//!
//! A single aggregate error type covers the configuration layer and the
//! external libraries the request path touches. Everything implements
//! `IntoResponse` so handlers can return `Result<_, Error>` and let axum
//! produce the HTTP response.

pub mod config;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::{error::config::ConfigError, view};

/// Main error type for the Bookden server.
///
/// Aggregates domain-specific and external library errors into one type.
/// `#[from]` conversions let the `?` operator lift underlying errors, and the
/// `IntoResponse` implementation maps each error to an HTTP response.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Session error (session retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    /// Credential hashing error (hashing failure or a malformed stored hash).
    #[error("Password hashing failed: {0}")]
    PasswordHash(String),
}

/// Converts application errors into HTTP responses.
///
/// Every error in this application is an internal failure from the client's
/// point of view; form validation problems never become `Error` values, they
/// re-render the form instead.
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic error page to the client to
/// avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (StatusCode::INTERNAL_SERVER_ERROR, view::error_page()).into_response()
    }
}
