//! Unified error types for the WikiCloud API
//!
//! This module defines error types for each layer:
//! - `DomainError`: Core business logic errors
//! - `WikiError`: MediaWiki API client errors
//! - `AppError`: Application layer errors (wraps domain errors for HTTP responses)

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tower_governor::GovernorError;

/// Domain layer errors - pure business logic errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Validation(String),
}

/// MediaWiki API client errors
#[derive(Debug, Error)]
pub enum WikiError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("MediaWiki API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Error object in a successful response body
    #[error("MediaWiki API error: {code} - {info}")]
    Query { code: String, info: String },

    #[error("Invalid category title: {0}")]
    InvalidTitle(String),

    #[error("Rate limited by MediaWiki API")]
    RateLimited,

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("Wikipedia error: {0}")]
    Wiki(#[from] WikiError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Domain(DomainError::NotFound(_)) => StatusCode::NOT_FOUND,
            AppError::Domain(DomainError::Validation(_)) => StatusCode::BAD_REQUEST,
            AppError::Wiki(WikiError::InvalidTitle(_)) => StatusCode::BAD_REQUEST,
            AppError::Wiki(WikiError::RateLimited) => StatusCode::TOO_MANY_REQUESTS,
            AppError::Wiki(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

/// Error response body for JSON responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        if let AppError::Wiki(e) = &self {
            if !matches!(e, WikiError::InvalidTitle(_)) {
                tracing::error!("MediaWiki error: {}", e);
            }
        }

        let body = Json(ErrorResponse {
            error: self.to_string(),
        });

        (status, body).into_response()
    }
}

/// Message returned when a client exceeds the `/analyze` rate limit
pub const RATE_LIMITED_MESSAGE: &str = "Too many requests, please wait before analyzing again";

/// Response for requests rejected by the `/analyze` rate limiter
pub fn rate_limit_response(err: GovernorError) -> Response {
    let (status, message, headers) = match err {
        GovernorError::TooManyRequests { wait_time, headers } => (
            StatusCode::TOO_MANY_REQUESTS,
            format!("{} ({}s)", RATE_LIMITED_MESSAGE, wait_time),
            headers,
        ),
        GovernorError::UnableToExtractKey => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Unable to identify client".to_string(),
            None,
        ),
        GovernorError::Other { code, msg, headers } => (
            code,
            msg.unwrap_or_else(|| "Request rejected".to_string()),
            headers,
        ),
    };

    let mut response = (status, Json(ErrorResponse { error: message })).into_response();
    if let Some(headers) = headers {
        response.headers_mut().extend(headers);
    }
    response
}
