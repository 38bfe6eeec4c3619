//! Mapping of domain and request errors onto HTTP responses

use std::collections::HashMap;
use std::fmt;

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use sso_core::errors::{DomainError, TokenError};
use sso_shared::errors::{error_codes, ErrorResponse};
use tracing::{error, warn};
use validator::ValidationErrors;

/// Message returned for every rejected token; the reason is only logged
pub const UNAUTHORIZED_MESSAGE: &str = "Invalid or expired token";

/// Error type returned by handlers
#[derive(Debug)]
pub enum ApiError {
    /// Error raised by the core
    Domain(DomainError),
    /// Request body failed validation
    Validation(ValidationErrors),
    /// Failure local to the HTTP layer
    Internal(String),
}

impl ApiError {
    /// The error every authentication failure collapses to
    pub fn unauthorized() -> Self {
        ApiError::Domain(DomainError::Token(TokenError::InvalidToken))
    }
}

impl From<DomainError> for ApiError {
    fn from(error: DomainError) -> Self {
        ApiError::Domain(error)
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        ApiError::Validation(errors)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Domain(error) => write!(f, "{}", error),
            ApiError::Validation(errors) => write!(f, "Validation failed: {}", errors),
            ApiError::Internal(message) => write!(f, "Internal error: {}", message),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Domain(DomainError::Validation { .. }) => StatusCode::BAD_REQUEST,
            ApiError::Domain(DomainError::Token(token_error)) => match token_error {
                TokenError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
                TokenError::InvalidToken => StatusCode::UNAUTHORIZED,
                TokenError::KeyLoadFailure { .. } | TokenError::TokenGenerationFailed => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            },
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            error!(error = %self, "Request failed");
        } else {
            warn!(error = %self, status = status.as_u16(), "Request rejected");
        }

        let body = match self {
            ApiError::Domain(DomainError::Validation { message }) => {
                ErrorResponse::new(error_codes::VALIDATION_ERROR, message.as_str())
            }
            ApiError::Domain(DomainError::Token(TokenError::InvalidInput { message })) => {
                ErrorResponse::new(error_codes::BAD_REQUEST, format!("Invalid request: {}", message))
            }
            ApiError::Domain(DomainError::Token(TokenError::InvalidToken)) => {
                ErrorResponse::new(error_codes::UNAUTHORIZED, UNAUTHORIZED_MESSAGE)
            }
            ApiError::Validation(errors) => {
                let fields: HashMap<String, Vec<String>> = errors
                    .field_errors()
                    .into_iter()
                    .map(|(field, errors)| {
                        let codes = errors.iter().map(|e| e.code.to_string()).collect();
                        (field.to_string(), codes)
                    })
                    .collect();
                ErrorResponse::new(error_codes::VALIDATION_ERROR, "Request validation failed")
                    .add_detail("fields", fields)
            }
            _ => ErrorResponse::new(error_codes::INTERNAL_ERROR, "An internal error occurred"),
        };

        HttpResponse::build(status).json(body)
    }
}
