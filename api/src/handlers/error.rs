//! Translation of domain and request errors into JSON error responses

use actix_web::{
    error::{InternalError, JsonPayloadError, PathError, QueryPayloadError},
    http::StatusCode,
    HttpRequest, HttpResponse,
};
use bnb_core::errors::{AuthError, BookingError, DomainError, TokenError};
use bnb_shared::errors::{error_codes, ErrorResponse};
use validator::ValidationErrors;

/// Status code and client error code for a domain error
pub fn classify(error: &DomainError) -> (StatusCode, &'static str) {
    match error {
        DomainError::Validation(_) => (StatusCode::BAD_REQUEST, error_codes::VALIDATION_ERROR),
        DomainError::NotFound { .. } => (StatusCode::NOT_FOUND, error_codes::NOT_FOUND),
        DomainError::Booking(BookingError::DatesUnavailable { .. }) => {
            (StatusCode::CONFLICT, error_codes::DATES_UNAVAILABLE)
        }
        DomainError::Booking(BookingError::InvalidStatusTransition { .. }) => {
            (StatusCode::CONFLICT, error_codes::INVALID_STATUS_TRANSITION)
        }
        DomainError::Conflict { .. } => (StatusCode::CONFLICT, error_codes::CONFLICT),
        DomainError::Auth(auth) => match auth {
            AuthError::InvalidCredentials => {
                (StatusCode::UNAUTHORIZED, error_codes::INVALID_CREDENTIALS)
            }
            AuthError::MissingCredentials | AuthError::AccountNotFound => {
                (StatusCode::UNAUTHORIZED, error_codes::UNAUTHORIZED)
            }
            AuthError::InsufficientPermissions | AuthError::RoleNotAssignable { .. } => {
                (StatusCode::FORBIDDEN, error_codes::FORBIDDEN)
            }
        },
        DomainError::Token(token) => match token {
            TokenError::TokenExpired => (StatusCode::UNAUTHORIZED, error_codes::TOKEN_EXPIRED),
            TokenError::TokenRevoked => (StatusCode::UNAUTHORIZED, error_codes::TOKEN_REVOKED),
            TokenError::TokenGenerationFailed => {
                (StatusCode::INTERNAL_SERVER_ERROR, error_codes::INTERNAL_ERROR)
            }
            TokenError::InvalidTokenFormat
            | TokenError::InvalidSignature
            | TokenError::InvalidClaims => (StatusCode::UNAUTHORIZED, error_codes::TOKEN_INVALID),
        },
        DomainError::Persistence { .. } => {
            (StatusCode::INTERNAL_SERVER_ERROR, error_codes::PERSISTENCE_ERROR)
        }
        DomainError::Internal { .. } => {
            (StatusCode::INTERNAL_SERVER_ERROR, error_codes::INTERNAL_ERROR)
        }
    }
}

/// Build the error body for a domain error
///
/// Server-side failures are logged in full and reported to the client with a
/// generic message.
pub fn error_response(error: &DomainError) -> ErrorResponse {
    let (status, code) = classify(error);

    if status.is_server_error() {
        log::error!("Request failed: {:?}", error);
        return ErrorResponse::new(code, "An internal error occurred");
    }

    log::debug!("Request rejected with {}: {}", status, error);
    let response = ErrorResponse::new(code, error.to_string());
    match error {
        DomainError::Booking(BookingError::DatesUnavailable {
            listing_id,
            conflicting_booking_id,
        }) => {
            let response = response.add_detail("listingId", listing_id);
            match conflicting_booking_id {
                Some(id) => response.add_detail("conflictingBookingId", id),
                None => response,
            }
        }
        DomainError::Booking(BookingError::InvalidStatusTransition { from, to }) => response
            .add_detail("from", from.as_str())
            .add_detail("to", to.as_str()),
        _ => response,
    }
}

pub fn handle_domain_error(error: &DomainError) -> HttpResponse {
    let (status, _) = classify(error);
    HttpResponse::build(status).json(error_response(error))
}

/// 400 response for request bodies that fail their `validator` rules
pub fn handle_validation_errors(errors: &ValidationErrors) -> HttpResponse {
    let mut response = ErrorResponse::new(error_codes::VALIDATION_ERROR, "Invalid request body");
    for (field, failures) in errors.field_errors() {
        let messages: Vec<String> = failures
            .iter()
            .map(|failure| {
                failure
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| failure.code.to_string())
            })
            .collect();
        response = response.add_detail(field, messages);
    }
    HttpResponse::BadRequest().json(response)
}

/// Malformed or missing JSON bodies are reported in the common error shape
pub fn json_error_handler(error: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let body = ErrorResponse::new(error_codes::VALIDATION_ERROR, error.to_string());
    InternalError::from_response(error, HttpResponse::BadRequest().json(body)).into()
}

pub fn query_error_handler(error: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let body = ErrorResponse::new(error_codes::VALIDATION_ERROR, error.to_string());
    InternalError::from_response(error, HttpResponse::BadRequest().json(body)).into()
}

/// Path segments that do not parse (e.g. a malformed id) name no resource
pub fn path_error_handler(error: PathError, _req: &HttpRequest) -> actix_web::Error {
    let body = ErrorResponse::new(error_codes::NOT_FOUND, "The requested resource was not found");
    InternalError::from_response(error, HttpResponse::NotFound().json(body)).into()
}

/// JSON 404 for unmatched routes
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        error_codes::NOT_FOUND,
        "The requested resource was not found",
    ))
}
