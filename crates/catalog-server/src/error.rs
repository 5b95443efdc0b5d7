//! Central application error type
//!
//! Every failure a request can produce collapses into [`AppError`], which owns
//! the envelope and status mapping. Validation and shape errors are detected
//! locally and turned into a failure envelope at the point of detection; only
//! store failures and genuinely unanticipated errors reach the 500 branch,
//! where they are logged and reduced to a generic message plus the underlying
//! error text.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::api::response::ErrorResponse;
use crate::features::books::commands::{CreateBookError, DeleteBookError, UpdateBookError};
use crate::features::books::queries::{GetBookError, ListBooksError};
use crate::features::users::commands::{LoginUserError, RegisterUserError};
use crate::store::StoreError;

/// Application error taxonomy
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Please provide all required fields (title, author, genre, price)")]
    MissingRequiredFields,

    /// One message per field violation; the display form joins them
    #[error("{}", .0.join(", "))]
    Validation(Vec<String>),

    #[error("Invalid ID format")]
    MalformedIdentifier,

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("Request body cannot be empty")]
    EmptyBody,

    #[error("{0}")]
    BadRequest(String),

    #[error("Route {0} not found")]
    RouteNotFound(String),

    /// Store failure with an operation-specific generic message
    #[error("{context}")]
    Store {
        context: String,
        #[source]
        source: StoreError,
    },

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn store(context: impl Into<String>, source: StoreError) -> Self {
        Self::Store {
            context: context.into(),
            source,
        }
    }

    /// The HTTP status this error maps to
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MissingRequiredFields
            | AppError::Validation(_)
            | AppError::MalformedIdentifier
            | AppError::EmptyBody
            | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) | AppError::RouteNotFound(_) => StatusCode::NOT_FOUND,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Store { .. } | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let body = match self {
            AppError::Validation(ref violations) => {
                ErrorResponse::with_errors(self.to_string(), violations.clone())
            }
            AppError::Store { context, source } => {
                tracing::error!(error = %source, context = %context, "store operation failed");
                ErrorResponse::new(context).with_error_detail(source.to_string())
            }
            AppError::Internal(err) => {
                tracing::error!(error = ?err, "unhandled internal error");
                let body = ErrorResponse::new("Internal Server Error");
                if cfg!(debug_assertions) {
                    body.with_error_detail(err.to_string())
                } else {
                    body
                }
            }
            other => ErrorResponse::new(other.to_string()),
        };

        (status, Json(body)).into_response()
    }
}

impl From<ListBooksError> for AppError {
    fn from(err: ListBooksError) -> Self {
        match err {
            ListBooksError::Store(source) => {
                AppError::store("Server error occurred while fetching books", source)
            }
        }
    }
}

impl From<GetBookError> for AppError {
    fn from(err: GetBookError) -> Self {
        match err {
            GetBookError::NotFound => AppError::NotFound("Book not found".to_string()),
            GetBookError::Store(source) => {
                AppError::store("Server error occurred while fetching book", source)
            }
        }
    }
}

impl From<CreateBookError> for AppError {
    fn from(err: CreateBookError) -> Self {
        match err {
            CreateBookError::MissingRequiredFields => AppError::MissingRequiredFields,
            CreateBookError::Validation(violations) => AppError::Validation(violations),
            CreateBookError::Store(source) => {
                AppError::store("Server error occurred while creating book", source)
            }
        }
    }
}

impl From<UpdateBookError> for AppError {
    fn from(err: UpdateBookError) -> Self {
        match err {
            UpdateBookError::NotFound => AppError::NotFound("Book not found".to_string()),
            UpdateBookError::Validation(violations) => AppError::Validation(violations),
            UpdateBookError::Store(source) => {
                AppError::store("Server error occurred while updating book", source)
            }
        }
    }
}

impl From<DeleteBookError> for AppError {
    fn from(err: DeleteBookError) -> Self {
        match err {
            DeleteBookError::NotFound => AppError::NotFound("Book not found".to_string()),
            DeleteBookError::Store(source) => {
                AppError::store("Server error occurred while deleting book", source)
            }
        }
    }
}

impl From<RegisterUserError> for AppError {
    fn from(err: RegisterUserError) -> Self {
        match err {
            RegisterUserError::Validation(violations) => AppError::Validation(violations),
            RegisterUserError::Token(source) => AppError::Internal(source.into()),
            RegisterUserError::Store(source) => {
                AppError::store("Server error occurred while registering user", source)
            }
        }
    }
}

impl From<LoginUserError> for AppError {
    fn from(err: LoginUserError) -> Self {
        match err {
            LoginUserError::Validation(violations) => AppError::Validation(violations),
            LoginUserError::InvalidCredentials => {
                AppError::Unauthorized("Invalid credentials".to_string())
            }
            LoginUserError::Token(source) => AppError::Internal(source.into()),
            LoginUserError::Store(source) => {
                AppError::store("Server error occurred during login", source)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            AppError::MissingRequiredFields.status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Validation(vec!["Title is required".to_string()]).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::MalformedIdentifier.status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::NotFound("Book not found".to_string()).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::Unauthorized("nope".to_string()).status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::store("context", StoreError::Unavailable("down".to_string())).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_validation_message_joins_violations() {
        let err = AppError::Validation(vec![
            "Title is required".to_string(),
            "Author is required".to_string(),
        ]);
        assert_eq!(err.to_string(), "Title is required, Author is required");
    }

    #[test]
    fn test_route_not_found_names_the_path() {
        let err = AppError::RouteNotFound("/api/nope".to_string());
        assert_eq!(err.to_string(), "Route /api/nope not found");
    }

    #[test]
    fn test_into_response_status() {
        let response = AppError::MalformedIdentifier.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = AppError::NotFound("Book not found".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
