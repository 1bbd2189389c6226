//! Defines the app level error type and conversions to rendered HTML pages and alerts.
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{alert::Alert, internal_server_error::InternalServerError};

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The transactions API could not be reached.
    ///
    /// Covers connection errors such as a refused connection or a failed DNS
    /// lookup. The inner string is the underlying client error.
    #[error("could not reach the transactions API: {0}")]
    ApiUnavailable(String),

    /// The transactions API did not answer within the request timeout.
    #[error("the transactions API took too long to respond")]
    ApiTimeout,

    /// The transactions API answered with a non-success status code.
    #[error("the transactions API responded with status {0}")]
    ApiStatus(u16),

    /// The transactions API answered with a body that could not be parsed.
    #[error("could not parse the transactions API response: {0}")]
    ApiResponse(String),

    /// The multipart form could not be parsed as a list of CSV files.
    #[error("Could not parse multipart form: {0}")]
    MultipartError(String),

    /// The multipart form did not contain a CSV file.
    #[error("File is not a CSV")]
    NotCSV,

    /// The staged files lock could not be acquired.
    ///
    /// Occurs when another request panicked while holding the lock.
    #[error("could not acquire the staged files lock")]
    StagingLockError,
}

impl From<reqwest::Error> for Error {
    fn from(value: reqwest::Error) -> Self {
        if value.is_timeout() {
            Error::ApiTimeout
        } else {
            Error::ApiUnavailable(value.to_string())
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::StagingLockError => InternalServerError::default().into_response(),
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                InternalServerError::default().into_response()
            }
        }
    }
}

impl Error {
    /// Convert the error into an HTTP response with an HTML alert.
    pub fn into_alert_response(self) -> Response {
        let (status_code, alert) = match self {
            Error::MultipartError(details) => (
                StatusCode::BAD_REQUEST,
                Alert::Error {
                    message: "Could not read the uploaded files".to_owned(),
                    details,
                },
            ),
            Error::StagingLockError => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Alert::ErrorSimple {
                    message: "Could not access the staged files, try again.".to_owned(),
                },
            ),
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Alert::Error {
                    message: "Something went wrong".to_owned(),
                    details:
                        "An unexpected error occurred, check the server logs for more details."
                            .to_owned(),
                },
            ),
        };

        (status_code, alert.into_html()).into_response()
    }
}
