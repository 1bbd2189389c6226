//! The route handler for pages that do not exist.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::html::error_view;

/// Display the 404 not found page.
pub async fn get_404_not_found() -> Response {
    let body = error_view(
        "Page Not Found",
        "404",
        "Something's missing.",
        "Sorry, we can't find that page. Head back to the dashboard to find your transactions.",
    );

    (StatusCode::NOT_FOUND, body).into_response()
}
