//! The API endpoints URIs.

/// The root route which redirects to the dashboard page.
pub const ROOT: &str = "/";
/// The landing page listing transactions and balance totals.
pub const DASHBOARD_VIEW: &str = "/dashboard";
/// The page for staging and uploading CSV files.
pub const IMPORT_VIEW: &str = "/import";
/// The page to display when an internal server error occurs.
pub const INTERNAL_ERROR_VIEW: &str = "/error";
/// The route for static files.
pub const STATIC: &str = "/static";

/// The route to add uploaded CSV files to the staging list.
pub const STAGE_FILES: &str = "/api/import/files";
/// The route to send the staged files to the transactions API.
pub const SUBMIT_IMPORT: &str = "/api/import/submit";
