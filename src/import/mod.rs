//! The CSV import feature.
//!
//! Importing happens in two steps. Files picked in the browser are first
//! staged on the server ([stage_files]), where the user can review them.
//! Submitting the list ([submit_import]) then uploads each staged file to
//! the transactions API one at a time, reporting a result per file.
//! Successfully uploaded files leave the list, failed ones stay staged so
//! the upload can be retried.

mod import_page;
mod stage_endpoint;
mod staging;
mod submit_endpoint;
mod upload;

pub use import_page::get_import_page;
pub use stage_endpoint::stage_files;
pub use staging::FileStagingList;
pub use submit_endpoint::submit_import;
