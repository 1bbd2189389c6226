//! Dashboard module
//!
//! Provides an overview page with balance summary cards and the list of
//! transactions fetched from the remote transactions API.

mod cards;
mod handlers;
mod table;

pub use handlers::get_dashboard_page;
