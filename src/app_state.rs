//! Implements a struct that holds the state of the web server.

use std::sync::{Arc, Mutex};

use crate::{api::TransactionsApi, import::FileStagingList};

/// The state of the web server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The client used to reach the remote transactions API.
    pub api: Arc<dyn TransactionsApi>,

    /// The files staged for import, shared across requests.
    pub staged_files: Arc<Mutex<FileStagingList>>,
}

impl AppState {
    /// Create a new [AppState] with `api` as the transactions API client and
    /// an empty staging list.
    pub fn new(api: impl TransactionsApi + 'static) -> Self {
        Self {
            api: Arc::new(api),
            staged_files: Arc::new(Mutex::new(FileStagingList::new())),
        }
    }
}
