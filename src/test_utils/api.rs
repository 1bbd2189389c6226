use std::{collections::HashSet, sync::Mutex};

use async_trait::async_trait;

use crate::{
    Error,
    api::{TransactionSummary, TransactionsApi},
};

/// An in-memory stand-in for the transactions API that records uploads and
/// serves a preconfigured summary.
#[derive(Debug, Default)]
pub(crate) struct FakeTransactionsApi {
    summary: Option<TransactionSummary>,
    failing_files: HashSet<String>,
    uploads: Mutex<Vec<(String, Vec<u8>)>>,
}

impl FakeTransactionsApi {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Set the summary served by [TransactionsApi::fetch_summary]. Without
    /// one, `fetch_summary` fails as if the API were unreachable.
    pub(crate) fn with_summary(mut self, summary: TransactionSummary) -> Self {
        self.summary = Some(summary);
        self
    }

    /// Make every upload of the file called `file_name` fail with a 500
    /// status. The upload is still recorded.
    pub(crate) fn fail_uploads_of(mut self, file_name: &str) -> Self {
        self.failing_files.insert(file_name.to_owned());
        self
    }

    /// The `(file name, content)` pairs uploaded so far, in request order.
    pub(crate) fn recorded_uploads(&self) -> Vec<(String, Vec<u8>)> {
        self.uploads.lock().expect("uploads lock poisoned").clone()
    }
}

#[async_trait]
impl TransactionsApi for FakeTransactionsApi {
    async fn fetch_summary(&self) -> Result<TransactionSummary, Error> {
        self.summary
            .clone()
            .ok_or_else(|| Error::ApiUnavailable("no summary configured".to_owned()))
    }

    async fn import_file(&self, file_name: &str, content: &[u8]) -> Result<(), Error> {
        self.uploads
            .lock()
            .expect("uploads lock poisoned")
            .push((file_name.to_owned(), content.to_vec()));

        if self.failing_files.contains(file_name) {
            Err(Error::ApiStatus(500))
        } else {
            Ok(())
        }
    }
}
