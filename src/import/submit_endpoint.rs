use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{
    AppState, Error,
    alert::Alert,
    api::TransactionsApi,
    import::{
        import_page::import_content_view,
        staging::{FileStagingList, StagedFileId},
        upload::upload_staged_files,
    },
};

/// The state needed for sending staged files to the transactions API.
#[derive(Debug, Clone)]
pub struct SubmitImportState {
    /// Client for the transactions API.
    pub api: Arc<dyn TransactionsApi>,
    /// The files staged for import.
    pub staged_files: Arc<Mutex<FileStagingList>>,
}

impl FromRef<AppState> for SubmitImportState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            api: state.api.clone(),
            staged_files: state.staged_files.clone(),
        }
    }
}

/// Route handler that uploads each staged file to the transactions API.
///
/// Files are uploaded one at a time in staging order. Entries whose upload
/// succeeded are removed from the staging list, failed entries stay staged
/// so the upload can be retried. The response is the re-rendered staging
/// area with a result for every attempted file.
///
/// The batch works on a snapshot of the staging list, so files staged while
/// the batch is running are kept for the next submission.
pub async fn submit_import(State(state): State<SubmitImportState>) -> Result<Response, Response> {
    let snapshot = {
        let staged_files = state.staged_files.lock().map_err(|error| {
            tracing::error!("could not acquire the staged files lock: {error}");
            Error::StagingLockError.into_alert_response()
        })?;

        staged_files.snapshot()
    };

    if snapshot.is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Alert::Error {
                message: "No files staged".to_owned(),
                details: "Choose one or more CSV files and add them to the import list first."
                    .to_owned(),
            }
            .into_html(),
        )
            .into_response());
    }

    let outcomes = upload_staged_files(&snapshot, state.api.as_ref()).await;

    let uploaded_ids: Vec<StagedFileId> = outcomes
        .iter()
        .filter(|outcome| outcome.result.is_ok())
        .map(|outcome| outcome.file_id)
        .collect();

    let staged = {
        let mut staged_files = state.staged_files.lock().map_err(|error| {
            tracing::error!("could not acquire the staged files lock: {error}");
            Error::StagingLockError.into_alert_response()
        })?;

        staged_files.remove(&uploaded_ids);
        staged_files.files().to_vec()
    };

    Ok(import_content_view(&staged, &outcomes).into_response())
}
