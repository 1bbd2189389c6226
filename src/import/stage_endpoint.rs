use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, Multipart, State, multipart::Field},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use maud::html;

use crate::{
    AppState, Error,
    alert::Alert,
    import::{
        import_page::import_content_view,
        staging::{FileStagingList, IncomingFile},
    },
};

/// The state needed for staging files.
#[derive(Debug, Clone)]
pub struct StageFilesState {
    /// The files staged for import.
    pub staged_files: Arc<Mutex<FileStagingList>>,
}

impl FromRef<AppState> for StageFilesState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            staged_files: state.staged_files.clone(),
        }
    }
}

/// Route handler that adds uploaded CSV files to the staging list.
///
/// Files are appended in the order they appear in the form, after the files
/// that are already staged. Nothing is staged if any part of the form is
/// rejected. The response is the re-rendered staging area.
pub async fn stage_files(
    State(state): State<StageFilesState>,
    mut multipart: Multipart,
) -> Result<Response, Response> {
    let mut incoming = Vec::new();

    while let Some(field) = multipart.next_field().await.map_err(|error| {
        tracing::error!("could not read the multipart form: {error}");
        Error::MultipartError(error.to_string()).into_alert_response()
    })? {
        let file = parse_multipart_field(field)
            .await
            .map_err(|error| match error {
                Error::NotCSV => (
                    StatusCode::BAD_REQUEST,
                    Alert::ErrorSimple {
                        message: "File type must be CSV.".to_owned(),
                    }
                    .into_html(),
                )
                    .into_response(),
                error => {
                    tracing::error!("Failed to parse multipart field: {}", error);
                    error.into_alert_response()
                }
            })?;

        incoming.push(file);
    }

    let added_count = incoming.len();

    let staged = {
        let mut staged_files = state.staged_files.lock().map_err(|error| {
            tracing::error!("could not acquire the staged files lock: {error}");
            Error::StagingLockError.into_alert_response()
        })?;

        staged_files.append(incoming);
        staged_files.files().to_vec()
    };

    let content = import_content_view(&staged, &[]);

    if added_count == 0 {
        return Ok(content.into_response());
    }

    let alert = Alert::Success {
        message: format!("Added {added_count} file(s) to the import list."),
        details: "Review the list below, then select Send files.".to_owned(),
    };

    Ok(html! {
        (content)
        (alert.into_html())
    }
    .into_response())
}

async fn parse_multipart_field(field: Field<'_>) -> Result<IncomingFile, Error> {
    if field.content_type() != Some("text/csv") {
        return Err(Error::NotCSV);
    }

    let name = match field.file_name() {
        Some(file_name) => file_name.to_owned(),
        None => {
            tracing::error!("Could not get file name from multipart form field: {field:#?}");
            return Err(Error::MultipartError(
                "Could not get file name from multipart form field".to_owned(),
            ));
        }
    };

    let content = match field.bytes().await {
        Ok(bytes) => bytes.to_vec(),
        Err(error) => {
            tracing::error!("Could not read data from multipart form field: {error}");
            return Err(Error::MultipartError(
                "Could not read data from multipart form field.".to_owned(),
            ));
        }
    };

    tracing::debug!("Received file '{}' that is {} bytes", name, content.len());

    Ok(IncomingFile { name, content })
}
