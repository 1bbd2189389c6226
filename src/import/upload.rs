//! The upload batch that sends staged files to the transactions API.

use crate::{
    Error,
    api::TransactionsApi,
    import::staging::{StagedFile, StagedFileId},
};

/// The result of one file's upload attempt.
#[derive(Debug, PartialEq)]
pub struct UploadOutcome {
    /// The staged entry this outcome belongs to.
    pub file_id: StagedFileId,
    /// The file name, for display.
    pub file_name: String,
    /// Whether the upload succeeded, and if not, why.
    pub result: Result<(), Error>,
}

/// Upload each staged file to the transactions API, one at a time, in
/// staging order.
///
/// A failed upload is logged and recorded in the returned outcomes, and the
/// remaining files are still attempted. Outcomes are returned in the same
/// order as `files`.
pub async fn upload_staged_files(
    files: &[StagedFile],
    api: &dyn TransactionsApi,
) -> Vec<UploadOutcome> {
    let mut outcomes = Vec::with_capacity(files.len());

    for file in files {
        let result = api.import_file(&file.name, &file.content).await;

        if let Err(error) = &result {
            tracing::error!("could not upload file '{}': {error}", file.name);
        }

        outcomes.push(UploadOutcome {
            file_id: file.id,
            file_name: file.name.clone(),
            result,
        });
    }

    outcomes
}
