//! The staging list for files waiting to be imported.

use crate::html::format_file_size;

/// Identifies a [StagedFile]. Unique within one server process.
pub type StagedFileId = u64;

/// A file received from the browser, before it is staged.
#[derive(Debug, Clone, PartialEq)]
pub struct IncomingFile {
    /// The file name declared by the browser.
    pub name: String,
    /// The raw bytes of the file.
    pub content: Vec<u8>,
}

/// A file queued for upload to the transactions API.
#[derive(Debug, Clone, PartialEq)]
pub struct StagedFile {
    /// Identifies this entry across staging and upload.
    pub id: StagedFileId,
    /// The file name declared by the browser.
    pub name: String,
    /// Human readable file size, formatted once at staging time.
    pub readable_size: String,
    /// The raw bytes of the file.
    pub content: Vec<u8>,
}

/// The ordered list of files queued for import.
///
/// Files keep their selection order. Duplicate file names are allowed since
/// entries are identified by id, and an entry is only removed once its
/// upload succeeds.
#[derive(Debug, Default)]
pub struct FileStagingList {
    files: Vec<StagedFile>,
    next_id: StagedFileId,
}

impl FileStagingList {
    /// Create an empty staging list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `files` to the end of the list in the order given.
    ///
    /// Appending an empty collection leaves the list unchanged.
    pub fn append(&mut self, files: Vec<IncomingFile>) {
        for file in files {
            let id = self.next_id;
            self.next_id += 1;

            self.files.push(StagedFile {
                id,
                readable_size: format_file_size(file.content.len() as u64),
                name: file.name,
                content: file.content,
            });
        }
    }

    /// The staged files in staging order.
    pub fn files(&self) -> &[StagedFile] {
        &self.files
    }

    /// A copy of the staged files, so an upload batch can iterate over them
    /// without holding the lock.
    pub fn snapshot(&self) -> Vec<StagedFile> {
        self.files.clone()
    }

    /// Remove the entries whose ids appear in `ids`, keeping the rest in
    /// staging order.
    pub fn remove(&mut self, ids: &[StagedFileId]) {
        self.files.retain(|file| !ids.contains(&file.id));
    }
}
