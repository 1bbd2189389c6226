//! The HTTP implementation of the transactions API client.

use std::{fmt::Debug, time::Duration};

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};

use crate::{Error, api::models::TransactionSummary};

/// The path of the transaction listing endpoint.
const TRANSACTIONS_PATH: &str = "/transactions";
/// The path of the bulk import endpoint.
const IMPORT_PATH: &str = "/transactions/import";

/// The operations the app needs from the remote transactions service.
#[async_trait]
pub trait TransactionsApi: Debug + Send + Sync {
    /// Fetch the transaction list and the balance totals.
    async fn fetch_summary(&self) -> Result<TransactionSummary, Error>;

    /// Upload one file to the bulk import endpoint.
    ///
    /// The file is sent as a multipart form with a single `file` field
    /// carrying `content` under `file_name`.
    async fn import_file(&self, file_name: &str, content: &[u8]) -> Result<(), Error>;
}

/// A [TransactionsApi] that talks to the real service over HTTP.
#[derive(Debug, Clone)]
pub struct HttpTransactionsApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTransactionsApi {
    /// Create a client for the service at `base_url`, e.g.
    /// `http://localhost:3333`.
    ///
    /// `request_timeout` bounds each request, so one hung upload cannot
    /// stall the rest of a batch.
    pub fn new(base_url: &str, request_timeout: Duration) -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .timeout(request_timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_owned(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl TransactionsApi for HttpTransactionsApi {
    async fn fetch_summary(&self) -> Result<TransactionSummary, Error> {
        let response = self.client.get(self.url(TRANSACTIONS_PATH)).send().await?;

        if !response.status().is_success() {
            return Err(Error::ApiStatus(response.status().as_u16()));
        }

        response
            .json::<TransactionSummary>()
            .await
            .map_err(|error| Error::ApiResponse(error.to_string()))
    }

    async fn import_file(&self, file_name: &str, content: &[u8]) -> Result<(), Error> {
        let part = Part::bytes(content.to_vec()).file_name(file_name.to_owned());
        let form = Form::new().part("file", part);

        let response = self
            .client
            .post(self.url(IMPORT_PATH))
            .multipart(form)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Error::ApiStatus(response.status().as_u16()));
        }

        Ok(())
    }
}
