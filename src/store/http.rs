use anyhow::{Context, Result};
use reqwest::{Client, Response};
use serde::Deserialize;
use std::time::Duration;

use crate::config::RemoteConfig;
use crate::model::{Record, RecordId};
use crate::store::traits::RecordRemote;
use crate::store::RemoteError;

/// Error body returned by the remote on rejected create/update
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// `RecordRemote` over HTTP + JSON
#[derive(Debug, Clone)]
pub struct HttpRemote {
    client: Client,
    base_url: String,
}

impl HttpRemote {
    /// Create a client for the collection rooted at `base_url`
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &RemoteConfig) -> Result<Self> {
        Self::new(&config.base_url, Duration::from_millis(config.timeout_ms))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn record_url(&self, id: RecordId) -> String {
        format!("{}/{}", self.base_url, id)
    }

    /// Turn a non-2xx response into `Rejected`, reading `{message}` from the body
    async fn rejected_with_message(response: Response) -> RemoteError {
        let status = response.status().as_u16();
        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.message);
        RemoteError::Rejected { status, message }
    }
}

#[async_trait::async_trait]
impl RecordRemote for HttpRemote {
    async fn list_records(&self) -> Result<Vec<Record>, RemoteError> {
        let response = self.client.get(&self.base_url).send().await?;
        if !response.status().is_success() {
            return Err(RemoteError::Rejected {
                status: response.status().as_u16(),
                message: None,
            });
        }
        Ok(response.json::<Vec<Record>>().await?)
    }

    async fn create_record(&self, record: &Record) -> Result<Record, RemoteError> {
        let response = self
            .client
            .post(&self.base_url)
            .json(&record.as_new())
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(Self::rejected_with_message(response).await);
        }
        Ok(response.json::<Record>().await?)
    }

    async fn update_record(&self, record: &Record) -> Result<Record, RemoteError> {
        let response = self
            .client
            .put(self.record_url(record.id))
            .json(record)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(Self::rejected_with_message(response).await);
        }
        Ok(response.json::<Record>().await?)
    }

    async fn delete_record(&self, id: RecordId) -> Result<(), RemoteError> {
        let response = self.client.delete(self.record_url(id)).send().await?;
        // The body of a failed delete is never inspected
        if !response.status().is_success() {
            return Err(RemoteError::Rejected {
                status: response.status().as_u16(),
                message: None,
            });
        }
        Ok(())
    }
}
