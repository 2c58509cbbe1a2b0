//! Document endpoints: upload, list, clear, raw view.

use crate::client::BackendClient;
use async_trait::async_trait;
use docflow_core::document::{DocumentBackend, DocumentRecord, UploadReceipt};
use docflow_core::error::{DocflowError, Result};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct UploadApiResponse {
    #[serde(default)]
    success: bool,
    filename: Option<String>,
    chunks_created: Option<u32>,
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DocumentsApiResponse {
    #[serde(default)]
    documents: Vec<DocumentRecord>,
}

#[async_trait]
impl DocumentBackend for BackendClient {
    async fn upload(&self, filename: &str, bytes: Vec<u8>) -> Result<UploadReceipt> {
        let part = reqwest::multipart::Part::bytes(bytes).file_name(filename.to_string());
        let form = reqwest::multipart::Form::new().part("file", part);

        tracing::info!(filename, "uploading document");

        let response = self
            .client
            .post(self.endpoint("/api/upload"))
            .multipart(form)
            .timeout(self.upload_timeout)
            .send()
            .await?;
        let response = Self::check_status(response, "upload").await?;

        let payload: UploadApiResponse = response.json().await?;
        if !payload.success {
            return Err(DocflowError::network(
                payload.error.unwrap_or_else(|| "Unknown error".to_string()),
            ));
        }

        Ok(UploadReceipt {
            filename: payload.filename.unwrap_or_else(|| filename.to_string()),
            chunks_created: payload.chunks_created.unwrap_or(0),
        })
    }

    async fn list_documents(&self) -> Result<Vec<DocumentRecord>> {
        let response = self
            .client
            .get(self.endpoint("/api/documents"))
            .timeout(self.request_timeout)
            .send()
            .await?;
        let response = Self::check_status(response, "document list").await?;

        let payload: DocumentsApiResponse = response.json().await?;
        Ok(payload.documents)
    }

    async fn clear_documents(&self) -> Result<()> {
        let response = self
            .client
            .post(self.endpoint("/api/documents/clear"))
            .timeout(self.request_timeout)
            .send()
            .await?;
        Self::check_status(response, "document clear").await?;
        Ok(())
    }

    async fn fetch_document(&self, filename: &str) -> Result<Vec<u8>> {
        let response = self
            .client
            .get(self.endpoint(&format!("/api/documents/{}/view", filename)))
            .timeout(self.request_timeout)
            .send()
            .await?;
        let response = Self::check_status(response, "document view").await?;

        Ok(response.bytes().await?.to_vec())
    }
}
