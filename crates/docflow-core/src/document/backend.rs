//! Document backend collaborator contract.

use super::model::DocumentRecord;
use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Outcome of a successful upload: the stored filename and the number of
/// chunks the ingestion pipeline created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadReceipt {
    pub filename: String,
    pub chunks_created: u32,
}

/// The document side of the assistant backend: ingestion, listing, and raw
/// retrieval for the external viewer.
#[async_trait]
pub trait DocumentBackend: Send + Sync {
    /// Uploads a file for chunking and ingestion.
    async fn upload(&self, filename: &str, bytes: Vec<u8>) -> Result<UploadReceipt>;

    /// Lists all ingested documents.
    async fn list_documents(&self) -> Result<Vec<DocumentRecord>>;

    /// Removes every ingested document. Destructive.
    async fn clear_documents(&self) -> Result<()>;

    /// Fetches a document's raw bytes for preview by the viewer collaborator.
    async fn fetch_document(&self, filename: &str) -> Result<Vec<u8>>;
}
