//! Document library use case.
//!
//! Keeps a cached view of the ingested corpus, refreshed on demand. A failed
//! refresh keeps the previous snapshot so the dashboard never blanks out on
//! a transient backend error.

use docflow_core::document::{
    fallback_source_document, DocumentBackend, DocumentRecord, UploadReceipt,
};
use docflow_core::document::validate_upload;
use docflow_core::error::{DocflowError, Result};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Explicit confirmation token for destructive operations.
///
/// `clear_all` wipes the entire ingested corpus; callers must state the
/// user's answer rather than pass a bare bool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Confirmed,
    Cancelled,
}

/// Use case over the document backend with a local snapshot of the corpus.
pub struct DocumentService {
    backend: Arc<dyn DocumentBackend>,
    documents: RwLock<Vec<DocumentRecord>>,
    last_error: RwLock<Option<String>>,
}

impl DocumentService {
    pub fn new(backend: Arc<dyn DocumentBackend>) -> Self {
        Self {
            backend,
            documents: RwLock::new(Vec::new()),
            last_error: RwLock::new(None),
        }
    }

    /// The last successfully fetched document list.
    pub async fn documents(&self) -> Vec<DocumentRecord> {
        self.documents.read().await.clone()
    }

    /// The message of the most recent failed refresh, cleared on success.
    pub async fn last_error(&self) -> Option<String> {
        self.last_error.read().await.clone()
    }

    /// Re-fetches the document list from the backend.
    ///
    /// On failure the cached snapshot is left untouched and the error is
    /// returned to the caller.
    pub async fn refresh(&self) -> Result<Vec<DocumentRecord>> {
        match self.backend.list_documents().await {
            Ok(records) => {
                *self.documents.write().await = records.clone();
                *self.last_error.write().await = None;
                Ok(records)
            }
            Err(err) => {
                tracing::warn!(error = %err, "document list refresh failed, keeping cached view");
                *self.last_error.write().await = Some(err.to_string());
                Err(err)
            }
        }
    }

    /// Validates and uploads a file, then refreshes the snapshot.
    pub async fn upload(&self, filename: &str, bytes: Vec<u8>) -> Result<UploadReceipt> {
        validate_upload(filename, bytes.len() as u64)?;
        let receipt = self.backend.upload(filename, bytes).await?;
        // Best effort: the upload already succeeded, a stale list can wait
        // for the next refresh
        if let Err(err) = self.refresh().await {
            tracing::debug!(error = %err, "post-upload refresh failed");
        }
        Ok(receipt)
    }

    /// Clears the entire ingested corpus.
    ///
    /// Requires an explicit `Confirmed`; a `Cancelled` confirmation is
    /// rejected before anything reaches the backend and the snapshot is
    /// unchanged.
    pub async fn clear_all(&self, confirmation: Confirmation) -> Result<()> {
        if confirmation == Confirmation::Cancelled {
            return Err(DocflowError::validation("corpus clear was not confirmed"));
        }
        self.backend.clear_documents().await?;
        self.documents.write().await.clear();
        Ok(())
    }

    /// Raw bytes of an ingested document, for viewing.
    pub async fn fetch_document(&self, filename: &str) -> Result<Vec<u8>> {
        self.backend.fetch_document(filename).await
    }

    /// Resolves which document a source reference points at.
    ///
    /// Falls back from an exact filename match to the first ingested
    /// document, then to the built-in seed document, so a citation can
    /// always be opened.
    pub async fn resolve_source_document(&self, filename: Option<&str>) -> DocumentRecord {
        let documents = self.documents.read().await;
        if let Some(name) = filename {
            if let Some(found) = documents.iter().find(|d| d.filename == name) {
                return found.clone();
            }
        }
        documents
            .first()
            .cloned()
            .unwrap_or_else(fallback_source_document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use docflow_core::DocflowError;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    #[derive(Default)]
    struct MockDocumentBackend {
        fail_list: AtomicBool,
        clear_calls: AtomicUsize,
    }

    fn record(filename: &str) -> DocumentRecord {
        DocumentRecord {
            filename: filename.to_string(),
            file_type: "pdf".to_string(),
            upload_date: "2026-08-01T10:00:00Z".to_string(),
            chunks: 3,
        }
    }

    #[async_trait]
    impl DocumentBackend for MockDocumentBackend {
        async fn upload(&self, filename: &str, _bytes: Vec<u8>) -> Result<UploadReceipt> {
            Ok(UploadReceipt {
                filename: filename.to_string(),
                chunks_created: 3,
            })
        }

        async fn list_documents(&self) -> Result<Vec<DocumentRecord>> {
            if self.fail_list.load(Ordering::SeqCst) {
                return Err(DocflowError::network("backend down"));
            }
            Ok(vec![record("policy.pdf"), record("minutes.docx")])
        }

        async fn clear_documents(&self) -> Result<()> {
            self.clear_calls.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        async fn fetch_document(&self, _filename: &str) -> Result<Vec<u8>> {
            Ok(b"%PDF-1.4".to_vec())
        }
    }

    #[tokio::test]
    async fn test_refresh_replaces_snapshot() {
        let service = DocumentService::new(Arc::new(MockDocumentBackend::default()));
        assert!(service.documents().await.is_empty());

        let records = service.refresh().await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(service.documents().await.len(), 2);
    }

    #[tokio::test]
    async fn test_failed_refresh_keeps_previous_snapshot() {
        let backend = Arc::new(MockDocumentBackend::default());
        let service = DocumentService::new(backend.clone());
        service.refresh().await.unwrap();

        backend.fail_list.store(true, Ordering::SeqCst);
        let err = service.refresh().await.unwrap_err();

        assert!(err.is_network());
        assert_eq!(service.documents().await.len(), 2);
        assert!(service.last_error().await.is_some());

        backend.fail_list.store(false, Ordering::SeqCst);
        service.refresh().await.unwrap();
        assert!(service.last_error().await.is_none());
    }

    #[tokio::test]
    async fn test_cancelled_clear_never_reaches_backend() {
        let backend = Arc::new(MockDocumentBackend::default());
        let service = DocumentService::new(backend.clone());
        service.refresh().await.unwrap();

        let err = service.clear_all(Confirmation::Cancelled).await.unwrap_err();

        assert!(err.is_validation());
        assert_eq!(backend.clear_calls.load(Ordering::SeqCst), 0);
        assert_eq!(service.documents().await.len(), 2);
    }

    #[tokio::test]
    async fn test_confirmed_clear_empties_snapshot() {
        let backend = Arc::new(MockDocumentBackend::default());
        let service = DocumentService::new(backend.clone());
        service.refresh().await.unwrap();

        service.clear_all(Confirmation::Confirmed).await.unwrap();

        assert_eq!(backend.clear_calls.load(Ordering::SeqCst), 1);
        assert!(service.documents().await.is_empty());
    }

    #[tokio::test]
    async fn test_upload_rejects_invalid_file_before_network() {
        let service = DocumentService::new(Arc::new(MockDocumentBackend::default()));
        let err = service.upload("movie.mkv", vec![0; 8]).await.unwrap_err();
        assert!(err.is_validation());
    }

    #[tokio::test]
    async fn test_upload_refreshes_snapshot() {
        let service = DocumentService::new(Arc::new(MockDocumentBackend::default()));
        let receipt = service.upload("policy.pdf", vec![0; 8]).await.unwrap();
        assert_eq!(receipt.chunks_created, 3);
        assert_eq!(service.documents().await.len(), 2);
    }

    #[tokio::test]
    async fn test_resolve_prefers_exact_match() {
        let service = DocumentService::new(Arc::new(MockDocumentBackend::default()));
        service.refresh().await.unwrap();

        let resolved = service.resolve_source_document(Some("minutes.docx")).await;
        assert_eq!(resolved.filename, "minutes.docx");
    }

    #[tokio::test]
    async fn test_resolve_falls_back_to_first_document() {
        let service = DocumentService::new(Arc::new(MockDocumentBackend::default()));
        service.refresh().await.unwrap();

        let resolved = service.resolve_source_document(Some("missing.pdf")).await;
        assert_eq!(resolved.filename, "policy.pdf");
    }

    #[tokio::test]
    async fn test_resolve_falls_back_to_seed_document_when_empty() {
        let service = DocumentService::new(Arc::new(MockDocumentBackend::default()));
        let resolved = service.resolve_source_document(None).await;
        assert_eq!(resolved, fallback_source_document());
    }
}
