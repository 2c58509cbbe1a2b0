//! Document records.

use serde::{Deserialize, Serialize};

/// One ingested document, as reported by the backend's document list.
///
/// The filename acts as the id. The full set is replaced wholesale on each
/// list refresh; there is no incremental diffing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRecord {
    pub filename: String,
    pub file_type: String,
    #[serde(default)]
    pub upload_date: String,
    /// Number of chunks the file was split into at ingestion
    #[serde(default)]
    pub chunks: u32,
}

/// The fixed default descriptor used when no source document can be
/// resolved from context or from the document list.
pub fn fallback_source_document() -> DocumentRecord {
    DocumentRecord {
        filename: "Feeder-vehicle-policy_KMRL.docx.pdf".to_string(),
        file_type: ".pdf".to_string(),
        upload_date: String::new(),
        chunks: 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserializes_wire_shape() {
        let json = r#"{
            "filename": "report.pdf",
            "file_type": ".pdf",
            "upload_date": "2026-02-01T09:00:00Z",
            "chunks": 12
        }"#;

        let record: DocumentRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.filename, "report.pdf");
        assert_eq!(record.chunks, 12);
    }

    #[test]
    fn test_fallback_descriptor_is_pdf() {
        let fallback = fallback_source_document();
        assert_eq!(fallback.file_type, ".pdf");
        assert!(!fallback.filename.is_empty());
    }
}
