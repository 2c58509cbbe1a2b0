//! Document domain: records, client-side upload validation, and the
//! document backend contract.

pub mod backend;
pub mod model;
pub mod validation;

pub use backend::{DocumentBackend, UploadReceipt};
pub use model::{fallback_source_document, DocumentRecord};
pub use validation::{validate_upload, ALLOWED_EXTENSIONS, MAX_UPLOAD_BYTES};
