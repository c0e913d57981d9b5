//! Domain layer - Document model and registry

pub mod document;
pub mod labels;
pub mod registry;
pub mod seed;

pub use document::{DocumentId, DocumentRecord, DocumentStatus, DocumentType};
pub use registry::{Clock, DocumentRegistry, IdGenerator, StatusCounts};
pub use seed::seed_documents;
