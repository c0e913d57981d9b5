//! Document use cases

use crate::domain::{DocumentRecord, DocumentRegistry, StatusCounts};
use crate::error::Result;

/// Service wrapping one session's registry
pub struct DocumentService {
    registry: DocumentRegistry,
}

impl DocumentService {
    pub fn new(registry: DocumentRegistry) -> Self {
        DocumentService { registry }
    }

    /// Documents matching `query`; every document when the query is empty
    pub fn search(&self, query: &str) -> Vec<&DocumentRecord> {
        let found = self.registry.filter(query);
        tracing::debug!(query, matched = found.len(), "filtered documents");
        found
    }

    /// Create a new draft document
    pub fn create(
        &mut self,
        doc_type: &str,
        patient_name: &str,
        doctor: &str,
    ) -> Result<DocumentRecord> {
        match self.registry.create(doc_type, patient_name, doctor) {
            Ok(record) => {
                tracing::info!(
                    id = %record.id,
                    doc_type = record.doc_type.key(),
                    "created draft document"
                );
                Ok(record)
            }
            Err(e) => {
                tracing::warn!("rejected new document: {}", e);
                Err(e.into())
            }
        }
    }

    pub fn stats(&self) -> StatusCounts {
        self.registry.counts_by_status()
    }

    pub fn registry(&self) -> &DocumentRegistry {
        &self.registry
    }
}
