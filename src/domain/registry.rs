//! In-memory document registry

use crate::domain::document::{DocumentId, DocumentRecord, DocumentStatus, DocumentType};
use crate::error::{Field, ValidationError};
use chrono::NaiveDate;
use std::collections::HashSet;
use std::str::FromStr;

/// Source of the current date for newly created documents
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Strategy for allocating document ids.
///
/// The registry skips ids it has already issued and asks again, so an
/// implementation must eventually yield an id it has not returned before.
pub trait IdGenerator {
    fn next_id(&mut self) -> DocumentId;
}

/// Number of documents per status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusCounts {
    pub total: usize,
    pub completed: usize,
    pub draft: usize,
    pub archived: usize,
}

impl StatusCounts {
    pub fn get(&self, status: DocumentStatus) -> usize {
        match status {
            DocumentStatus::Draft => self.draft,
            DocumentStatus::Completed => self.completed,
            DocumentStatus::Archived => self.archived,
        }
    }
}

/// Ordered collection of documents, most recently created first.
///
/// `create` takes `&mut self`, so a registry has exactly one writer at a time.
/// Sharing one across threads requires serializing `create` externally.
pub struct DocumentRegistry {
    documents: Vec<DocumentRecord>,
    // Every id ever handed out, so a generator can never reuse one.
    issued: HashSet<DocumentId>,
    clock: Box<dyn Clock>,
    ids: Box<dyn IdGenerator>,
}

impl DocumentRegistry {
    /// Create an empty registry
    pub fn new(clock: Box<dyn Clock>, ids: Box<dyn IdGenerator>) -> Self {
        DocumentRegistry {
            documents: Vec::new(),
            issued: HashSet::new(),
            clock,
            ids,
        }
    }

    /// Create a registry holding `documents` in the given order
    pub fn with_documents(
        documents: Vec<DocumentRecord>,
        clock: Box<dyn Clock>,
        ids: Box<dyn IdGenerator>,
    ) -> Result<Self, ValidationError> {
        let mut issued = HashSet::with_capacity(documents.len());
        for doc in &documents {
            if !issued.insert(doc.id.clone()) {
                return Err(ValidationError::DuplicateId(doc.id.clone()));
            }
        }

        Ok(DocumentRegistry {
            documents,
            issued,
            clock,
            ids,
        })
    }

    /// All documents, most recently created first
    pub fn list(&self) -> &[DocumentRecord] {
        &self.documents
    }

    /// Documents whose patient name or type contains `query`, ignoring case.
    /// Case is compared through `str::to_lowercase`, so "STRASSE" does not match "Straße".
    /// An empty query returns every document.
    pub fn filter(&self, query: &str) -> Vec<&DocumentRecord> {
        let needle = query.to_lowercase();
        self.documents
            .iter()
            .filter(|doc| needle.is_empty() || doc.matches_lowercase(&needle))
            .collect()
    }

    /// Append a new draft to the front of the collection.
    ///
    /// Nothing is changed when validation fails.
    pub fn create(
        &mut self,
        doc_type: &str,
        patient_name: &str,
        doctor: &str,
    ) -> Result<DocumentRecord, ValidationError> {
        let doc_type_input = required(doc_type, Field::DocumentType)?;
        let patient_name = required(patient_name, Field::PatientName)?;
        let doctor = required(doctor, Field::Doctor)?;
        let doc_type = DocumentType::from_str(doc_type_input)
            .map_err(|_| ValidationError::UnknownDocumentType(doc_type_input.to_string()))?;

        let id = self.allocate_id();
        let record = DocumentRecord {
            id,
            doc_type,
            patient_name: patient_name.to_string(),
            date: self.clock.today(),
            status: DocumentStatus::Draft,
            doctor: doctor.to_string(),
        };

        self.documents.insert(0, record.clone());
        Ok(record)
    }

    /// Count documents by status
    pub fn counts_by_status(&self) -> StatusCounts {
        self.documents
            .iter()
            .fold(StatusCounts::default(), |mut counts, doc| {
                counts.total += 1;
                match doc.status {
                    DocumentStatus::Draft => counts.draft += 1,
                    DocumentStatus::Completed => counts.completed += 1,
                    DocumentStatus::Archived => counts.archived += 1,
                }
                counts
            })
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    fn allocate_id(&mut self) -> DocumentId {
        loop {
            let id = self.ids.next_id();
            if self.issued.insert(id.clone()) {
                return id;
            }
        }
    }
}

fn required(value: &str, field: Field) -> Result<&str, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(ValidationError::EmptyField(field))
    } else {
        Ok(trimmed)
    }
}
