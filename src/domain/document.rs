//! Document records and their closed enumerations

use chrono::NaiveDate;
use std::fmt;
use std::str::FromStr;

use super::labels;

/// Opaque document identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DocumentId(String);

impl DocumentId {
    pub fn new(id: impl Into<String>) -> Self {
        DocumentId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

/// Document categories offered when creating a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentType {
    MedicalChart,
    TreatmentConsent,
    TreatmentPlan,
    Referral,
    Report,
}

impl DocumentType {
    /// All types, in the order they are offered to the user
    pub const ALL: [DocumentType; 5] = [
        DocumentType::MedicalChart,
        DocumentType::TreatmentConsent,
        DocumentType::TreatmentPlan,
        DocumentType::Referral,
        DocumentType::Report,
    ];

    /// Stable machine-readable key
    pub fn key(&self) -> &'static str {
        match self {
            DocumentType::MedicalChart => "medical-chart",
            DocumentType::TreatmentConsent => "treatment-consent",
            DocumentType::TreatmentPlan => "treatment-plan",
            DocumentType::Referral => "referral",
            DocumentType::Report => "report",
        }
    }

    /// Display label in the clinic locale
    pub fn label(&self) -> &'static str {
        labels::document_type(*self)
    }
}

impl FromStr for DocumentType {
    type Err = String;

    /// Accepts either the key or the display label, ignoring case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        DocumentType::ALL
            .into_iter()
            .find(|t| t.key() == wanted || t.label().to_lowercase() == wanted)
            .ok_or_else(|| format!("Unknown document type: '{}'", s.trim()))
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// Lifecycle status of a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DocumentStatus {
    #[default]
    Draft,
    Completed,
    Archived,
}

impl DocumentStatus {
    pub fn label(&self) -> &'static str {
        labels::status(*self)
    }
}

/// One entry in the document registry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentRecord {
    pub id: DocumentId,
    pub doc_type: DocumentType,
    pub patient_name: String,
    pub date: NaiveDate,
    pub status: DocumentStatus,
    pub doctor: String,
}

impl DocumentRecord {
    /// Case-insensitive substring match on patient name or document type.
    /// `needle` must already be lowercased.
    pub(crate) fn matches_lowercase(&self, needle: &str) -> bool {
        self.patient_name.to_lowercase().contains(needle)
            || self.doc_type.label().to_lowercase().contains(needle)
            || self.doc_type.key().contains(needle)
    }
}
