//! Output formatting utilities

use crate::domain::{labels, DocumentRecord, DocumentType, StatusCounts};

/// Page title and clinic subtitle
pub fn format_header(clinic: &str) -> String {
    format!("{}\n{}\n", labels::TITLE, clinic)
}

/// Format one document as a single line.
/// `date_format` must be a valid chrono format string.
pub fn format_document(doc: &DocumentRecord, date_format: &str) -> String {
    format!(
        "{:>4}  {}  [{}]  {} · {} · {}",
        doc.id,
        doc.patient_name,
        doc.status.label(),
        doc.doc_type.label(),
        doc.doctor,
        doc.date.format(date_format)
    )
}

/// Format a list of documents for display
pub fn format_document_list(docs: &[&DocumentRecord], date_format: &str) -> String {
    if docs.is_empty() {
        return labels::NO_DOCUMENTS.to_string();
    }

    let mut output = String::new();
    for doc in docs {
        output.push_str(&format_document(doc, date_format));
        output.push('\n');
    }
    output
}

/// Format the per-status counters
pub fn format_counts(counts: &StatusCounts) -> String {
    let rows = [
        (labels::TOTAL, counts.total),
        (labels::COMPLETED, counts.completed),
        (labels::DRAFTS, counts.draft),
        (labels::ARCHIVED, counts.archived),
    ];

    let mut output = String::new();
    for (label, count) in rows {
        output.push_str(&format!("{:<18}{}\n", label, count));
    }
    output
}

/// Format the document type catalogue
pub fn format_type_list() -> String {
    let mut output = String::new();
    for doc_type in DocumentType::ALL {
        output.push_str(&format!("{:<19}{}\n", doc_type.key(), doc_type.label()));
    }
    output
}
