//! Display text for the clinic locale (ru-RU)
//!
//! Domain enumerations never carry their own text; everything the user reads
//! is looked up here.

use super::document::{DocumentStatus, DocumentType};

pub const TITLE: &str = "Медицинская документация";
pub const DEFAULT_CLINIC: &str = "Стоматологическая клиника";
pub const LIST_TITLE: &str = "Документы";
pub const NO_DOCUMENTS: &str = "Документы не найдены";

pub const TOTAL: &str = "Всего документов";
pub const COMPLETED: &str = "Завершенные";
pub const DRAFTS: &str = "Черновики";
pub const ARCHIVED: &str = "В архиве";

pub fn document_type(doc_type: DocumentType) -> &'static str {
    match doc_type {
        DocumentType::MedicalChart => "Медицинская карта",
        DocumentType::TreatmentConsent => "Согласие на лечение",
        DocumentType::TreatmentPlan => "План лечения",
        DocumentType::Referral => "Направление",
        DocumentType::Report => "Заключение",
    }
}

pub fn status(status: DocumentStatus) -> &'static str {
    match status {
        DocumentStatus::Draft => "Черновик",
        DocumentStatus::Completed => "Завершен",
        DocumentStatus::Archived => "Архив",
    }
}
