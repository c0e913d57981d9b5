//! Demo collection loaded at session start

use crate::domain::document::{DocumentId, DocumentRecord, DocumentStatus, DocumentType};
use chrono::NaiveDate;

/// The sample documents a fresh session starts with, in display order.
///
/// Dates are literals; a record with an impossible date is left out, which
/// `test_seed_has_four_documents` and `test_seed_ids_and_dates` catch.
pub fn seed_documents() -> Vec<DocumentRecord> {
    [
        (
            "1",
            DocumentType::MedicalChart,
            "Иванов Иван Иванович",
            (2024, 11, 20),
            DocumentStatus::Completed,
            "Петров А.В.",
        ),
        (
            "2",
            DocumentType::TreatmentConsent,
            "Сидорова Мария Петровна",
            (2024, 11, 22),
            DocumentStatus::Completed,
            "Смирнова Е.И.",
        ),
        (
            "3",
            DocumentType::TreatmentPlan,
            "Козлов Петр Сергеевич",
            (2024, 11, 25),
            DocumentStatus::Draft,
            "Петров А.В.",
        ),
        (
            "4",
            DocumentType::MedicalChart,
            "Николаева Анна Дмитриевна",
            (2024, 11, 26),
            DocumentStatus::Completed,
            "Смирнова Е.И.",
        ),
    ]
    .into_iter()
    .filter_map(|(id, doc_type, patient, (y, m, d), status, doctor)| {
        Some(DocumentRecord {
            id: DocumentId::new(id),
            doc_type,
            patient_name: patient.to_string(),
            date: NaiveDate::from_ymd_opt(y, m, d)?,
            status,
            doctor: doctor.to_string(),
        })
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn test_seed_has_four_documents() {
        let seed = seed_documents();
        assert_eq!(seed.len(), 4);
        assert_eq!(seed[0].patient_name, "Иванов Иван Иванович");
        assert_eq!(seed[3].date, NaiveDate::from_ymd_opt(2024, 11, 26).unwrap());
    }

    #[test]
    fn test_seed_ids_and_dates() {
        let seed = seed_documents();
        let ids: Vec<&str> = seed.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4"]);

        let days: Vec<u32> = seed.iter().map(|d| d.date.day()).collect();
        assert_eq!(days, vec![20, 22, 25, 26]);
    }

    #[test]
    fn test_seed_has_one_draft() {
        let drafts = seed_documents()
            .into_iter()
            .filter(|d| d.status == DocumentStatus::Draft)
            .count();
        assert_eq!(drafts, 1);
    }
}
