//! Error types for dentdoc

use crate::domain::DocumentId;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Required input fields of a new document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    DocumentType,
    PatientName,
    Doctor,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::DocumentType => "Document type",
            Field::PatientName => "Patient name",
            Field::Doctor => "Doctor",
        };
        f.write_str(name)
    }
}

/// Rejected input to the document registry
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} must not be empty")]
    EmptyField(Field),

    #[error("Unknown document type: '{0}'")]
    UnknownDocumentType(String),

    #[error("Duplicate document id: {0}")]
    DuplicateId(DocumentId),
}

/// Main error type for dentdoc application
#[derive(Debug, Error)]
pub enum DentdocError {
    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationError),

    #[error("Config file not found: {0}")]
    ConfigNotFound(PathBuf),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DentdocError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            DentdocError::Validation(_) => 2,
            DentdocError::ConfigNotFound(_) | DentdocError::Config(_) => 3,
            DentdocError::UnknownCommand(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            DentdocError::Validation(ValidationError::EmptyField(field)) => {
                format!(
                    "{} must not be empty\n\n\
                    Suggestions:\n\
                    • Provide --type, --patient and --doctor\n\
                    • Quote values that contain spaces (e.g., --patient \"Иванов Иван Иванович\")",
                    field
                )
            }
            DentdocError::Validation(ValidationError::UnknownDocumentType(value)) => {
                format!(
                    "Unknown document type: '{}'\n\n\
                    Valid types:\n\
                    • medical-chart, treatment-consent, treatment-plan, referral, report\n\
                    • or their labels, e.g. \"Медицинская карта\"\n\
                    Run 'dentdoc types' to see the full list",
                    value
                )
            }
            DentdocError::ConfigNotFound(path) => {
                format!(
                    "Config file not found: {}\n\n\
                    Suggestions:\n\
                    • Check the path passed to --config\n\
                    • Unset DENTDOC_CONFIG to use the built-in defaults",
                    path.display()
                )
            }
            DentdocError::UnknownCommand(cmd) => {
                format!(
                    "Unknown command: '{}'\n\n\
                    Valid commands: list [QUERY], stats, types, create TYPE | PATIENT | DOCTOR, help, quit",
                    cmd
                )
            }
            DentdocError::Config(msg) if msg.contains("id strategy") => {
                format!("{}\n\nValid strategies: counter, uuid", msg)
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using DentdocError
pub type Result<T> = std::result::Result<T, DentdocError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_exit_code() {
        let err = DentdocError::from(ValidationError::EmptyField(Field::Doctor));
        assert_eq!(err.exit_code(), 2);
        assert_eq!(err.to_string(), "Invalid input: Doctor must not be empty");
    }

    #[test]
    fn test_empty_field_suggestions() {
        let err = DentdocError::from(ValidationError::EmptyField(Field::PatientName));
        let msg = err.display_with_suggestions();
        assert!(msg.starts_with("Patient name must not be empty"));
        assert!(msg.contains("--patient"));
    }

    #[test]
    fn test_unknown_type_suggestions() {
        let err = DentdocError::from(ValidationError::UnknownDocumentType("xray".to_string()));
        let msg = err.display_with_suggestions();
        assert!(msg.contains("'xray'"));
        assert!(msg.contains("treatment-plan"));
        assert!(msg.contains("dentdoc types"));
    }

    #[test]
    fn test_config_not_found_suggestions() {
        let err = DentdocError::ConfigNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.exit_code(), 3);
        let msg = err.display_with_suggestions();
        assert!(msg.contains("/tmp/missing.toml"));
        assert!(msg.contains("DENTDOC_CONFIG"));
    }

    #[test]
    fn test_unknown_command_suggestions() {
        let err = DentdocError::UnknownCommand("delete".to_string());
        assert_eq!(err.exit_code(), 4);
        assert!(err.display_with_suggestions().contains("Valid commands"));
    }

    #[test]
    fn test_id_strategy_suggestions() {
        let err = DentdocError::Config("Invalid id strategy: 'random'".to_string());
        assert!(err.display_with_suggestions().contains("counter, uuid"));
    }

    #[test]
    fn test_other_errors_fallback() {
        let err = DentdocError::Config("bad date format".to_string());
        assert_eq!(
            err.display_with_suggestions(),
            "Configuration error: bad date format"
        );
    }
}
