//! Line-oriented session commands
//!
//! A session reads one command per line:
//!
//! ```text
//! list [QUERY]
//! stats
//! types
//! create TYPE | PATIENT | DOCTOR
//! help
//! quit
//! ```
//!
//! Blank lines and lines starting with `#` are skipped.

use crate::error::{DentdocError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    List { query: String },
    Stats,
    Types,
    Create {
        doc_type: String,
        patient_name: String,
        doctor: String,
    },
    Help,
    Quit,
}

impl SessionCommand {
    /// Parse one input line. Returns `Ok(None)` for blank and comment lines.
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match word.to_lowercase().as_str() {
            "list" | "search" => SessionCommand::List {
                query: rest.to_string(),
            },
            "stats" => SessionCommand::Stats,
            "types" => SessionCommand::Types,
            "create" => Self::parse_create(rest),
            "help" => SessionCommand::Help,
            "quit" | "exit" => SessionCommand::Quit,
            _ => return Err(DentdocError::UnknownCommand(word.to_string())),
        };

        Ok(Some(command))
    }

    // Missing parts become empty strings so the registry reports which field is blank.
    fn parse_create(rest: &str) -> Self {
        let mut parts = rest.splitn(3, '|').map(|part| part.trim().to_string());
        SessionCommand::Create {
            doc_type: parts.next().unwrap_or_default(),
            patient_name: parts.next().unwrap_or_default(),
            doctor: parts.next().unwrap_or_default(),
        }
    }
}

pub const HELP: &str = "Commands:
  list [QUERY]                     show documents, optionally filtered
  stats                            show document counts
  types                            show document types
  create TYPE | PATIENT | DOCTOR   create a draft document
  help                             show this help
  quit                             end the session";
