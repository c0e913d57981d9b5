//! dentdoc - Dental clinic document registry
//!
//! Keeps an in-memory list of medical documents for one session, with
//! text search, draft creation and per-status counts.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use domain::DocumentRegistry;
pub use error::{DentdocError, ValidationError};
