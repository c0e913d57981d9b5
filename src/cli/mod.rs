//! CLI layer - Command-line interface

pub mod commands;
pub mod output;

pub use commands::{Cli, Commands};
pub use output::{
    format_counts, format_document, format_document_list, format_header, format_type_list,
};
