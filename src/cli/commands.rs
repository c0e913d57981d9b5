//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "dentdoc")]
#[command(about = "Medical documents of a dental clinic", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (default: $DENTDOC_CONFIG, then built-in defaults)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Start with an empty document list instead of the demo documents
    #[arg(long, global = true)]
    pub no_seed: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List documents, optionally filtered by patient name or document type
    List {
        /// Case-insensitive search text
        query: Option<String>,
    },

    /// Show document counts by status
    Stats,

    /// Show the available document types
    Types,

    /// Create a draft document and print the resulting list
    Create {
        /// Document type key or label (e.g., treatment-plan, "План лечения")
        #[arg(short = 't', long = "type", value_name = "TYPE")]
        doc_type: String,

        /// Patient full name
        #[arg(short, long)]
        patient: String,

        /// Attending doctor
        #[arg(short, long)]
        doctor: String,
    },

    /// Read commands from stdin against a single in-memory session
    Session,
}
