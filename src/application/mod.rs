//! Application layer - Use cases and orchestration

pub mod documents;
pub mod session;
pub mod workspace;

pub use documents::DocumentService;
pub use session::SessionCommand;
pub use workspace::{open_registry, open_registry_with_clock};
