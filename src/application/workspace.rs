//! Build a registry for one session

use crate::domain::{seed_documents, Clock, DocumentRegistry, IdGenerator};
use crate::error::Result;
use crate::infrastructure::{Config, CounterIds, IdStrategy, SystemClock, UuidIds};

/// Open a registry using the system clock
pub fn open_registry(config: &Config) -> Result<DocumentRegistry> {
    open_registry_with_clock(config, Box::new(SystemClock))
}

/// Open a registry seeded and configured per `config`
pub fn open_registry_with_clock(config: &Config, clock: Box<dyn Clock>) -> Result<DocumentRegistry> {
    let documents = if config.seed {
        seed_documents()
    } else {
        Vec::new()
    };

    let ids: Box<dyn IdGenerator> = match config.id_strategy {
        IdStrategy::Counter => Box::new(CounterIds::starting_after(&documents)),
        IdStrategy::Uuid => Box::new(UuidIds),
    };

    tracing::debug!(
        seeded = documents.len(),
        strategy = ?config.id_strategy,
        "opening document registry"
    );

    Ok(DocumentRegistry::with_documents(documents, clock, ids)?)
}
