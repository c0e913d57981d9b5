//! Infrastructure layer - Configuration, clock and id allocation

pub mod clock;
pub mod config;
pub mod ids;

pub use clock::{FixedClock, SystemClock};
pub use config::{Config, IdStrategy};
pub use ids::{CounterIds, UuidIds};
