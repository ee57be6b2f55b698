//! Visual effects driven by player effect events.

pub mod dust;

pub use dust::{DustEmitter, DustParticle, DustPlugin};
