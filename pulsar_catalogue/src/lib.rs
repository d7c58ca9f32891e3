//! # Pulsar Catalogue
//!
//! Domain types for one catalogue row per pulsar, plus the spin-down
//! physics derived from it. This crate knows nothing about prose; it
//! supplies clean, typed values to the `paragraph_engine` crate.
//!
//! ## Core Components
//!
//! - **record**: `FieldValue` sentinel handling and the `PulsarRecord` row type
//! - **physics**: Shklovski correction, characteristic age, surface field
//!
//! ## Design Philosophy
//!
//! - **Typed at the boundary**: the `*`/NaN "unknown" markers used by the
//!   catalogue collapse into a tagged variant during ingestion, so nothing
//!   downstream ever inspects raw strings again
//! - **Immutable**: records are plain data; nothing here mutates after load

pub mod physics;
pub mod record;

pub use physics::*;
pub use record::*;
