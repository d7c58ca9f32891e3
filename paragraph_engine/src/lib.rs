//! # Paragraph Engine
//!
//! Turns one catalogue record per pulsar into a descriptive paragraph.
//! Numeric quantities are classified through ordered tables of half-open
//! value ranges ("gates"), each carrying an adjectival phrase and a
//! unit/formatting policy; bespoke renderers handle the fields that are
//! not simple numbers; a composer stitches the per-field fragments into
//! one narrative and repairs known grammatical artifacts.
//!
//! ## Core Components
//!
//! - **gates**: gate tables, value classification, numeric formatting
//! - **renderers**: hemisphere, associations, surveys, distance overrides
//! - **composer**: slot ordering, subject selection, grammar patch table
//!
//! ## Design Philosophy
//!
//! - **Tables are configuration**: every gate table, the survey
//!   catalogue, and the association lexicon are built once at startup
//!   and never mutated; all of them are serde types, overridable from
//!   TOML or JSON without touching engine logic
//! - **Absence is not an error**: an unknown field renders as an empty
//!   slot, never a failure; the one hard error is a survey code missing
//!   from the (exhaustive) survey catalogue

pub mod composer;
pub mod gates;
pub mod renderers;

pub use composer::*;
pub use gates::*;
pub use renderers::*;

use thiserror::Error;

/// Errors surfaced while composing a paragraph.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParagraphError {
    /// The survey catalogue is meant to be exhaustive for valid
    /// catalogue codes, so a miss is a data-integrity bug rather than
    /// a normal input state.
    #[error("unknown survey code `{code}`")]
    UnknownSurveyCode { code: String },
}
