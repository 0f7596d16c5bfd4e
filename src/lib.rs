//! # Univers
//!
//! Question answering over Business Objects universe exports.
//!
//! ## Architecture
//!
//! A universe export is an untrusted JSON document describing classes of
//! business objects, physical tables, and joins. Questions are answered by a
//! strictly sequential pipeline:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │              Raw JSON (untrusted export)                 │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [sanitize]
//! ┌─────────────────────────────────────────────────────────┐
//! │              Universe (well-formed model)                │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [search] ◄── question tokens [text]
//! ┌─────────────────────────────────────────────────────────┐
//! │          Matches (ranked, per entity category)           │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [answer]
//! ┌─────────────────────────────────────────────────────────┐
//! │               Answer (one French sentence)               │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! Sanitization never fails: malformed entities are dropped and malformed
//! fields fall back to defaults, so any JSON value yields a usable model.

pub mod answer;
pub mod config;
pub mod model;
pub mod query;
pub mod sanitize;
pub mod search;
pub mod text;

#[cfg(feature = "ui")]
pub mod web;

/// Re-exports for convenient usage.
pub mod prelude {
    pub use crate::answer::{synthesize, FALLBACK_ANSWER};
    pub use crate::model::{BusinessObject, Class, Join, Metadata, Summary, Table, Universe};
    pub use crate::query::{answer_question, answer_question_with_limits, QueryOutcome};
    pub use crate::sanitize::{empty_universe, sanitize, sanitize_with_limits, Limits};
    pub use crate::search::{search, ClassMatch, JoinMatch, Matches, ObjectMatch, TableMatch};
    pub use crate::text::normalize;
}
