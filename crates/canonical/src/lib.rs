//! Plagscan canonical text layer.
//!
//! Turns raw document text into the word sequence every later stage works
//! on. Downstream crates (probe generation, matching, compare) rely on this
//! for a stable view of the input.
//!
//! ## What we do
//!
//! - Whitespace normalization (every run collapses to a single space, edges trimmed)
//! - Word tokenization over the normalized text
//! - Character-bounded prefixes so callers can cap work on huge inputs
//!
//! ## What we don't do
//!
//! No case folding, no Unicode normalization, no punctuation stripping.
//! Probes are sent to the search provider verbatim and the exact matcher does
//! its own case-insensitive comparison.
//!
//! ## Pure function guarantee
//!
//! No I/O, no clock calls, no locale dependence. Same text in, same words out.

mod token;
mod whitespace;

pub use crate::token::{prefix_chars, tokenize};
pub use crate::whitespace::normalize;
