//! # Plagscan probe sampling and lexical similarity
//!
//! This crate turns a word sequence into the bounded set of probe queries
//! that the matcher sends to the search provider, and provides the fast
//! lexical similarity used when two whole documents are compared directly.
//!
//! ## Contract
//!
//! - Consumes the word sequence produced by the `canonical` crate; it never
//!   normalizes or tokenizes raw text itself.
//! - Pure functions of `(words, config)`: no I/O, no network, no clocks.
//!
//! ## Probe sampling
//!
//! Windows of [`ProbeConfig::ngram_size`] words are taken at offsets
//! `0, step, 2 * step, ...` until either the document runs out or
//! [`ProbeConfig::max_queries`] probes exist. The cap bounds external call
//! volume no matter how long the document is.
//!
//! ## Lexical similarity
//!
//! [`dice_coefficient`] compares character bigram multisets, ignoring
//! whitespace.
//!
//! ## Example Usage
//!
//! ```
//! use perceptual::{probes_for, dice_coefficient, ProbeConfig};
//!
//! let words = vec!["the", "quick", "brown", "fox", "jumps", "over", "the", "lazy", "dog"];
//! let cfg = ProbeConfig::new().with_ngram_size(3).with_step(3);
//!
//! let probes = probes_for(&words, &cfg);
//! assert_eq!(probes.len(), 3);
//! assert_eq!(probes[1].text, "fox jumps over");
//!
//! assert_eq!(dice_coefficient("abc", "abc"), 1.0);
//! ```

pub mod config;
mod dice;
mod probes;

pub use crate::config::{PerceptualError, ProbeConfig};
pub use crate::dice::dice_coefficient;
pub use crate::probes::{generate_probes, probes_for, Probe};
