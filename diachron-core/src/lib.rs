//! Component-level diachronic transformation library.
//!
//! This crate learns how hyphen-segmented source roots turn into target
//! forms, then samples plausible target words for roots it has never seen:
//! - Hyphen segmentation shared by training and sampling
//! - Corpus loading and component alignment
//! - Per-component transition probabilities
//! - Roulette-wheel sampling over a read-only transition table
//!
//! Only the high-level API is exposed publicly. Low-level helpers
//! are kept internal.

/// Corpus alignment, transition model and sampler.
pub mod model;

/// Errors raised while reading a corpus.
pub mod error;

/// I/O utilities (file loading, directory listing).
///
/// Not exposed
pub(crate) mod io;

pub use error::{CorpusError, MalformedReason};
pub use model::correspondence::{Alignment, ComponentCorrespondences, CorrespondencePair, LoadReport};
pub use model::distribution::Distribution;
pub use model::sampler::Sampler;
pub use model::transition_table::TransitionTable;
