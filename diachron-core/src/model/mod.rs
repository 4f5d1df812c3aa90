//! Top-level module for the transformation model.
//!
//! Data flows through the submodules in order:
//! - Hyphen segmentation (`segment`)
//! - Corpus loading and alignment (`correspondence`)
//! - Per-component probabilities (`distribution`, `transition_table`)
//! - Sampling of novel roots (`sampler`)

/// Hyphen segmentation of source roots and corpus forms.
///
/// Shared by the corpus aligner and the sampler so both see
/// the same components for the same string.
pub mod segment;

/// Corpus loader and aligner.
///
/// Splits aligned corpus lines into component pairs and accumulates
/// every observed target per source component.
pub mod correspondence;

/// Normalized probability distribution over target components.
///
/// Supports roulette-wheel sampling in a fixed, deterministic order.
pub mod distribution;

/// Read-only table mapping source components to their distribution.
pub mod transition_table;

/// Stochastic transformation of novel roots.
pub mod sampler;
