use std::collections::BTreeMap;
use std::path::Path;

use log::info;

use super::correspondence::{Alignment, ComponentCorrespondences, LoadReport};
use super::distribution::Distribution;
use crate::error::CorpusError;

/// Transition table from source components to target components.
///
/// The `TransitionTable` maps each source component seen in the corpus to
/// the `Distribution` of the target components it turned into.
///
/// # Responsibilities
/// - Reduce raw correspondences into normalized distributions
/// - Answer read-only lookups for the sampler
///
/// # Invariants
/// - Source components are unique and iterated in sorted order
/// - Every distribution is non-empty
/// - The table is never mutated once built
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TransitionTable {
	/// Mapping from a source component to its distribution
	distributions: BTreeMap<String, Distribution>,
}

impl TransitionTable {
	/// Builds the table from aggregated correspondences.
	///
	/// Every observed target of a source component gets
	/// `count / total observations` of that component.
	pub fn build(correspondences: &ComponentCorrespondences) -> Self {
		let distributions = correspondences
			.iter()
			.filter_map(|(source, targets)| {
				Distribution::from_observations(targets).map(|d| (source.to_owned(), d))
			})
			.collect();

		Self { distributions }
	}

	/// Aligns corpus lines and builds the table in one step.
	pub fn from_lines<I, S>(lines: I, alignment: Alignment) -> (Self, LoadReport)
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let (correspondences, report) = ComponentCorrespondences::from_lines(lines, alignment);
		(Self::build(&correspondences), report)
	}

	/// Loads a corpus file or directory and builds the table.
	///
	/// # Errors
	/// Returns `CorpusError::Io` if the corpus cannot be read.
	pub fn from_path<P: AsRef<Path>>(path: P, alignment: Alignment) -> Result<(Self, LoadReport), CorpusError> {
		let (correspondences, report) = ComponentCorrespondences::from_path(&path, alignment)?;
		let table = Self::build(&correspondences);
		info!(
			"Transition table built from {}: {} component(s), {} line(s) accepted, {} skipped",
			path.as_ref().display(),
			table.len(),
			report.accepted,
			report.skipped
		);
		Ok((table, report))
	}

	/// Distribution learned for `component`, if any.
	pub fn get(&self, component: &str) -> Option<&Distribution> {
		self.distributions.get(component)
	}

	pub fn contains(&self, component: &str) -> bool {
		self.distributions.contains_key(component)
	}

	/// Source components in sorted order.
	pub fn components(&self) -> impl Iterator<Item = &str> {
		self.distributions.keys().map(String::as_str)
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &Distribution)> {
		self.distributions.iter().map(|(k, v)| (k.as_str(), v))
	}

	/// Number of source components.
	pub fn len(&self) -> usize {
		self.distributions.len()
	}

	pub fn is_empty(&self) -> bool {
		self.distributions.is_empty()
	}
}
