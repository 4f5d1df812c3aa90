use std::collections::HashMap;

use serde::ser::{Serialize, Serializer};

/// Normalized probability distribution over target components.
///
/// A `Distribution` belongs to one source component and holds, for every
/// target component observed with it, the share of observations that target
/// accounts for.
///
/// Conceptually, this is a row of a transition matrix whose cells are
/// read in a fixed order by roulette-wheel sampling.
///
/// ## Invariants
/// - Targets are unique
/// - Each probability is in `(0, 1]` and they sum to 1.0 (up to rounding)
/// - Entries are ordered by first observation in the corpus
///
/// Because of that order, the same observations read in a different line
/// order give a different distribution: `pick` maps the same `r` to
/// another target. Reordering a corpus changes what a seeded run samples.
#[derive(Clone, Debug, PartialEq)]
pub struct Distribution {
	/// Targets with their probability, in first-observation order.
	/// Example: [("farmer", 0.5), ("eagle", 0.5)]
	entries: Vec<(String, f64)>,
}

impl Distribution {
	/// Builds a distribution by counting each distinct observation.
	///
	/// Each target gets `count / observations.len()`. Returns `None` when
	/// there is no observation to count.
	pub fn from_observations<S: AsRef<str>>(observations: &[S]) -> Option<Self> {
		if observations.is_empty() {
			return None;
		}

		let mut index: HashMap<&str, usize> = HashMap::new();
		let mut counts: Vec<(&str, usize)> = Vec::new();
		for observation in observations {
			let target = observation.as_ref();
			let i = *index.entry(target).or_insert_with(|| {
				counts.push((target, 0));
				counts.len() - 1
			});
			counts[i].1 += 1;
		}

		let total = observations.len() as f64;
		let entries = counts
			.into_iter()
			.map(|(target, count)| (target.to_owned(), count as f64 / total))
			.collect();

		Some(Self { entries })
	}

	/// Selects a target for a uniform value `r` in `[0, 1)`.
	///
	/// Walks the entries in order, accumulating probabilities, and returns
	/// the first target whose cumulative sum exceeds `r`. If rounding leaves
	/// `r` past the last cumulative sum, the last entry is returned.
	///
	/// Returns `None` only for an empty distribution.
	pub fn pick(&self, r: f64) -> Option<&str> {
		let mut cumulative = 0.0;
		for (target, probability) in &self.entries {
			cumulative += probability;
			if r < cumulative {
				return Some(target.as_str());
			}
		}

		// Residual gap left by rounding
		self.entries.last().map(|(target, _)| target.as_str())
	}

	/// Probability of `target`, `None` if it was never observed.
	pub fn probability(&self, target: &str) -> Option<f64> {
		self.entries
			.iter()
			.find(|(t, _)| t == target)
			.map(|(_, probability)| *probability)
	}

	/// Iterates over `(target, probability)` in sampling order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
		self.entries.iter().map(|(t, p)| (t.as_str(), *p))
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

/// Serialized as a map `target -> probability`, in sampling order.
impl Serialize for Distribution {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.collect_map(self.iter())
	}
}
