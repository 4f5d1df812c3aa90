use std::collections::BTreeMap;
use std::io;
use std::path::Path;

use log::{debug, info, warn};

use super::segment::{components, count_components, COMPONENT_SEPARATOR};
use crate::error::{CorpusError, MalformedReason};
use crate::io::{list_files, read_file};

/// Extension of corpus files picked up when loading a directory.
pub const CORPUS_EXTENSION: &str = "txt";

/// Policy applied to corpus lines whose source and target forms
/// do not have the same number of components.
///
/// # Variants
/// - `Strict`: the line is malformed and skipped.
/// - `Lockstep`: components are peeled in lockstep while the source has a
///   hyphen; whatever remains of the target (hyphens included) pairs with the
///   last source component. A target that runs out of hyphens first cannot be
///   aligned and the line is skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
	#[default]
	Strict,
	Lockstep,
}

/// One aligned (source component, target component) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CorrespondencePair<'a> {
	pub source: &'a str,
	pub target: &'a str,
}

/// Summary of a corpus load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
	/// Lines read, blank ones included.
	pub lines: usize,
	/// Lines that produced correspondence pairs.
	pub accepted: usize,
	/// Malformed lines that were skipped.
	pub skipped: usize,
	/// Correspondence pairs recorded.
	pub pairs: usize,
}

impl LoadReport {
	/// Adds the counters of `other` to this report.
	pub fn merge(&mut self, other: &Self) {
		self.lines += other.lines;
		self.accepted += other.accepted;
		self.skipped += other.skipped;
		self.pairs += other.pairs;
	}
}

/// Splits a corpus line into its source and target forms.
///
/// The line is trimmed, then cut at its first whitespace run. Anything after
/// that run, further spaces included, belongs to the target form.
///
/// Returns `Ok(None)` for a blank line.
pub fn split_line(line: &str) -> Result<Option<(&str, &str)>, MalformedReason> {
	let line = line.trim();
	if line.is_empty() {
		return Ok(None);
	}
	match line.split_once(char::is_whitespace) {
		Some((source, target)) => Ok(Some((source, target.trim_start()))),
		None => Err(MalformedReason::MissingSeparator),
	}
}

/// Aligns the components of a source form with those of a target form.
///
/// # Errors
/// Returns `ComponentMismatch` when the forms cannot be aligned under `alignment`.
pub fn align<'a>(
	source_form: &'a str,
	target_form: &'a str,
	alignment: Alignment,
) -> Result<Vec<CorrespondencePair<'a>>, MalformedReason> {
	let mismatch = || MalformedReason::ComponentMismatch {
		source: count_components(source_form),
		target: count_components(target_form),
	};

	match alignment {
		Alignment::Strict => {
			if count_components(source_form) != count_components(target_form) {
				return Err(mismatch());
			}
			Ok(components(source_form)
				.zip(components(target_form))
				.map(|(source, target)| CorrespondencePair { source, target })
				.collect())
		}
		Alignment::Lockstep => {
			let mut pairs = Vec::with_capacity(count_components(source_form));
			let mut source_rest = source_form;
			let mut target_rest = target_form;

			while let Some((source, source_tail)) = source_rest.split_once(COMPONENT_SEPARATOR) {
				let (target, target_tail) = target_rest
					.split_once(COMPONENT_SEPARATOR)
					.ok_or_else(mismatch)?;
				pairs.push(CorrespondencePair { source, target });
				source_rest = source_tail;
				target_rest = target_tail;
			}

			// Last component, the target keeps any hyphen left
			pairs.push(CorrespondencePair { source: source_rest, target: target_rest });
			Ok(pairs)
		}
	}
}

/// Every target component observed for each source component.
///
/// # Invariants
/// - Each key has at least one observation
/// - Duplicated observations are kept, they carry the counts
/// - Observations keep their corpus order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComponentCorrespondences {
	observations: BTreeMap<String, Vec<String>>,
}

impl ComponentCorrespondences {
	pub fn new() -> Self {
		Self::default()
	}

	/// Records one observation of `pair.target` for `pair.source`.
	pub fn add_pair(&mut self, pair: CorrespondencePair<'_>) {
		self.observations
			.entry(pair.source.to_owned())
			.or_default()
			.push(pair.target.to_owned());
	}

	/// Aligns one corpus line and records its pairs.
	///
	/// Returns the number of pairs recorded, `0` for a blank line.
	/// A malformed line records nothing.
	pub fn add_line(&mut self, line: &str, alignment: Alignment) -> Result<usize, MalformedReason> {
		let Some((source_form, target_form)) = split_line(line)? else {
			return Ok(0);
		};
		let pairs = align(source_form, target_form, alignment)?;
		let count = pairs.len();
		for pair in pairs {
			self.add_pair(pair);
		}
		Ok(count)
	}

	/// Builds correspondences from corpus lines.
	///
	/// Malformed lines are logged and skipped, they never abort the load.
	pub fn from_lines<I, S>(lines: I, alignment: Alignment) -> (Self, LoadReport)
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let mut correspondences = Self::new();
		let mut report = LoadReport::default();

		for (index, line) in lines.into_iter().enumerate() {
			report.lines += 1;
			match correspondences.add_line(line.as_ref(), alignment) {
				Ok(0) => (),
				Ok(pairs) => {
					report.accepted += 1;
					report.pairs += pairs;
				}
				Err(reason) => {
					report.skipped += 1;
					warn!("{}", CorpusError::MalformedLine { line: index + 1, reason });
				}
			}
		}

		(correspondences, report)
	}

	/// Loads correspondences from a corpus file, or from every
	/// `.txt` file directly inside a directory.
	///
	/// # Errors
	/// Returns `CorpusError::Io` if the path cannot be read, or if a
	/// directory holds no corpus file.
	pub fn from_path<P: AsRef<Path>>(path: P, alignment: Alignment) -> Result<(Self, LoadReport), CorpusError> {
		let path = path.as_ref();
		let io_error = |source: io::Error| CorpusError::Io { path: path.to_path_buf(), source };

		if !path.is_dir() {
			let lines = read_file(path).map_err(io_error)?;
			let (correspondences, report) = Self::from_lines(lines, alignment);
			debug!("Loaded {}: {} pair(s) from {} line(s)", path.display(), report.pairs, report.lines);
			return Ok((correspondences, report));
		}

		let files = list_files(path, CORPUS_EXTENSION).map_err(io_error)?;
		if files.is_empty() {
			return Err(io_error(io::Error::new(
				io::ErrorKind::NotFound,
				format!("no .{} corpus file in directory", CORPUS_EXTENSION),
			)));
		}

		let file_count = files.len();
		let mut correspondences = Self::new();
		let mut report = LoadReport::default();
		for file in files {
			let (partial, partial_report) = Self::from_path(path.join(&file), alignment)?;
			correspondences.merge(&partial);
			report.merge(&partial_report);
		}
		info!("Loaded {} corpus file(s) from {}", file_count, path.display());
		Ok((correspondences, report))
	}

	/// Merges another set of correspondences into this one.
	///
	/// Observations of shared keys are appended after the existing ones.
	pub fn merge(&mut self, other: &Self) {
		for (source, targets) in &other.observations {
			self.observations
				.entry(source.clone())
				.or_default()
				.extend(targets.iter().cloned());
		}
	}

	/// Observed targets for `source`, in corpus order.
	pub fn get(&self, source: &str) -> Option<&[String]> {
		self.observations.get(source).map(Vec::as_slice)
	}

	/// Iterates over source components in sorted order with their observations.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
		self.observations.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
	}

	/// Number of distinct source components.
	pub fn len(&self) -> usize {
		self.observations.len()
	}

	pub fn is_empty(&self) -> bool {
		self.observations.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::fs;

	#[test]
	fn test_split_line() {
		assert_eq!(split_line("a-gricola a-farmer"), Ok(Some(("a-gricola", "a-farmer"))));
		assert_eq!(split_line("  a-gricola\t  a-farmer  "), Ok(Some(("a-gricola", "a-farmer"))));
		assert_eq!(split_line("terra-firma earth-solid ground"), Ok(Some(("terra-firma", "earth-solid ground"))));
		assert_eq!(split_line("   "), Ok(None));
		assert_eq!(split_line("aquila"), Err(MalformedReason::MissingSeparator));
	}

	#[test]
	fn test_strict_alignment() {
		let pairs = align("terra-firma", "earth-solid", Alignment::Strict).unwrap();
		assert_eq!(
			pairs,
			vec![
				CorrespondencePair { source: "terra", target: "earth" },
				CorrespondencePair { source: "firma", target: "solid" },
			]
		);

		assert_eq!(
			align("terra-firma", "earth-so-lid", Alignment::Strict),
			Err(MalformedReason::ComponentMismatch { source: 2, target: 3 })
		);
	}

	#[test]
	fn test_lockstep_keeps_extra_target_components() {
		let pairs = align("terra-firma", "earth-so-lid", Alignment::Lockstep).unwrap();
		assert_eq!(pairs[1], CorrespondencePair { source: "firma", target: "so-lid" });
	}

	#[test]
	fn test_lockstep_rejects_short_target() {
		assert_eq!(
			align("in-ter-ra", "on-earth", Alignment::Lockstep),
			Err(MalformedReason::ComponentMismatch { source: 3, target: 2 })
		);
	}

	#[test]
	fn test_observations_keep_duplicates() {
		let lines = ["a farmer", "a eagle", "a farmer", "terra-mare land-sea"];
		let (correspondences, report) = ComponentCorrespondences::from_lines(lines, Alignment::Strict);

		assert_eq!(correspondences.get("a").unwrap(), ["farmer", "eagle", "farmer"]);
		assert_eq!(correspondences.get("terra").unwrap(), ["land"]);
		assert_eq!(correspondences.len(), 3);
		assert_eq!(report, LoadReport { lines: 4, accepted: 4, skipped: 0, pairs: 5 });

		// Two-component lines pair position by position
		let (aligned, _) = ComponentCorrespondences::from_lines(["a-gricola a-farmer", "a-quila a-eagle"], Alignment::Strict);
		assert_eq!(aligned.get("a").unwrap(), ["a", "a"]);
		assert_eq!(aligned.get("gricola").unwrap(), ["farmer"]);
	}

	#[test]
	fn test_malformed_lines_are_skipped() {
		let lines = ["terra-firma earth-solid", "", "aquila", "in-ter-ra on-earth", "mare sea"];
		let (correspondences, report) = ComponentCorrespondences::from_lines(lines, Alignment::Strict);

		assert_eq!(report, LoadReport { lines: 5, accepted: 2, skipped: 2, pairs: 3 });
		assert!(correspondences.get("in").is_none());
		assert!(correspondences.get("aquila").is_none());
		assert_eq!(correspondences.get("mare").unwrap(), ["sea"]);
	}

	#[test]
	fn test_merge_appends_observations() {
		let (mut left, _) = ComponentCorrespondences::from_lines(["a farmer", "terra-mare land-sea"], Alignment::Strict);
		let (right, _) = ComponentCorrespondences::from_lines(["a eagle", "a farmer"], Alignment::Strict);
		left.merge(&right);

		assert_eq!(left.get("a").unwrap(), ["farmer", "eagle", "farmer"]);
		assert_eq!(left.get("mare").unwrap(), ["sea"]);
		assert_eq!(left.len(), 3);
	}

	#[test]
	fn test_from_path_reads_file_and_directory() {
		let dir = tempfile::tempdir().unwrap();
		fs::write(dir.path().join("a.txt"), "a farmer\n").unwrap();
		fs::write(dir.path().join("b.txt"), "a eagle\nbroken\n").unwrap();
		fs::write(dir.path().join("ignored.csv"), "a sea\n").unwrap();

		let (single, report) = ComponentCorrespondences::from_path(dir.path().join("a.txt"), Alignment::Strict).unwrap();
		assert_eq!(single.get("a").unwrap(), ["farmer"]);
		assert_eq!(report.pairs, 1);

		let (all, report) = ComponentCorrespondences::from_path(dir.path(), Alignment::Strict).unwrap();
		assert_eq!(all.get("a").unwrap(), ["farmer", "eagle"]);
		assert_eq!(report, LoadReport { lines: 3, accepted: 2, skipped: 1, pairs: 2 });
	}

	#[test]
	fn test_from_path_missing_resource_is_fatal() {
		let dir = tempfile::tempdir().unwrap();
		let missing = ComponentCorrespondences::from_path(dir.path().join("words.txt"), Alignment::Strict);
		assert!(matches!(missing, Err(CorpusError::Io { .. })));

		let empty = ComponentCorrespondences::from_path(dir.path(), Alignment::Strict);
		assert!(matches!(empty, Err(CorpusError::Io { .. })));
	}
}
