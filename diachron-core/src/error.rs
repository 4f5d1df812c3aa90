use std::error::Error;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Why a corpus line could not be turned into correspondence pairs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MalformedReason {
	/// The line holds a single form, there is no whitespace between source and target.
	MissingSeparator,
	/// Source and target forms do not split into the same number of components.
	ComponentMismatch { source: usize, target: usize },
}

impl fmt::Display for MalformedReason {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			MalformedReason::MissingSeparator => write!(f, "missing separator between source and target forms"),
			MalformedReason::ComponentMismatch { source, target } => write!(
				f,
				"source has {} component(s) but target has {}",
				source, target
			),
		}
	}
}

/// Errors raised while reading a corpus.
///
/// Only `Io` is fatal: without a readable corpus no model can be built.
/// `MalformedLine` is reported per line and the line is skipped.
#[derive(Debug)]
pub enum CorpusError {
	/// The corpus resource is missing or unreadable.
	Io { path: PathBuf, source: io::Error },
	/// A corpus line that does not follow `<source-form> <target-form>`.
	MalformedLine { line: usize, reason: MalformedReason },
}

impl fmt::Display for CorpusError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			CorpusError::Io { path, source } => write!(f, "cannot read corpus {}: {}", path.display(), source),
			CorpusError::MalformedLine { line, reason } => write!(f, "malformed corpus line {}: {}", line, reason),
		}
	}
}

impl Error for CorpusError {
	fn source(&self) -> Option<&(dyn Error + 'static)> {
		match self {
			CorpusError::Io { source, .. } => Some(source),
			CorpusError::MalformedLine { .. } => None,
		}
	}
}
