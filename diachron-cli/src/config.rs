use std::path::PathBuf;

use clap::Parser;
use diachron_core::Alignment;

/// Configuration of the interactive session
#[derive(Debug, Clone, Parser)]
#[command(name = "diachron")]
#[command(about = "Transform source roots into target words learned from an aligned corpus")]
pub struct Config {
	/// Corpus file, or directory of .txt corpus files
	#[arg(short, long, default_value = "./resources/words.txt")]
	pub corpus: PathBuf,

	/// Seed for the random number generator (reproducible sessions)
	#[arg(short, long)]
	pub seed: Option<u64>,

	/// Align mismatched corpus lines in lockstep instead of skipping them
	#[arg(long)]
	pub lenient: bool,

	/// Number of words sampled for each root
	#[arg(short = 'n', long, default_value = "1", value_parser = clap::value_parser!(u16).range(1..))]
	pub samples: u16,

	/// Print every learned distribution before the session starts
	#[arg(long)]
	pub dump_table: bool,

	/// Log level (trace, debug, info, warn, error)
	#[arg(long, default_value = "info")]
	pub log_level: String,
}

impl Config {
	pub fn alignment(&self) -> Alignment {
		if self.lenient { Alignment::Lockstep } else { Alignment::Strict }
	}
}
