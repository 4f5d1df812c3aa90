use std::path::PathBuf;

use clap::Parser;
use diachron_core::Alignment;

/// Configuration for the transformation server
#[derive(Debug, Clone, Parser)]
#[command(name = "diachron-server")]
#[command(about = "HTTP service sampling target words from an aligned corpus")]
pub struct Config {
	/// Corpus file, or directory of .txt corpus files
	#[arg(short, long, default_value = "./resources/words.txt")]
	pub corpus: PathBuf,

	/// Address to bind
	#[arg(long, default_value = "127.0.0.1")]
	pub host: String,

	/// Port to listen on
	#[arg(short, long, default_value = "5000")]
	pub port: u16,

	/// Align mismatched corpus lines in lockstep instead of skipping them
	#[arg(long)]
	pub lenient: bool,

	/// Log level (trace, debug, info, warn, error)
	#[arg(long, default_value = "info")]
	pub log_level: String,
}

impl Config {
	pub fn alignment(&self) -> Alignment {
		if self.lenient { Alignment::Lockstep } else { Alignment::Strict }
	}
}
