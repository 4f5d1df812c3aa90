mod config;
mod session;

use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use config::Config;
use diachron_core::TransitionTable;
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use session::{Session, write_table};

fn main() -> Result<()> {
	let config = Config::parse();

	env_logger::Builder::from_default_env()
		.filter_level(config.log_level.parse().unwrap_or(log::LevelFilter::Info))
		.init();

	// No model can be built without the corpus, stop before any interaction
	let (table, report) = TransitionTable::from_path(&config.corpus, config.alignment())
		.with_context(|| format!("Failed to load corpus {}", config.corpus.display()))?;
	info!(
		"{} source component(s) learned from {} pair(s), {} malformed line(s) skipped",
		table.len(),
		report.pairs,
		report.skipped
	);

	if config.dump_table {
		write_table(&table, io::stdout().lock())?;
	}

	let samples = usize::from(config.samples);
	match config.seed {
		Some(seed) => Session::new(&table, StdRng::seed_from_u64(seed), samples).run(io::stdin().lock(), io::stdout().lock())?,
		None => Session::new(&table, rand::rng(), samples).run(io::stdin().lock(), io::stdout().lock())?,
	}

	Ok(())
}
