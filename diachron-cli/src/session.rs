use std::io::{self, BufRead, Write};

use diachron_core::{Sampler, TransitionTable};
use log::debug;
use rand::Rng;

/// Input ending the session, compared case-insensitively.
pub const EXIT_COMMAND: &str = "E";

/// Interactive session reading roots and printing transformed words.
///
/// The session owns its random source and borrows the table, it can be
/// driven by any `BufRead`/`Write` pair.
pub struct Session<'a, R: Rng> {
	sampler: Sampler<'a>,
	rng: R,
	samples: usize,
}

impl<'a, R: Rng> Session<'a, R> {
	pub fn new(table: &'a TransitionTable, rng: R, samples: usize) -> Self {
		Self { sampler: Sampler::new(table), rng, samples: samples.max(1) }
	}

	/// Runs the session until the exit command or the end of `input`.
	///
	/// A first line is read after the welcome message before any root is
	/// requested. Every read is checked against `EXIT_COMMAND` before it is
	/// treated as a root.
	pub fn run<I: BufRead, O: Write>(&mut self, mut input: I, mut output: O) -> io::Result<()> {
		writeln!(output, "Welcome! Press enter to begin. To exit, enter '{}'.", EXIT_COMMAND)?;
		output.flush()?;

		match read_command(&mut input)? {
			None => return Ok(()),
			Some(line) if is_exit(&line) => return Ok(()),
			Some(_) => (),
		}

		loop {
			writeln!(output, "Enter a source root, components separated by '-':")?;
			output.flush()?;

			let root = match read_command(&mut input)? {
				Some(line) if !is_exit(&line) => line,
				_ => break,
			};

			debug!("Transforming {:?}", root);
			for _ in 0..self.samples {
				writeln!(output, "Target word: {}", self.sampler.transform(&root, &mut self.rng))?;
			}
			writeln!(output)?;
		}

		Ok(())
	}
}

/// Reads one trimmed line, `None` at the end of input.
fn read_command<I: BufRead>(input: &mut I) -> io::Result<Option<String>> {
	let mut line = String::new();
	if input.read_line(&mut line)? == 0 {
		return Ok(None);
	}
	Ok(Some(line.trim().to_owned()))
}

fn is_exit(line: &str) -> bool {
	line.eq_ignore_ascii_case(EXIT_COMMAND)
}

/// Writes every learned distribution, one source component per line.
///
/// Example: `terra: earth 0.667, land 0.333`
pub fn write_table<O: Write>(table: &TransitionTable, mut output: O) -> io::Result<()> {
	for (source, distribution) in table.iter() {
		let row: Vec<String> = distribution
			.iter()
			.map(|(target, probability)| format!("{} {:.3}", target, probability))
			.collect();
		writeln!(output, "{}: {}", source, row.join(", "))?;
	}
	Ok(())
}
