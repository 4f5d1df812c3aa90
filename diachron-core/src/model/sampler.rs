use rand::Rng;

use super::segment::components;
use super::transition_table::TransitionTable;

/// Transforms source roots into target words using a `TransitionTable`.
///
/// # Responsibilities
/// - Segment a root exactly like corpus forms are segmented
/// - Draw one replacement per known component
/// - Keep unknown components unchanged
///
/// The sampler only borrows the table, any number of samplers can
/// share it.
#[derive(Clone, Copy, Debug)]
pub struct Sampler<'a> {
	table: &'a TransitionTable,
}

impl<'a> Sampler<'a> {
	pub fn new(table: &'a TransitionTable) -> Self {
		Self { table }
	}

	/// Transforms `root`, drawing uniform values from `rng`.
	pub fn transform<R: Rng>(&self, root: &str, rng: &mut R) -> String {
		self.transform_with(root, || rng.random::<f64>())
	}

	/// Transforms `root`, drawing uniform values in `[0, 1)` from `draw`.
	///
	/// # Behavior
	/// - Splits `root` on hyphens.
	/// - For a component known to the table, calls `draw` once and picks the
	///   matching target.
	/// - An unknown component is copied as-is and consumes no value.
	/// - Pieces are concatenated without separator.
	pub fn transform_with<F: FnMut() -> f64>(&self, root: &str, mut draw: F) -> String {
		let mut leaf = String::with_capacity(root.len());

		for component in components(root) {
			match self.table.get(component).and_then(|d| d.pick(draw())) {
				Some(target) => leaf.push_str(target),
				None => leaf.push_str(component),
			}
		}

		leaf
	}

	/// Draws `count` independent transformations of `root`.
	pub fn transform_many<R: Rng>(&self, root: &str, count: usize, rng: &mut R) -> Vec<String> {
		(0..count).map(|_| self.transform(root, &mut *rng)).collect()
	}
}
