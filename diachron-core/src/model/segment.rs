/// Delimiter between the meaningful components of a form.
pub const COMPONENT_SEPARATOR: char = '-';

/// Iterator over the hyphen-delimited components of a form.
///
/// Components are peeled one at a time from the front: while the remainder
/// contains a hyphen, the part before the first hyphen is yielded. The last
/// remainder is yielded as-is.
///
/// # Notes
/// - Always yields at least one component, possibly empty (`""` yields `""`).
/// - Consecutive hyphens yield empty components (`"a--b"` yields `a`, `""`, `b`).
#[derive(Debug, Clone)]
pub struct Components<'a> {
	rest: Option<&'a str>,
}

impl<'a> Iterator for Components<'a> {
	type Item = &'a str;

	fn next(&mut self) -> Option<&'a str> {
		let rest = self.rest?;
		match rest.split_once(COMPONENT_SEPARATOR) {
			Some((head, tail)) => {
				self.rest = Some(tail);
				Some(head)
			}
			None => {
				self.rest = None;
				Some(rest)
			}
		}
	}
}

/// Returns an iterator over the components of `form`.
pub fn components(form: &str) -> Components<'_> {
	Components { rest: Some(form) }
}

/// Number of components `form` splits into.
pub fn count_components(form: &str) -> usize {
	form.matches(COMPONENT_SEPARATOR).count() + 1
}
