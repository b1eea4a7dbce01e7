//! Route table materialization.
//!
//! [`materialize`] turns a [`RouteTable`] into the ordered registrations the
//! [`Router`](crate::Router) matches against. It is a pure mapping and is
//! cheap enough to run on every render pass.

use crate::pattern::{MatchMode, PathPattern, PatternMatch};
use crate::table::RouteTable;
use navshell_core::{PageComponent, View};
use std::fmt;

/// A router registration derived from one route descriptor.
#[derive(Clone)]
pub struct RouteRegistration {
	index: usize,
	pattern: PathPattern,
	mode: MatchMode,
	thunk: PageComponent,
}

impl RouteRegistration {
	/// Creates a registration directly, without a table.
	pub fn new(index: usize, path: &str, mode: MatchMode, thunk: PageComponent) -> Self {
		Self {
			index,
			pattern: PathPattern::new(path),
			mode,
			thunk,
		}
	}

	/// Ordinal position of the source descriptor; used as the registration key.
	pub fn index(&self) -> usize {
		self.index
	}

	pub fn pattern(&self) -> &PathPattern {
		&self.pattern
	}

	pub fn path(&self) -> &str {
		self.pattern.as_str()
	}

	pub fn mode(&self) -> MatchMode {
		self.mode
	}

	/// Matches a location path under this registration's mode.
	pub fn matches(&self, path: &str) -> Option<PatternMatch> {
		self.pattern.matches(path, self.mode)
	}

	/// Invokes the render thunk.
	pub fn render(&self) -> View {
		self.thunk.render()
	}

	/// Returns the page unit the thunk invokes.
	pub fn component(&self) -> &PageComponent {
		&self.thunk
	}
}

impl PartialEq for RouteRegistration {
	fn eq(&self, other: &Self) -> bool {
		self.index == other.index
			&& self.pattern == other.pattern
			&& self.mode == other.mode
			&& self.thunk.ptr_eq(&other.thunk)
	}
}

impl fmt::Debug for RouteRegistration {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("RouteRegistration")
			.field("index", &self.index)
			.field("path", &self.pattern.as_str())
			.field("mode", &self.mode)
			.field("component", &self.thunk.name())
			.finish()
	}
}

/// Maps each descriptor of `table`, in order, to a registration.
///
/// Registration `i` matches exactly when descriptor `i` is exact and by
/// prefix otherwise. Its thunk shares the descriptor's component.
pub fn materialize(table: &RouteTable) -> Vec<RouteRegistration> {
	let registrations: Vec<RouteRegistration> = table
		.iter()
		.enumerate()
		.map(|(index, descriptor)| RouteRegistration {
			index,
			pattern: PathPattern::new(descriptor.path()),
			mode: MatchMode::from_exact(descriptor.is_exact()),
			thunk: descriptor.component().clone(),
		})
		.collect();

	tracing::debug!(count = registrations.len(), "materialized route table");
	registrations
}
