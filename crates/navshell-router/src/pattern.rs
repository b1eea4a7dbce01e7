//! Path pattern matching.
//!
//! A pattern is a `/`-separated list of literal segments and parameter
//! segments (`{id}` or `:id`). Matching is segment-wise; empty segments are
//! ignored on both sides, so a trailing slash never changes the result.
//! Segments are percent-decoded on both sides, so `/caf%C3%A9` (as a browser
//! reports it in the URL fragment) matches a `/café` pattern.

use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;

/// How a registration's pattern is compared against a location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchMode {
	/// The location must have exactly the pattern's segments.
	Exact,
	/// The location must start with the pattern's segments; any nested
	/// sub-location also matches.
	Prefix,
}

impl MatchMode {
	/// Maps a descriptor's `exact` flag to a mode.
	pub fn from_exact(exact: bool) -> Self {
		if exact { Self::Exact } else { Self::Prefix }
	}

	/// Returns true for [`MatchMode::Exact`].
	pub fn is_exact(self) -> bool {
		matches!(self, Self::Exact)
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
	Literal(String),
	Param(String),
}

/// Result of a successful pattern match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternMatch {
	/// Extracted named parameters.
	pub params: HashMap<String, String>,
	/// The portion of the location consumed by the pattern.
	pub matched_url: String,
	/// Whether the location had no segments beyond the pattern.
	pub is_exact: bool,
}

/// A compiled path pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPattern {
	raw: String,
	segments: Vec<Segment>,
}

impl PathPattern {
	/// Compiles a pattern.
	pub fn new(pattern: &str) -> Self {
		let segments = split_segments(pattern)
			.map(|s| {
				if let Some(name) = s.strip_prefix('{').and_then(|s| s.strip_suffix('}')) {
					Segment::Param(name.to_string())
				} else if let Some(name) = s.strip_prefix(':') {
					Segment::Param(name.to_string())
				} else {
					Segment::Literal(decode_segment(s).into_owned())
				}
			})
			.collect();

		Self {
			raw: pattern.to_string(),
			segments,
		}
	}

	/// Returns the pattern as written.
	pub fn as_str(&self) -> &str {
		&self.raw
	}

	/// Returns the names of the parameter segments, in order.
	pub fn param_names(&self) -> Vec<&str> {
		self.segments
			.iter()
			.filter_map(|s| match s {
				Segment::Param(name) => Some(name.as_str()),
				Segment::Literal(_) => None,
			})
			.collect()
	}

	/// Matches `path` under `mode`.
	pub fn matches(&self, path: &str, mode: MatchMode) -> Option<PatternMatch> {
		let location: Vec<Cow<'_, str>> = split_segments(path).map(decode_segment).collect();

		if location.len() < self.segments.len() {
			return None;
		}
		let is_exact = location.len() == self.segments.len();
		if mode == MatchMode::Exact && !is_exact {
			return None;
		}

		let mut params = HashMap::new();
		for (segment, actual) in self.segments.iter().zip(&location) {
			match segment {
				Segment::Literal(expected) if expected == actual => {}
				Segment::Literal(_) => return None,
				Segment::Param(name) => {
					params.insert(name.clone(), actual.to_string());
				}
			}
		}

		let matched_url = format!("/{}", location[..self.segments.len()].join("/"));

		Some(PatternMatch {
			params,
			matched_url,
			is_exact,
		})
	}
}

impl fmt::Display for PathPattern {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.raw)
	}
}

fn split_segments(path: &str) -> impl Iterator<Item = &str> {
	path.split('/').filter(|s| !s.is_empty())
}

// Invalid UTF-8 after decoding keeps the raw segment.
fn decode_segment(segment: &str) -> Cow<'_, str> {
	if !segment.contains('%') {
		return Cow::Borrowed(segment);
	}
	urlencoding::decode(segment).unwrap_or(Cow::Borrowed(segment))
}
