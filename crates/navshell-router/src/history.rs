//! Locations and history backends.
//!
//! The router reads and writes the current location through a [`History`]
//! backend. [`MemoryHistory`] keeps an in-process entry stack and is used on
//! native targets and in tests. On `wasm32`, [`HashHistory`] stores the
//! location in the URL fragment (`#/docs/intro`), so every page is served
//! from the same document.

use crate::core::RouterError;
use std::fmt;

/// How a navigation changed the history stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationType {
	/// A new entry was pushed.
	Push,
	/// The current entry was replaced.
	Replace,
	/// Moved through existing entries (back/forward).
	Pop,
}

/// A parsed location: path, optional query and optional fragment.
///
/// The path is always absolute. An empty path becomes `/`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Location {
	path: String,
	query: Option<String>,
	fragment: Option<String>,
}

impl Default for Location {
	fn default() -> Self {
		Self {
			path: "/".to_string(),
			query: None,
			fragment: None,
		}
	}
}

impl Location {
	/// Parses `/path?query#fragment`.
	pub fn parse(href: &str) -> Self {
		let (rest, fragment) = match href.split_once('#') {
			Some((rest, fragment)) => (rest, Some(fragment.to_string())),
			None => (href, None),
		};
		let (path, query) = match rest.split_once('?') {
			Some((path, query)) => (path, Some(query.to_string())),
			None => (rest, None),
		};

		let path = if path.is_empty() {
			"/".to_string()
		} else if path.starts_with('/') {
			path.to_string()
		} else {
			format!("/{}", path)
		};

		Self {
			path,
			query: query.filter(|q| !q.is_empty()),
			fragment: fragment.filter(|f| !f.is_empty()),
		}
	}

	/// Parses a URL fragment as used by hash routing (`#/docs?x=1`).
	///
	/// An empty fragment, `#` or `#/` all yield `/`.
	pub fn from_hash(hash: &str) -> Self {
		Self::parse(hash.strip_prefix('#').unwrap_or(hash))
	}

	pub fn path(&self) -> &str {
		&self.path
	}

	pub fn query(&self) -> Option<&str> {
		self.query.as_deref()
	}

	pub fn fragment(&self) -> Option<&str> {
		self.fragment.as_deref()
	}

	/// Formats the location as a path-style href.
	pub fn href(&self) -> String {
		let mut href = self.path.clone();
		if let Some(query) = &self.query {
			href.push('?');
			href.push_str(query);
		}
		if let Some(fragment) = &self.fragment {
			href.push('#');
			href.push_str(fragment);
		}
		href
	}

	/// Formats the location as a URL fragment for hash routing.
	pub fn to_hash(&self) -> String {
		let mut hash = String::from("#");
		hash.push_str(&self.path);
		if let Some(query) = &self.query {
			hash.push('?');
			hash.push_str(query);
		}
		hash
	}
}

impl fmt::Display for Location {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.href())
	}
}

/// A history backend owning the current location.
pub trait History {
	/// Returns the current location.
	fn location(&self) -> Location;

	/// Pushes a new entry, discarding any forward entries.
	fn push(&mut self, location: &Location) -> Result<(), RouterError>;

	/// Replaces the current entry.
	fn replace(&mut self, location: &Location) -> Result<(), RouterError>;

	/// Moves one entry back.
	fn back(&mut self) -> Result<(), RouterError>;

	/// Moves one entry forward.
	fn forward(&mut self) -> Result<(), RouterError>;
}

/// In-process history stack.
#[derive(Debug, Clone)]
pub struct MemoryHistory {
	entries: Vec<Location>,
	index: usize,
}

impl Default for MemoryHistory {
	fn default() -> Self {
		Self::new(Location::default())
	}
}

impl MemoryHistory {
	/// Creates a history with a single entry.
	pub fn new(initial: Location) -> Self {
		Self {
			entries: vec![initial],
			index: 0,
		}
	}

	/// Creates a history starting at `href`.
	pub fn at(href: &str) -> Self {
		Self::new(Location::parse(href))
	}

	/// Returns the number of entries.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Always false: a memory history holds at least its initial entry.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Returns the index of the current entry.
	pub fn index(&self) -> usize {
		self.index
	}
}

impl History for MemoryHistory {
	fn location(&self) -> Location {
		self.entries[self.index].clone()
	}

	fn push(&mut self, location: &Location) -> Result<(), RouterError> {
		self.entries.truncate(self.index + 1);
		self.entries.push(location.clone());
		self.index = self.entries.len() - 1;
		Ok(())
	}

	fn replace(&mut self, location: &Location) -> Result<(), RouterError> {
		self.entries[self.index] = location.clone();
		Ok(())
	}

	fn back(&mut self) -> Result<(), RouterError> {
		if self.index == 0 {
			return Err(RouterError::NoHistory("back"));
		}
		self.index -= 1;
		Ok(())
	}

	fn forward(&mut self) -> Result<(), RouterError> {
		if self.index + 1 >= self.entries.len() {
			return Err(RouterError::NoHistory("forward"));
		}
		self.index += 1;
		Ok(())
	}
}

#[cfg(target_arch = "wasm32")]
pub use hash::HashHistory;

#[cfg(target_arch = "wasm32")]
mod hash {
	use super::{History, Location};
	use crate::core::RouterError;
	use wasm_bindgen::JsValue;

	/// History backed by `window.location.hash`.
	///
	/// Back/forward complete asynchronously in the browser; the new location
	/// is picked up on the following `hashchange` event.
	#[derive(Debug, Clone, Copy, Default)]
	pub struct HashHistory;

	fn js_err(err: JsValue) -> RouterError {
		RouterError::NavigationFailed(format!("{:?}", err))
	}

	fn window() -> Result<web_sys::Window, RouterError> {
		web_sys::window()
			.ok_or_else(|| RouterError::NavigationFailed("window not available".to_string()))
	}

	impl History for HashHistory {
		fn location(&self) -> Location {
			window()
				.ok()
				.and_then(|w| w.location().hash().ok())
				.map(|hash| Location::from_hash(&hash))
				.unwrap_or_default()
		}

		fn push(&mut self, location: &Location) -> Result<(), RouterError> {
			window()?
				.location()
				.set_hash(&location.to_hash())
				.map_err(js_err)
		}

		fn replace(&mut self, location: &Location) -> Result<(), RouterError> {
			let current = window()?.location();
			let pathname = current.pathname().map_err(js_err)?;
			let search = current.search().map_err(js_err)?;
			current
				.replace(&format!("{}{}{}", pathname, search, location.to_hash()))
				.map_err(js_err)
		}

		fn back(&mut self) -> Result<(), RouterError> {
			window()?.history().map_err(js_err)?.back().map_err(js_err)
		}

		fn forward(&mut self) -> Result<(), RouterError> {
			window()?
				.history()
				.map_err(js_err)?
				.forward()
				.map_err(js_err)
		}
	}
}
