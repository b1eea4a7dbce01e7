//! Named page components.

use navshell_core::PageComponent;
use std::collections::HashMap;

/// Maps page names used in a navigation config to page components.
#[derive(Debug, Clone, Default)]
pub struct PageRegistry {
	pages: HashMap<String, PageComponent>,
}

impl PageRegistry {
	pub fn new() -> Self {
		Self::default()
	}

	/// Registers `component` under `name`, replacing any previous entry.
	pub fn register(mut self, name: impl Into<String>, component: impl Into<PageComponent>) -> Self {
		let name = name.into();
		if self.pages.insert(name.clone(), component.into()).is_some() {
			tracing::debug!(page = %name, "page registration replaced");
		}
		self
	}

	/// Looks up a page by name.
	pub fn get(&self, name: &str) -> Option<&PageComponent> {
		self.pages.get(name)
	}

	pub fn contains(&self, name: &str) -> bool {
		self.pages.contains_key(name)
	}

	pub fn len(&self) -> usize {
		self.pages.len()
	}

	pub fn is_empty(&self) -> bool {
		self.pages.is_empty()
	}
}
