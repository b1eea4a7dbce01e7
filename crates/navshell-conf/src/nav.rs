//! Navigation config: a route table authored as TOML.
//!
//! ```toml
//! [router]
//! policy = "first-match"
//! history = "hash"
//! not_found = "not_found"
//!
//! [[routes]]
//! path = "/"
//! exact = true
//! page = "home"
//! label = "Home"
//!
//! [[routes]]
//! path = "/docs"
//! page = "docs"
//! label = "Docs"
//! ```
//!
//! Pages are referenced by name and resolved against a [`PageRegistry`].

use crate::registry::PageRegistry;
use navshell_router::{HrefStyle, MatchPolicy, RouteDescriptor, RouteTable, Router};
use serde::Deserialize;
use std::path::Path;

/// Error type for navigation config loading and resolution.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum ConfError {
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),

	#[error("TOML error: {0}")]
	Toml(#[from] toml::de::Error),

	#[error("Route {index}: path is empty")]
	EmptyPath { index: usize },

	#[error("Route {index}: path '{path}' must start with '/'")]
	RelativePath { index: usize, path: String },

	#[error("Route {index}: unknown page '{page}'")]
	UnknownPage { index: usize, page: String },

	#[error("Unknown not-found page '{0}'")]
	UnknownNotFoundPage(String),
}

/// Policy names as written in config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PolicySetting {
	#[default]
	FirstMatch,
	ExactFirst,
}

impl From<PolicySetting> for MatchPolicy {
	fn from(setting: PolicySetting) -> Self {
		match setting {
			PolicySetting::FirstMatch => MatchPolicy::FirstMatch,
			PolicySetting::ExactFirst => MatchPolicy::ExactFirst,
		}
	}
}

/// Where the router keeps the current location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HistoryMode {
	/// URL fragment (`#/path`); in-memory on native targets.
	#[default]
	Hash,
	/// In-memory only, path-style hrefs.
	Memory,
}

/// `[router]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RouterSettings {
	pub policy: PolicySetting,
	pub history: HistoryMode,
	/// Page rendered when no route matches.
	pub not_found: Option<String>,
}

/// One `[[routes]]` entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NavEntry {
	pub path: String,
	#[serde(default)]
	pub exact: bool,
	pub page: String,
	#[serde(default)]
	pub label: Option<String>,
}

/// A navigation config document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NavConfig {
	pub router: RouterSettings,
	pub routes: Vec<NavEntry>,
}

impl NavConfig {
	/// Parses a config from TOML text.
	pub fn from_toml_str(contents: &str) -> Result<Self, ConfError> {
		Ok(toml::from_str(contents)?)
	}

	/// Reads and parses a TOML config file.
	pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfError> {
		let path = path.as_ref();
		let contents = std::fs::read_to_string(path)?;
		let config = Self::from_toml_str(&contents)?;
		tracing::debug!(
			path = %path.display(),
			routes = config.routes.len(),
			"loaded navigation config"
		);
		Ok(config)
	}

	/// Resolves every entry against `registry`, preserving order.
	pub fn resolve(&self, registry: &PageRegistry) -> Result<RouteTable, ConfError> {
		self.routes
			.iter()
			.enumerate()
			.map(|(index, entry)| {
				if entry.path.is_empty() {
					return Err(ConfError::EmptyPath { index });
				}
				if !entry.path.starts_with('/') {
					return Err(ConfError::RelativePath {
						index,
						path: entry.path.clone(),
					});
				}
				let component = registry.get(&entry.page).ok_or_else(|| {
					ConfError::UnknownPage {
						index,
						page: entry.page.clone(),
					}
				})?;

				let mut descriptor =
					RouteDescriptor::new(entry.path.clone(), component.clone()).with_exact(entry.exact);
				if let Some(label) = &entry.label {
					descriptor = descriptor.with_label(label.clone());
				}
				Ok(descriptor)
			})
			.collect::<Result<Vec<_>, _>>()
			.map(RouteTable::from)
	}

	/// Builds a router for `table` configured by the `[router]` section.
	pub fn build_router(
		&self,
		table: &RouteTable,
		registry: &PageRegistry,
	) -> Result<Router, ConfError> {
		let mut router = Router::from_table(table).with_policy(self.router.policy.into());

		if let Some(name) = &self.router.not_found {
			let page = registry
				.get(name)
				.ok_or_else(|| ConfError::UnknownNotFoundPage(name.clone()))?;
			router = router.not_found(page.clone());
		}

		router = match self.router.history {
			HistoryMode::Hash => {
				#[cfg(target_arch = "wasm32")]
				let router = router.with_history(navshell_router::HashHistory);
				router.with_href_style(HrefStyle::Hash)
			}
			HistoryMode::Memory => router.with_href_style(HrefStyle::Path),
		};

		Ok(router)
	}
}
