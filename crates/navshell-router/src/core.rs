//! Core Router Implementation.
//!
//! The router owns the current location (a [`Signal`] fed by a [`History`]
//! backend), holds the registrations produced by
//! [`materialize`](crate::materialize()), and resolves which registration
//! renders the body for a location.

use crate::history::{History, Location, MemoryHistory, NavigationType};
use crate::materialize::{RouteRegistration, materialize};
use crate::pattern::{MatchMode, PatternMatch};
use crate::table::RouteTable;
use navshell_core::{PageComponent, Signal, SubscriptionId, View};
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;

/// Error type for router operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouterError {
	/// No registration matches the path.
	#[error("Route not found: {0}")]
	NotFound(String),
	/// Navigation target is not an absolute path.
	#[error("Invalid path: {0} (navigation targets must start with '/')")]
	InvalidPath(String),
	/// No history entry in the requested direction.
	#[error("No history entry to go {0}")]
	NoHistory(&'static str),
	/// The history backend rejected the navigation.
	#[error("Navigation failed: {0}")]
	NavigationFailed(String),
}

/// Policy used when several registrations match one location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchPolicy {
	/// The first matching registration in registration order.
	#[default]
	FirstMatch,
	/// The first matching exact registration; otherwise the first matching
	/// prefix registration.
	ExactFirst,
}

/// How hrefs for in-app links are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HrefStyle {
	/// `#/path`, for hash routing.
	#[default]
	Hash,
	/// `/path`.
	Path,
}

impl HrefStyle {
	/// Formats `path` as an href.
	pub fn href(self, path: &str) -> String {
		match self {
			Self::Hash => format!("#{}", path),
			Self::Path => path.to_string(),
		}
	}

	/// Recovers the in-app path from an href written by [`HrefStyle::href`].
	///
	/// Returns `None` for hrefs that leave the application.
	pub fn path_of(self, href: &str) -> Option<&str> {
		let path = match self {
			Self::Hash => href.strip_prefix('#')?,
			Self::Path => href,
		};
		path.starts_with('/').then_some(path)
	}
}

/// A matched registration with extracted parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
	/// Key of the matched registration ([`RouteRegistration::index`]).
	pub index: usize,
	/// The registration's matching mode.
	pub mode: MatchMode,
	/// Extracted path parameters.
	pub params: HashMap<String, String>,
	/// Portion of the location consumed by the pattern.
	pub matched_url: String,
	/// Whether the location equals the pattern (no nested segments).
	pub is_exact: bool,
}

/// The client-side router.
pub struct Router {
	registrations: Vec<RouteRegistration>,
	policy: MatchPolicy,
	href_style: HrefStyle,
	history: RefCell<Box<dyn History>>,
	location: Signal<Location>,
	not_found: Option<PageComponent>,
}

impl fmt::Debug for Router {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Router")
			.field("routes_count", &self.registrations.len())
			.field("policy", &self.policy)
			.field("href_style", &self.href_style)
			.field("location", &self.location.get())
			.field("has_not_found", &self.not_found.is_some())
			.finish()
	}
}

impl Default for Router {
	fn default() -> Self {
		Self::new()
	}
}

impl Router {
	/// Creates a router with no registrations over an in-memory history at `/`.
	pub fn new() -> Self {
		let history = MemoryHistory::default();
		let initial = history.location();

		Self {
			registrations: Vec::new(),
			policy: MatchPolicy::default(),
			href_style: HrefStyle::default(),
			history: RefCell::new(Box::new(history)),
			location: Signal::new(initial),
			not_found: None,
		}
	}

	/// Creates a router registering the materialized `table`.
	pub fn from_table(table: &RouteTable) -> Self {
		Self::new().with_registrations(materialize(table))
	}

	/// Replaces the registrations.
	pub fn with_registrations(mut self, registrations: Vec<RouteRegistration>) -> Self {
		self.registrations = registrations;
		self
	}

	/// Appends one registration.
	pub fn register(mut self, registration: RouteRegistration) -> Self {
		self.registrations.push(registration);
		self
	}

	/// Sets the match policy.
	pub fn with_policy(mut self, policy: MatchPolicy) -> Self {
		self.policy = policy;
		self
	}

	/// Sets the href style used by [`Router::href`].
	pub fn with_href_style(mut self, href_style: HrefStyle) -> Self {
		self.href_style = href_style;
		self
	}

	/// Swaps the history backend and adopts its current location.
	pub fn with_history<H>(self, history: H) -> Self
	where
		H: History + 'static,
	{
		let location = history.location();
		*self.history.borrow_mut() = Box::new(history);
		self.location.set(location);
		self
	}

	/// Sets the page rendered when nothing matches.
	pub fn not_found(mut self, component: impl Into<PageComponent>) -> Self {
		self.not_found = Some(component.into());
		self
	}

	pub fn policy(&self) -> MatchPolicy {
		self.policy
	}

	pub fn href_style(&self) -> HrefStyle {
		self.href_style
	}

	pub fn registrations(&self) -> &[RouteRegistration] {
		&self.registrations
	}

	/// Returns the number of registrations.
	pub fn route_count(&self) -> usize {
		self.registrations.len()
	}

	/// Returns the current location signal.
	pub fn current_location(&self) -> &Signal<Location> {
		&self.location
	}

	/// Returns the current location path.
	pub fn current_path(&self) -> String {
		self.location.with(|l| l.path().to_string())
	}

	/// Runs `f` after every location change.
	///
	/// Callbacks run while the location is borrowed and must not navigate.
	pub fn on_navigate<F>(&self, f: F) -> SubscriptionId
	where
		F: Fn(&Location) + 'static,
	{
		self.location.subscribe(f)
	}

	/// Formats an in-app href for `path`.
	pub fn href(&self, path: &str) -> String {
		self.href_style.href(path)
	}

	/// Matches a path against the registrations per the match policy.
	pub fn match_path(&self, path: &str) -> Option<RouteMatch> {
		self.find(path).map(|(registration, m)| RouteMatch {
			index: registration.index(),
			mode: registration.mode(),
			params: m.params,
			matched_url: m.matched_url,
			is_exact: m.is_exact,
		})
	}

	fn find(&self, path: &str) -> Option<(&RouteRegistration, PatternMatch)> {
		let location = Location::parse(path);
		let path = location.path();

		let mut candidates = self
			.registrations
			.iter()
			.filter_map(|r| r.matches(path).map(|m| (r, m)));

		let found = match self.policy {
			MatchPolicy::FirstMatch => candidates.next(),
			MatchPolicy::ExactFirst => {
				let mut first_prefix = None;
				let mut exact = None;
				for (registration, m) in candidates {
					if registration.mode() == MatchMode::Exact {
						exact = Some((registration, m));
						break;
					}
					if first_prefix.is_none() {
						first_prefix = Some((registration, m));
					}
				}
				exact.or(first_prefix)
			}
		};

		tracing::trace!(
			path,
			matched = ?found.as_ref().map(|(r, _)| r.index()),
			"resolved location"
		);
		found
	}

	/// Like [`Router::match_path`], but reports a miss as an error.
	pub fn resolve(&self, path: &str) -> Result<RouteMatch, RouterError> {
		self.match_path(path)
			.ok_or_else(|| RouterError::NotFound(path.to_string()))
	}

	/// Returns true if the current location matches `path` under `mode`.
	pub fn is_active(&self, path: &str, mode: MatchMode) -> bool {
		let pattern = crate::pattern::PathPattern::new(path);
		self.location
			.with(|l| pattern.matches(l.path(), mode).is_some())
	}

	/// Navigates to a path, pushing a history entry.
	pub fn push(&self, path: &str) -> Result<(), RouterError> {
		self.navigate(path, NavigationType::Push)
	}

	/// Navigates to a path, replacing the current history entry.
	pub fn replace(&self, path: &str) -> Result<(), RouterError> {
		self.navigate(path, NavigationType::Replace)
	}

	/// Follows an in-app link href, pushing or replacing a history entry.
	///
	/// Used by the browser launcher for clicks on rendered [`Link`]s.
	///
	/// [`Link`]: crate::Link
	pub fn follow_href(&self, href: &str, replace: bool) -> Result<(), RouterError> {
		let path = self
			.href_style
			.path_of(href)
			.ok_or_else(|| RouterError::InvalidPath(href.to_string()))?;
		if replace {
			self.replace(path)
		} else {
			self.push(path)
		}
	}

	/// Moves one history entry back.
	pub fn back(&self) -> Result<(), RouterError> {
		self.history.borrow_mut().back()?;
		self.sync_with_history();
		Ok(())
	}

	/// Moves one history entry forward.
	pub fn forward(&self) -> Result<(), RouterError> {
		self.history.borrow_mut().forward()?;
		self.sync_with_history();
		Ok(())
	}

	/// Adopts the history backend's location if it differs from the current one.
	///
	/// Called after back/forward and by the browser launcher on `hashchange`.
	/// Returns true if the location changed.
	pub fn sync_with_history(&self) -> bool {
		let location = self.history.borrow().location();
		if self.location.with(|current| *current == location) {
			return false;
		}
		tracing::debug!(path = location.path(), nav = ?NavigationType::Pop, "location synced");
		self.location.set(location);
		true
	}

	fn navigate(&self, path: &str, nav_type: NavigationType) -> Result<(), RouterError> {
		if !path.starts_with('/') {
			return Err(RouterError::InvalidPath(path.to_string()));
		}
		let location = Location::parse(path);

		{
			let mut history = self.history.borrow_mut();
			match nav_type {
				NavigationType::Push => history.push(&location)?,
				NavigationType::Replace => history.replace(&location)?,
				NavigationType::Pop => {}
			}
		}

		let matched = self.match_path(location.path());
		tracing::debug!(
			path = location.path(),
			nav = ?nav_type,
			matched = ?matched.as_ref().map(|m| m.index),
			"navigating"
		);
		if matched.is_none() && self.not_found.is_none() {
			tracing::warn!(path = location.path(), "no route matches location");
		}

		self.location.set(location);
		Ok(())
	}

	/// Renders the body for `path`.
	pub fn render_path(&self, path: &str) -> View {
		match self.find(path) {
			Some((registration, _)) => registration.render(),
			None => self
				.not_found
				.as_ref()
				.map(PageComponent::render)
				.unwrap_or(View::Empty),
		}
	}

	/// Renders the body for the current location.
	pub fn render_current(&self) -> View {
		self.render_path(&self.current_path())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::table::RouteDescriptor;
	use std::cell::Cell;
	use std::rc::Rc;

	fn home_view() -> View {
		View::text("Home")
	}

	fn docs_view() -> View {
		View::text("Docs")
	}

	fn user_view() -> View {
		View::text("User")
	}

	fn not_found_view() -> View {
		View::text("404")
	}

	fn table() -> RouteTable {
		RouteTable::new()
			.route(RouteDescriptor::exact("/", home_view))
			.route(RouteDescriptor::new("/docs", docs_view))
			.route(RouteDescriptor::exact("/users/{id}", user_view))
	}

	#[test]
	fn test_router_new() {
		let router = Router::new();
		assert_eq!(router.route_count(), 0);
		assert_eq!(router.current_path(), "/");
	}

	#[test]
	fn test_from_table_keeps_order() {
		let router = Router::from_table(&table());
		let paths: Vec<&str> = router.registrations().iter().map(|r| r.path()).collect();
		assert_eq!(paths, vec!["/", "/docs", "/users/{id}"]);
	}

	#[test]
	fn test_match_exact_and_prefix() {
		let router = Router::from_table(&table());

		assert_eq!(router.match_path("/").map(|m| m.index), Some(0));
		assert_eq!(router.match_path("/docs/intro").map(|m| m.index), Some(1));
		assert!(router.match_path("/about").is_none());
	}

	#[test]
	fn test_match_params() {
		let router = Router::from_table(&table());
		let m = router.match_path("/users/42?tab=posts").unwrap();
		assert_eq!(m.index, 2);
		assert_eq!(m.params.get("id"), Some(&"42".to_string()));
		assert!(m.is_exact);
	}

	#[test]
	fn test_first_match_uses_registration_order() {
		let table = RouteTable::new()
			.route(RouteDescriptor::new("/docs", docs_view))
			.route(RouteDescriptor::exact("/docs/intro", home_view));
		let router = Router::from_table(&table);

		assert_eq!(router.match_path("/docs/intro").map(|m| m.index), Some(0));
	}

	#[test]
	fn test_exact_first_prefers_exact_registration() {
		let table = RouteTable::new()
			.route(RouteDescriptor::new("/docs", docs_view))
			.route(RouteDescriptor::exact("/docs/intro", home_view));
		let router = Router::from_table(&table).with_policy(MatchPolicy::ExactFirst);

		assert_eq!(router.match_path("/docs/intro").map(|m| m.index), Some(1));
		assert_eq!(router.match_path("/docs/other").map(|m| m.index), Some(0));
	}

	#[test]
	fn test_resolve_not_found() {
		let router = Router::from_table(&table());
		assert_eq!(
			router.resolve("/missing"),
			Err(RouterError::NotFound("/missing".to_string()))
		);
	}

	#[test]
	fn test_push_updates_location_and_render() {
		let router = Router::from_table(&table());
		assert_eq!(router.render_current().render_to_string(), "Home");

		router.push("/docs/intro").unwrap();
		assert_eq!(router.current_path(), "/docs/intro");
		assert_eq!(router.render_current().render_to_string(), "Docs");
	}

	#[test]
	fn test_push_rejects_relative_path() {
		let router = Router::new();
		assert_eq!(
			router.push("docs"),
			Err(RouterError::InvalidPath("docs".to_string()))
		);
		assert_eq!(router.current_path(), "/");
	}

	#[test]
	fn test_back_and_forward() {
		let router = Router::from_table(&table());
		router.push("/docs").unwrap();
		router.push("/users/1").unwrap();

		router.back().unwrap();
		assert_eq!(router.current_path(), "/docs");
		router.back().unwrap();
		assert_eq!(router.current_path(), "/");
		assert_eq!(router.back(), Err(RouterError::NoHistory("back")));

		router.forward().unwrap();
		assert_eq!(router.current_path(), "/docs");
	}

	#[test]
	fn test_replace_does_not_grow_history() {
		let router = Router::new();
		router.replace("/a").unwrap();
		assert_eq!(router.current_path(), "/a");
		assert_eq!(router.back(), Err(RouterError::NoHistory("back")));
	}

	#[test]
	fn test_with_history_adopts_location() {
		let router = Router::from_table(&table()).with_history(MemoryHistory::at("/docs/api"));
		assert_eq!(router.current_path(), "/docs/api");
		assert_eq!(router.render_current().render_to_string(), "Docs");
	}

	#[test]
	fn test_on_navigate_fires() {
		let router = Router::new();
		let hits = Rc::new(Cell::new(0));
		let counter = Rc::clone(&hits);
		router.on_navigate(move |_| counter.set(counter.get() + 1));

		router.push("/a").unwrap();
		router.push("/b").unwrap();
		router.back().unwrap();

		assert_eq!(hits.get(), 3);
	}

	#[test]
	fn test_sync_is_noop_when_unchanged() {
		let router = Router::new();
		assert!(!router.sync_with_history());
	}

	#[test]
	fn test_not_found_and_empty_body() {
		let router = Router::from_table(&table());
		assert_eq!(router.render_path("/nope"), View::Empty);

		let router = router.not_found(not_found_view);
		assert_eq!(router.render_path("/nope").render_to_string(), "404");
	}

	#[test]
	fn test_is_active() {
		let router = Router::new();
		router.push("/docs/intro").unwrap();
		assert!(router.is_active("/docs", MatchMode::Prefix));
		assert!(!router.is_active("/docs", MatchMode::Exact));
		assert!(router.is_active("/docs/intro", MatchMode::Exact));
	}

	#[test]
	fn test_href_style() {
		assert_eq!(Router::new().href("/about"), "#/about");
		assert_eq!(
			Router::new().with_href_style(HrefStyle::Path).href("/about"),
			"/about"
		);
	}

	fn view(label: &'static str) -> PageComponent {
		PageComponent::from_fn(move || View::text(label))
	}

	#[test]
	fn test_register_with_unrelated_index_renders_that_registration() {
		let router = Router::new().register(RouteRegistration::new(
			3,
			"/",
			MatchMode::Exact,
			view("Home"),
		));

		assert_eq!(router.match_path("/").map(|m| m.index), Some(3));
		assert_eq!(router.render_path("/").render_to_string(), "Home");
	}

	#[test]
	fn test_register_after_from_table() {
		let table = RouteTable::new().route(RouteDescriptor::exact("/a", || View::text("A")));
		let router = Router::from_table(&table).register(RouteRegistration::new(
			0,
			"/b",
			MatchMode::Exact,
			view("B"),
		));

		assert_eq!(router.route_count(), 2);
		assert_eq!(router.render_path("/a").render_to_string(), "A");
		assert_eq!(router.render_path("/b").render_to_string(), "B");
	}

	#[test]
	fn test_with_registrations_out_of_order() {
		let router = Router::new()
			.with_registrations(vec![
				RouteRegistration::new(7, "/docs", MatchMode::Prefix, view("Docs")),
				RouteRegistration::new(1, "/", MatchMode::Exact, view("Home")),
			])
			.with_policy(MatchPolicy::ExactFirst);

		assert_eq!(router.render_path("/").render_to_string(), "Home");
		assert_eq!(router.render_path("/docs/intro").render_to_string(), "Docs");
		assert_eq!(router.match_path("/docs/intro").map(|m| m.index), Some(7));
	}

	#[rstest::rstest]
	#[case(HrefStyle::Hash, "#/about", Some("/about"))]
	#[case(HrefStyle::Hash, "/about", None)]
	#[case(HrefStyle::Hash, "#section", None)]
	#[case(HrefStyle::Path, "/about", Some("/about"))]
	#[case(HrefStyle::Path, "https://example.com/", None)]
	fn test_href_style_path_of(
		#[case] style: HrefStyle,
		#[case] href: &str,
		#[case] expected: Option<&str>,
	) {
		assert_eq!(style.path_of(href), expected);
	}

	#[test]
	fn test_follow_href_push_and_replace() {
		let router = Router::from_table(&table());

		router.follow_href("#/docs", false).unwrap();
		router.follow_href("#/users/5", true).unwrap();
		assert_eq!(router.current_path(), "/users/5");
		assert_eq!(router.render_current().render_to_string(), "User");

		router.back().unwrap();
		assert_eq!(router.current_path(), "/");
	}

	#[test]
	fn test_follow_href_rejects_external() {
		let router = Router::new();
		assert_eq!(
			router.follow_href("https://example.com/", false),
			Err(RouterError::InvalidPath("https://example.com/".to_string()))
		);
		assert_eq!(router.current_path(), "/");
	}

	#[test]
	fn test_router_error_display() {
		assert_eq!(
			RouterError::NotFound("/test/".to_string()).to_string(),
			"Route not found: /test/"
		);
		assert_eq!(
			RouterError::NoHistory("back").to_string(),
			"No history entry to go back"
		);
	}
}
