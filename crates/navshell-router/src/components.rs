//! Router components for navigation.
//!
//! [`Link`] and [`NavBar`] render in-app anchors; [`RouterOutlet`] renders
//! the body matched by the router for the current location.

use crate::core::{HrefStyle, Router};
use crate::pattern::MatchMode;
use crate::table::RouteTable;
use navshell_core::{Component, ElementView, IntoView, View};

/// An anchor that navigates within the application.
///
/// # Example
///
/// ```
/// use navshell_router::{Link, Router};
/// use navshell_core::Component;
///
/// let router = Router::new();
/// let link = router.link("/about", "About");
/// assert_eq!(link.render().render_to_string(), "<a href=\"#/about\" data-link=\"true\">About</a>");
/// ```
#[derive(Debug, Clone)]
pub struct Link {
	to: String,
	content: String,
	href_style: HrefStyle,
	class: Option<String>,
	active: bool,
	replace: bool,
	attrs: Vec<(String, String)>,
}

impl Link {
	/// Creates a new hash-style link.
	pub fn new(to: impl Into<String>, content: impl Into<String>) -> Self {
		Self {
			to: to.into(),
			content: content.into(),
			href_style: HrefStyle::default(),
			class: None,
			active: false,
			replace: false,
			attrs: Vec::new(),
		}
	}

	/// Sets the href style.
	pub fn href_style(mut self, href_style: HrefStyle) -> Self {
		self.href_style = href_style;
		self
	}

	/// Sets the CSS class.
	pub fn class(mut self, class: impl Into<String>) -> Self {
		self.class = Some(class.into());
		self
	}

	/// Marks the link as pointing at the current location.
	pub fn active(mut self, active: bool) -> Self {
		self.active = active;
		self
	}

	/// Sets whether following the link replaces the current history entry
	/// instead of pushing one. Rendered as `data-replace`, which the browser
	/// launcher passes to [`Router::follow_href`].
	pub fn replace(mut self, replace: bool) -> Self {
		self.replace = replace;
		self
	}

	/// Adds a custom attribute.
	pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.attrs.push((name.into(), value.into()));
		self
	}

	pub fn to(&self) -> &str {
		&self.to
	}

	pub fn content(&self) -> &str {
		&self.content
	}

	pub fn is_active(&self) -> bool {
		self.active
	}

	pub fn is_replace(&self) -> bool {
		self.replace
	}
}

impl Component for Link {
	fn render(&self) -> View {
		let mut el = ElementView::new("a").attr("href", self.href_style.href(&self.to));

		let class = match (&self.class, self.active) {
			(Some(class), true) => Some(format!("{} active", class)),
			(Some(class), false) => Some(class.clone()),
			(None, true) => Some("active".to_string()),
			(None, false) => None,
		};
		if let Some(class) = class {
			el = el.attr("class", class);
		}
		if self.active {
			el = el.attr("aria-current", "page");
		}

		el = el.attr("data-link", "true");
		if self.replace {
			el = el.attr("data-replace", "true");
		}

		for (name, value) in &self.attrs {
			el = el.attr(name.clone(), value.clone());
		}

		el.child(self.content.clone()).into_view()
	}

	fn name() -> &'static str {
		"Link"
	}
}

impl Router {
	/// Builds a link to `to` using this router's href style, marked active
	/// when the current location is `to` or below it.
	pub fn link(&self, to: impl Into<String>, content: impl Into<String>) -> Link {
		let to = to.into();
		let active = self.is_active(&to, MatchMode::Prefix);
		Link::new(to, content)
			.href_style(self.href_style())
			.active(active)
	}
}

/// Navigation list built from the labelled entries of a route table.
///
/// Entries without a label are left out. An exact entry is active only on
/// its own path, a prefix entry on its path and anything below it.
#[derive(Debug, Clone)]
pub struct NavBar {
	links: Vec<Link>,
}

impl NavBar {
	/// Builds the nav bar for the router's current location.
	pub fn new(table: &RouteTable, router: &Router) -> Self {
		let links = table
			.iter()
			.filter_map(|descriptor| {
				let label = descriptor.label()?;
				let mode = MatchMode::from_exact(descriptor.is_exact());
				Some(
					Link::new(descriptor.path(), label)
						.href_style(router.href_style())
						.class("nav-link")
						.active(router.is_active(descriptor.path(), mode)),
				)
			})
			.collect();
		Self { links }
	}

	pub fn links(&self) -> &[Link] {
		&self.links
	}
}

impl Component for NavBar {
	fn render(&self) -> View {
		let items: Vec<View> = self
			.links
			.iter()
			.map(|link| ElementView::new("li").child(link.render()).into_view())
			.collect();

		ElementView::new("nav")
			.attr("class", "site-nav")
			.child(ElementView::new("ul").children(items))
			.into_view()
	}

	fn name() -> &'static str {
		"NavBar"
	}
}

/// The element the matched body renders into.
#[derive(Debug, Clone)]
pub struct RouterOutlet {
	tag: &'static str,
	id: Option<String>,
	class: Option<String>,
}

impl Default for RouterOutlet {
	fn default() -> Self {
		Self {
			tag: "div",
			id: None,
			class: None,
		}
	}
}

impl RouterOutlet {
	/// Creates a new router outlet.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the wrapper tag.
	pub fn tag(mut self, tag: &'static str) -> Self {
		self.tag = tag;
		self
	}

	/// Sets the ID attribute.
	pub fn id(mut self, id: impl Into<String>) -> Self {
		self.id = Some(id.into());
		self
	}

	/// Sets the CSS class.
	pub fn class(mut self, class: impl Into<String>) -> Self {
		self.class = Some(class.into());
		self
	}

	/// Renders the wrapper around the router's body for the current location.
	pub fn render_with(&self, router: &Router) -> View {
		let mut el = ElementView::new(self.tag);

		if let Some(ref id) = self.id {
			el = el.attr("id", id.clone());
		}
		if let Some(ref class) = self.class {
			el = el.attr("class", class.clone());
		}

		el.attr("data-router-outlet", "true")
			.child(router.render_current())
			.into_view()
	}
}
