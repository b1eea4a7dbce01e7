//! Page shell: persistent header and footer around the routed body.

use navshell_core::{Component, ElementView, IntoView, PageComponent, View};
use navshell_router::{NavBar, Router, RouterOutlet};

/// Header, body and footer chrome for every page.
///
/// The shell renders, in order:
///
/// ```text
/// <div class="site">
///   <div class="site-hd">header</div>
///   <main class="site-bd" data-router-outlet="true">matched body</main>
///   <div class="site-ft">footer</div>
/// </div>
/// ```
///
/// Header and footer render once per pass regardless of location. The body
/// is whatever the router renders for its current location, which is empty
/// when nothing matches. The shell holds no state of its own.
#[derive(Debug, Clone)]
pub struct PageShell {
	header: PageComponent,
	footer: PageComponent,
	outlet: RouterOutlet,
}

impl Default for PageShell {
	fn default() -> Self {
		Self::new(PageComponent::empty(), PageComponent::empty())
	}
}

impl PageShell {
	/// Creates a shell with the given header and footer.
	pub fn new(header: impl Into<PageComponent>, footer: impl Into<PageComponent>) -> Self {
		Self {
			header: header.into(),
			footer: footer.into(),
			outlet: RouterOutlet::new().tag("main").class("site-bd"),
		}
	}

	pub fn header(&self) -> &PageComponent {
		&self.header
	}

	pub fn footer(&self) -> &PageComponent {
		&self.footer
	}

	/// Renders the shell for the router's current location.
	pub fn render(&self, router: &Router) -> View {
		self.render_with_nav(router, None)
	}

	/// Renders the shell, appending `nav` to the header region.
	pub fn render_with_nav(&self, router: &Router, nav: Option<&NavBar>) -> View {
		let header = ElementView::new("div")
			.attr("class", "site-hd")
			.child(self.header.render())
			.child(nav.map(NavBar::render));

		let footer = ElementView::new("div")
			.attr("class", "site-ft")
			.child(self.footer.render());

		ElementView::new("div")
			.attr("class", "site")
			.child(header)
			.child(self.outlet.render_with(router))
			.child(footer)
			.into_view()
	}
}
