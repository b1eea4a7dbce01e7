//! Application: route table, router and page shell wired together.

use crate::shell::PageShell;
use navshell_conf::{ConfError, NavConfig, PageRegistry};
use navshell_core::{Component, PageComponent, View};
use navshell_router::{NavBar, RouteTable, Router, RouterError};

/// Error type for building and running an [`App`].
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum AppError {
	#[error(transparent)]
	Router(#[from] RouterError),

	#[error(transparent)]
	Conf(#[from] ConfError),

	#[error("Mount failed: {0}")]
	Mount(String),
}

/// A single-page application.
///
/// # Example
///
/// ```
/// use navshell::{App, RouteDescriptor, RouteTable, View};
///
/// let table = RouteTable::new()
///     .route(RouteDescriptor::exact("/", || View::text("Home")));
/// let app = App::new(table, || View::text("Header"), || View::text("Footer"));
///
/// assert!(app.render_to_string().contains("Home"));
/// app.navigate("/about").unwrap();
/// assert!(!app.render_to_string().contains("Home"));
/// ```
#[derive(Debug)]
pub struct App {
	table: RouteTable,
	router: Router,
	shell: PageShell,
	show_nav: bool,
}

impl App {
	/// Creates an app over `table` with the given header and footer.
	///
	/// On `wasm32` the router follows `window.location.hash`.
	pub fn new(
		table: RouteTable,
		header: impl Into<PageComponent>,
		footer: impl Into<PageComponent>,
	) -> Self {
		let router = Router::from_table(&table);
		#[cfg(target_arch = "wasm32")]
		let router = router.with_history(navshell_router::HashHistory);

		Self::from_parts(table, router, PageShell::new(header, footer))
	}

	/// Assembles an app from a prebuilt router and shell.
	pub fn from_parts(table: RouteTable, router: Router, shell: PageShell) -> Self {
		Self {
			table,
			router,
			shell,
			show_nav: false,
		}
	}

	/// Builds an app from a navigation config.
	pub fn from_config(
		config: &NavConfig,
		registry: &PageRegistry,
		header: impl Into<PageComponent>,
		footer: impl Into<PageComponent>,
	) -> Result<Self, AppError> {
		let table = config.resolve(registry)?;
		let router = config.build_router(&table, registry)?;
		tracing::debug!(routes = table.len(), "app built from navigation config");
		Ok(Self::from_parts(table, router, PageShell::new(header, footer)))
	}

	/// Renders a [`NavBar`] of the labelled routes in the header region.
	pub fn with_nav(mut self, show_nav: bool) -> Self {
		self.show_nav = show_nav;
		self
	}

	pub fn table(&self) -> &RouteTable {
		&self.table
	}

	pub fn router(&self) -> &Router {
		&self.router
	}

	pub fn shell(&self) -> &PageShell {
		&self.shell
	}

	/// Navigates to `path`.
	pub fn navigate(&self, path: &str) -> Result<(), AppError> {
		self.router.push(path)?;
		Ok(())
	}

	/// Builds the navigation bar for the current location.
	pub fn nav_bar(&self) -> NavBar {
		NavBar::new(&self.table, &self.router)
	}

	/// Renders the page for the current location.
	pub fn render(&self) -> View {
		if self.show_nav {
			let nav = self.nav_bar();
			self.shell.render_with_nav(&self.router, Some(&nav))
		} else {
			self.shell.render(&self.router)
		}
	}

	/// Renders the page for the current location to HTML.
	pub fn render_to_string(&self) -> String {
		self.render().render_to_string()
	}
}

impl Component for App {
	fn render(&self) -> View {
		App::render(self)
	}

	fn name() -> &'static str {
		"App"
	}
}
