//! Shared fixtures for navshell integration tests.

use navshell::{App, PageRegistry, PageShell, RouteTable, Router, View};
use navshell_core::IntoView;

pub fn header() -> View {
	View::element("header").child("Header").into_view()
}

pub fn footer() -> View {
	View::element("footer").child("Footer").into_view()
}

pub fn home() -> View {
	View::text("Home")
}

pub fn about() -> View {
	View::text("About")
}

pub fn docs() -> View {
	View::text("Docs")
}

pub fn not_found() -> View {
	View::text("Not Found")
}

/// Expected shell HTML with `body` in the body region.
pub fn shell_html(body: &str) -> String {
	format!(
		"<div class=\"site\">\
		<div class=\"site-hd\"><header>Header</header></div>\
		<main class=\"site-bd\" data-router-outlet=\"true\">{}</main>\
		<div class=\"site-ft\"><footer>Footer</footer></div>\
		</div>",
		body
	)
}

/// App over `table` with the fixture header and footer.
pub fn app(table: RouteTable) -> App {
	App::new(table, header, footer)
}

/// Renders the fixture shell for `router` at `path`.
pub fn render_at(router: &Router, path: &str) -> String {
	router.push(path).expect("absolute path");
	PageShell::new(header, footer)
		.render(router)
		.render_to_string()
}

/// Registry with every fixture page.
pub fn registry() -> PageRegistry {
	PageRegistry::new()
		.register("home", home)
		.register("about", about)
		.register("docs", docs)
		.register("not_found", not_found)
}
