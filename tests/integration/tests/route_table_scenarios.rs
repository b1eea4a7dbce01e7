//! End-to-end route table scenarios
//!
//! Each scenario builds a route table, visits locations and checks the full
//! shell output: header, matched body (or nothing), footer.

use navshell::{RouteDescriptor, RouteTable, Router};
use navshell_integration_tests::{about, app, docs, home, render_at, shell_html};
use rstest::rstest;

/// Scenario 1: exact root route
#[rstest]
#[case("/", "Home")]
#[case("/about", "")]
#[case("/about/team", "")]
fn test_exact_root(#[case] path: &str, #[case] body: &str) {
	let table = RouteTable::new().route(RouteDescriptor::exact("/", home));
	let app = app(table);

	app.navigate(path).unwrap();
	assert_eq!(app.render_to_string(), shell_html(body));
}

/// Scenario 2: prefix route matches nested locations
#[rstest]
#[case("/docs", "Docs")]
#[case("/docs/", "Docs")]
#[case("/docs/intro", "Docs")]
#[case("/docs/intro/setup", "Docs")]
#[case("/docsets", "")]
#[case("/", "")]
fn test_prefix_docs(#[case] path: &str, #[case] body: &str) {
	let table = RouteTable::new().route(RouteDescriptor::new("/docs", docs));
	let app = app(table);

	app.navigate(path).unwrap();
	assert_eq!(app.render_to_string(), shell_html(body));
}

/// Scenario 3: empty table renders only chrome
#[rstest]
#[case("/")]
#[case("/about")]
#[case("/docs/intro")]
fn test_empty_table(#[case] path: &str) {
	let router = Router::from_table(&RouteTable::new());
	assert_eq!(render_at(&router, path), shell_html(""));
}

#[test]
fn test_body_renders_single_registration_when_several_match() {
	// "/" as a prefix route matches everything; registration order decides.
	let table = RouteTable::new()
		.route(RouteDescriptor::new("/", home))
		.route(RouteDescriptor::new("/about", about));
	let router = Router::from_table(&table);

	assert_eq!(render_at(&router, "/about"), shell_html("Home"));
}

#[test]
fn test_typical_site_table() {
	let table = RouteTable::new()
		.route(RouteDescriptor::exact("/", home))
		.route(RouteDescriptor::new("/about", about))
		.route(RouteDescriptor::new("/docs", docs));
	let router = Router::from_table(&table);

	assert_eq!(render_at(&router, "/"), shell_html("Home"));
	assert_eq!(render_at(&router, "/about"), shell_html("About"));
	assert_eq!(render_at(&router, "/docs/guide"), shell_html("Docs"));
	assert_eq!(render_at(&router, "/contact"), shell_html(""));
}
