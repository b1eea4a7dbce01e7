//! Integration tests for apps built from navigation config files

use navshell::{App, AppError, ConfError, MatchPolicy, NavConfig};
use navshell_integration_tests::{footer, header, registry, shell_html};
use std::io::Write;

const SITE: &str = r#"
[router]
policy = "first-match"
history = "hash"
not_found = "not_found"

[[routes]]
path = "/"
exact = true
page = "home"
label = "Home"

[[routes]]
path = "/about"
page = "about"
label = "About"

[[routes]]
path = "/docs"
page = "docs"
"#;

#[test]
fn test_app_from_config_file() {
	let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
	file.write_all(SITE.as_bytes()).unwrap();

	let config = NavConfig::from_file(file.path()).unwrap();
	let app = App::from_config(&config, &registry(), header, footer).unwrap();

	assert_eq!(app.table().len(), 3);
	assert_eq!(app.router().policy(), MatchPolicy::FirstMatch);
	assert_eq!(app.render_to_string(), shell_html("Home"));

	app.navigate("/docs/intro").unwrap();
	assert_eq!(app.render_to_string(), shell_html("Docs"));

	app.navigate("/contact").unwrap();
	assert_eq!(app.render_to_string(), shell_html("Not Found"));
}

#[test]
fn test_config_order_is_registration_order() {
	let config = NavConfig::from_toml_str(SITE).unwrap();
	let app = App::from_config(&config, &registry(), header, footer).unwrap();

	let paths: Vec<&str> = app
		.router()
		.registrations()
		.iter()
		.map(|r| r.path())
		.collect();
	assert_eq!(paths, vec!["/", "/about", "/docs"]);
}

#[test]
fn test_nav_uses_labels_and_hash_hrefs() {
	let config = NavConfig::from_toml_str(SITE).unwrap();
	let app = App::from_config(&config, &registry(), header, footer)
		.unwrap()
		.with_nav(true);

	let html = app.render_to_string();
	assert!(html.contains("<a href=\"#/\" class=\"nav-link active\""));
	assert!(html.contains("<a href=\"#/about\" class=\"nav-link\""));
	assert!(!html.contains("#/docs"));
}

#[test]
fn test_unknown_page_fails_app_construction() {
	let config =
		NavConfig::from_toml_str("[[routes]]\npath = \"/\"\npage = \"landing\"").unwrap();
	let err = App::from_config(&config, &registry(), header, footer).unwrap_err();

	assert!(matches!(
		err,
		AppError::Conf(ConfError::UnknownPage { index: 0, .. })
	));
	assert_eq!(err.to_string(), "Route 0: unknown page 'landing'");
}
