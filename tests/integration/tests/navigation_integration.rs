//! Integration tests for navigation through the router runtime
//!
//! These tests verify:
//! 1. History navigation re-renders the body region
//! 2. Navigation subscribers observe every location change
//! 3. Match policies and not-found handling at the shell level

use navshell::{
	MatchPolicy, MemoryHistory, PageShell, RouteDescriptor, RouteTable, Router, RouterError,
};
use navshell_integration_tests::{
	about, docs, footer, header, home, not_found, render_at, shell_html,
};
use navshell_router::Location;
use std::cell::RefCell;
use std::rc::Rc;

fn site_table() -> RouteTable {
	RouteTable::new()
		.route(RouteDescriptor::exact("/", home).with_label("Home"))
		.route(RouteDescriptor::new("/about", about).with_label("About"))
		.route(RouteDescriptor::new("/docs", docs).with_label("Docs"))
}

#[test]
fn test_back_forward_rerenders_body() {
	let router = Router::from_table(&site_table());
	let shell = PageShell::new(header, footer);

	router.push("/about").unwrap();
	router.push("/docs/intro").unwrap();
	assert_eq!(shell.render(&router).render_to_string(), shell_html("Docs"));

	router.back().unwrap();
	assert_eq!(shell.render(&router).render_to_string(), shell_html("About"));

	router.back().unwrap();
	assert_eq!(shell.render(&router).render_to_string(), shell_html("Home"));

	router.forward().unwrap();
	assert_eq!(shell.render(&router).render_to_string(), shell_html("About"));
}

#[test]
fn test_subscriber_rerenders_on_navigation() {
	let router = Rc::new(Router::from_table(&site_table()));
	let renders = Rc::new(RefCell::new(Vec::new()));

	{
		let router_ref = Rc::clone(&router);
		let sink = Rc::clone(&renders);
		router.on_navigate(move |_| {
			sink.borrow_mut()
				.push(router_ref.render_current().render_to_string());
		});
	}

	router.push("/about").unwrap();
	router.push("/nowhere").unwrap();
	router.back().unwrap();

	assert_eq!(*renders.borrow(), vec!["About", "", "About"]);
}

#[test]
fn test_history_starting_location() {
	let router = Router::from_table(&site_table()).with_history(MemoryHistory::at("/docs/api?v=2"));

	let location = router.current_location().get();
	assert_eq!(location.path(), "/docs/api");
	assert_eq!(location.query(), Some("v=2"));
	assert_eq!(router.render_current().render_to_string(), "Docs");
}

#[test]
fn test_hash_location_drives_matching() {
	let router = Router::from_table(&site_table());
	let location = Location::from_hash("#/about/team?tab=1");

	router.push(&location.href()).unwrap();
	assert_eq!(router.render_current().render_to_string(), "About");
}

#[test]
fn test_exact_first_policy_at_shell_level() {
	let table = RouteTable::new()
		.route(RouteDescriptor::new("/docs", docs))
		.route(RouteDescriptor::exact("/docs/about", about));

	let first = Router::from_table(&table);
	let exact_first = Router::from_table(&table).with_policy(MatchPolicy::ExactFirst);

	assert_eq!(render_at(&first, "/docs/about"), shell_html("Docs"));
	assert_eq!(render_at(&exact_first, "/docs/about"), shell_html("About"));
}

#[test]
fn test_not_found_page_fills_body() {
	let router = Router::from_table(&site_table()).not_found(not_found);
	assert_eq!(render_at(&router, "/missing"), shell_html("Not Found"));
}

#[test]
fn test_navigation_errors() {
	let router = Router::from_table(&site_table());
	assert_eq!(
		router.push("about"),
		Err(RouterError::InvalidPath("about".to_string()))
	);
	assert_eq!(router.forward(), Err(RouterError::NoHistory("forward")));
	assert_eq!(router.current_path(), "/");
}

#[test]
fn test_nav_links_follow_location() {
	let table = site_table();
	let app = navshell::App::new(table, header, footer).with_nav(true);

	app.navigate("/about").unwrap();
	let nav = app.nav_bar();
	let active: Vec<&str> = nav
		.links()
		.iter()
		.filter(|l| l.is_active())
		.map(|l| l.to())
		.collect();
	assert_eq!(active, vec!["/about"]);

	app.navigate("/").unwrap();
	let nav = app.nav_bar();
	let active: Vec<&str> = nav
		.links()
		.iter()
		.filter(|l| l.is_active())
		.map(|l| l.to())
		.collect();
	assert_eq!(active, vec!["/"]);
}
