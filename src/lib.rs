//! # navshell
//!
//! A single-page application shell driven by a declarative route table.
//!
//! A [`RouteTable`] lists route descriptors (path, exactness flag, page
//! component). The table is materialized into router registrations, the
//! [`Router`] tracks the current location and picks the matching page, and
//! the [`PageShell`] renders it between a persistent header and footer.
//!
//! ## Crates
//!
//! - [`navshell_core`]: view tree, components, signals
//! - [`navshell_router`]: route tables, materialization, router runtime
//! - [`navshell_conf`]: TOML navigation config
//!
//! ## Example
//!
//! ```
//! use navshell::prelude::*;
//!
//! fn home() -> View {
//!     View::text("Home")
//! }
//!
//! fn docs() -> View {
//!     View::text("Docs")
//! }
//!
//! let table = RouteTable::new()
//!     .route(RouteDescriptor::exact("/", home).with_label("Home"))
//!     .route(RouteDescriptor::new("/docs", docs).with_label("Docs"));
//!
//! let app = App::new(table, || View::text("My Site"), || View::text("Footer"));
//! app.navigate("/docs/intro").unwrap();
//!
//! assert_eq!(
//!     app.render_to_string(),
//!     "<div class=\"site\">\
//!      <div class=\"site-hd\">My Site</div>\
//!      <main class=\"site-bd\" data-router-outlet=\"true\">Docs</main>\
//!      <div class=\"site-ft\">Footer</div>\
//!      </div>"
//! );
//! ```
//!
//! In the browser, build the [`App`] and hand it to `browser::launch`; the
//! location then lives in the URL fragment (`#/docs/intro`).

pub mod app;
#[cfg(target_arch = "wasm32")]
pub mod browser;
pub mod shell;

pub use app::{App, AppError};
pub use shell::PageShell;

pub use navshell_conf::{ConfError, NavConfig, PageRegistry};
pub use navshell_core::{Component, ElementView, IntoView, PageComponent, Signal, View};
pub use navshell_router::{
	HrefStyle, Link, Location, MatchMode, MatchPolicy, MemoryHistory, NavBar, RouteDescriptor,
	RouteMatch, RouteRegistration, RouteTable, Router, RouterError, RouterOutlet, materialize,
};

/// Commonly used types.
pub mod prelude {
	pub use crate::{
		App, AppError, Component, IntoView, MatchMode, NavConfig, PageComponent, PageRegistry,
		PageShell, RouteDescriptor, RouteTable, Router, View,
	};
}
