//! # navshell-router
//!
//! Client-side routing for navshell.
//!
//! A [`RouteTable`] is an ordered list of [`RouteDescriptor`]s, each naming a
//! path pattern, an exactness flag and a page component. [`materialize()`]
//! maps the table one-to-one, in order, to [`RouteRegistration`]s, and the
//! [`Router`] owns the current location and picks the registration whose
//! body is rendered.
//!
//! ## Example
//!
//! ```
//! use navshell_core::View;
//! use navshell_router::{RouteDescriptor, RouteTable, Router};
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
//!     .route(RouteDescriptor::exact("/", home))
//!     .route(RouteDescriptor::new("/docs", docs));
//!
//! let router = Router::from_table(&table);
//! router.push("/docs/intro").unwrap();
//! assert_eq!(router.render_current().render_to_string(), "Docs");
//! ```

pub mod components;
pub mod core;
pub mod history;
pub mod materialize;
pub mod pattern;
pub mod table;

pub use components::{Link, NavBar, RouterOutlet};
pub use crate::core::{HrefStyle, MatchPolicy, RouteMatch, Router, RouterError};
#[cfg(target_arch = "wasm32")]
pub use history::HashHistory;
pub use history::{History, Location, MemoryHistory, NavigationType};
pub use materialize::{RouteRegistration, materialize};
pub use pattern::{MatchMode, PathPattern, PatternMatch};
pub use table::{RouteDescriptor, RouteTable};
