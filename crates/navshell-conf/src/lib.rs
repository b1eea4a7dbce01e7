//! # navshell-conf
//!
//! Loads an externally authored navigation table from TOML and resolves its
//! page names against a [`PageRegistry`], producing a
//! [`RouteTable`](navshell_router::RouteTable) and a configured
//! [`Router`](navshell_router::Router).
//!
//! Authoring mistakes (empty or relative paths, unknown page names) are
//! reported here, at construction time, as [`ConfError`]s.

pub mod nav;
pub mod registry;

pub use nav::{ConfError, HistoryMode, NavConfig, NavEntry, PolicySetting, RouterSettings};
pub use registry::PageRegistry;
