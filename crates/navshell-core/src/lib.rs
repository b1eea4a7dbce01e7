//! # navshell-core
//!
//! Rendering primitives shared by the navshell crates:
//!
//! - [`View`] / [`ElementView`]: the rendered region tree, with HTML output
//! - [`Component`] and [`PageComponent`]: renderable units referenced from
//!   route tables and page chrome
//! - [`Signal`]: single-threaded observable state

pub mod component;
pub mod reactive;
pub mod view;

pub use component::{Component, PageComponent};
pub use reactive::{Signal, SubscriptionId};
pub use view::{ElementView, IntoView, View};
