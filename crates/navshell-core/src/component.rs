//! Component trait and page component handles.

use crate::view::View;
use std::fmt;
use std::sync::Arc;

/// Trait for reusable UI components.
///
/// # Example
///
/// ```
/// use navshell_core::{Component, View, IntoView};
///
/// struct Greeting {
///     name: String,
/// }
///
/// impl Component for Greeting {
///     fn render(&self) -> View {
///         View::element("div")
///             .attr("class", "greeting")
///             .child(format!("Hello, {}!", self.name))
///             .into_view()
///     }
///
///     fn name() -> &'static str {
///         "Greeting"
///     }
/// }
/// ```
pub trait Component: 'static {
	/// Renders the component to a View.
	fn render(&self) -> View;

	/// Returns the component's name for debugging.
	fn name() -> &'static str
	where
		Self: Sized;
}

type RenderFn = Arc<dyn Fn() -> View + Send + Sync>;

/// A handle to a zero-argument page-rendering unit.
///
/// Route descriptors, headers and footers all hold a `PageComponent`. It can
/// be built from a plain function or closure ([`PageComponent::from_fn`]) or
/// from any [`Component`] value ([`PageComponent::from_component`]). Cloning
/// shares the same underlying unit.
#[derive(Clone)]
pub struct PageComponent {
	render: RenderFn,
	name: Option<&'static str>,
}

impl PageComponent {
	/// Wraps a function or closure producing a view.
	pub fn from_fn<F>(f: F) -> Self
	where
		F: Fn() -> View + Send + Sync + 'static,
	{
		Self {
			render: Arc::new(f),
			name: None,
		}
	}

	/// Wraps a component value; its [`Component::name`] is kept for debugging.
	pub fn from_component<C>(component: C) -> Self
	where
		C: Component + Send + Sync,
	{
		Self {
			render: Arc::new(move || component.render()),
			name: Some(C::name()),
		}
	}

	/// A component rendering nothing.
	pub fn empty() -> Self {
		Self::from_fn(View::empty)
	}

	/// Sets a debug name.
	pub fn with_name(mut self, name: &'static str) -> Self {
		self.name = Some(name);
		self
	}

	/// Returns the debug name, if any.
	pub fn name(&self) -> Option<&'static str> {
		self.name
	}

	/// Invokes the unit with no arguments.
	pub fn render(&self) -> View {
		(self.render)()
	}

	/// Returns true if both handles share the same unit.
	pub fn ptr_eq(&self, other: &Self) -> bool {
		Arc::ptr_eq(&self.render, &other.render)
	}
}

impl fmt::Debug for PageComponent {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("PageComponent")
			.field("name", &self.name)
			.finish()
	}
}

impl<F> From<F> for PageComponent
where
	F: Fn() -> View + Send + Sync + 'static,
{
	fn from(f: F) -> Self {
		Self::from_fn(f)
	}
}
