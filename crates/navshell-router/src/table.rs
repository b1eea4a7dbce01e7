//! Route descriptors and route tables.

use navshell_core::{PageComponent, View};

/// A single route table entry: path pattern, matching mode and page.
///
/// Descriptors are identified by their position in a [`RouteTable`]; two
/// descriptors sharing a path are both kept.
#[derive(Debug, Clone)]
pub struct RouteDescriptor {
	path: String,
	exact: bool,
	component: PageComponent,
	label: Option<String>,
}

impl RouteDescriptor {
	/// Creates a prefix-matching descriptor.
	pub fn new(path: impl Into<String>, component: impl Into<PageComponent>) -> Self {
		Self {
			path: path.into(),
			exact: false,
			component: component.into(),
			label: None,
		}
	}

	/// Creates an exact-matching descriptor.
	pub fn exact(path: impl Into<String>, component: impl Into<PageComponent>) -> Self {
		Self::new(path, component).with_exact(true)
	}

	/// Sets the exactness flag.
	pub fn with_exact(mut self, exact: bool) -> Self {
		self.exact = exact;
		self
	}

	/// Sets the navigation label.
	pub fn with_label(mut self, label: impl Into<String>) -> Self {
		self.label = Some(label.into());
		self
	}

	pub fn path(&self) -> &str {
		&self.path
	}

	pub fn is_exact(&self) -> bool {
		self.exact
	}

	pub fn component(&self) -> &PageComponent {
		&self.component
	}

	pub fn label(&self) -> Option<&str> {
		self.label.as_deref()
	}

	/// Invokes the descriptor's component.
	pub fn render(&self) -> View {
		self.component.render()
	}
}

/// An ordered, read-only sequence of route descriptors.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
	descriptors: Vec<RouteDescriptor>,
}

impl RouteTable {
	/// Creates an empty table.
	pub fn new() -> Self {
		Self::default()
	}

	/// Appends a descriptor.
	pub fn route(mut self, descriptor: RouteDescriptor) -> Self {
		self.descriptors.push(descriptor);
		self
	}

	pub fn len(&self) -> usize {
		self.descriptors.len()
	}

	pub fn is_empty(&self) -> bool {
		self.descriptors.is_empty()
	}

	/// Returns the descriptor at ordinal `index`.
	pub fn get(&self, index: usize) -> Option<&RouteDescriptor> {
		self.descriptors.get(index)
	}

	pub fn iter(&self) -> std::slice::Iter<'_, RouteDescriptor> {
		self.descriptors.iter()
	}

	pub fn descriptors(&self) -> &[RouteDescriptor] {
		&self.descriptors
	}
}

impl From<Vec<RouteDescriptor>> for RouteTable {
	fn from(descriptors: Vec<RouteDescriptor>) -> Self {
		Self { descriptors }
	}
}

impl FromIterator<RouteDescriptor> for RouteTable {
	fn from_iter<I: IntoIterator<Item = RouteDescriptor>>(iter: I) -> Self {
		Self {
			descriptors: iter.into_iter().collect(),
		}
	}
}

impl<'a> IntoIterator for &'a RouteTable {
	type Item = &'a RouteDescriptor;
	type IntoIter = std::slice::Iter<'a, RouteDescriptor>;

	fn into_iter(self) -> Self::IntoIter {
		self.descriptors.iter()
	}
}
