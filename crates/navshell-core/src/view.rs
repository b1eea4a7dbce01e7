//! View tree for page regions.
//!
//! The header, the matched body and the footer are each produced as a
//! [`View`]. A view renders to HTML through its [`Display`](fmt::Display)
//! impl; [`View::render_to_string`] is the usual entry point.

use std::borrow::Cow;
use std::fmt::{self, Write};

/// Elements written as `<tag />` with no children.
const VOID_ELEMENTS: &[&str] = &[
	"area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source",
	"track", "wbr",
];

/// A node in the rendered region tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
	/// An HTML element.
	Element(ElementView),
	/// Escaped text.
	Text(Cow<'static, str>),
	/// Sibling views with no wrapper element.
	Fragment(Vec<View>),
	/// Renders nothing.
	Empty,
}

/// An HTML element with attributes and children, built with chained calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementView {
	tag: Cow<'static, str>,
	attrs: Vec<(Cow<'static, str>, Cow<'static, str>)>,
	children: Vec<View>,
}

impl ElementView {
	pub fn new(tag: impl Into<Cow<'static, str>>) -> Self {
		Self {
			tag: tag.into(),
			attrs: Vec::new(),
			children: Vec::new(),
		}
	}

	/// Appends an attribute. Attributes render in insertion order.
	pub fn attr(
		mut self,
		name: impl Into<Cow<'static, str>>,
		value: impl Into<Cow<'static, str>>,
	) -> Self {
		self.attrs.push((name.into(), value.into()));
		self
	}

	pub fn child(mut self, child: impl IntoView) -> Self {
		self.children.push(child.into_view());
		self
	}

	pub fn children(mut self, children: impl IntoIterator<Item = impl IntoView>) -> Self {
		self.children
			.extend(children.into_iter().map(IntoView::into_view));
		self
	}

	fn is_void(&self) -> bool {
		VOID_ELEMENTS.contains(&self.tag.as_ref())
	}

	fn write_html(&self, out: &mut impl Write) -> fmt::Result {
		write!(out, "<{}", self.tag)?;
		for (name, value) in &self.attrs {
			write!(out, " {}=\"{}\"", name, Escaped(value))?;
		}
		if self.is_void() {
			return out.write_str(" />");
		}
		out.write_char('>')?;
		for child in &self.children {
			child.write_html(out)?;
		}
		write!(out, "</{}>", self.tag)
	}
}

impl View {
	/// Starts an element; finish with [`IntoView::into_view`].
	pub fn element(tag: impl Into<Cow<'static, str>>) -> ElementView {
		ElementView::new(tag)
	}

	pub fn text(content: impl Into<Cow<'static, str>>) -> Self {
		Self::Text(content.into())
	}

	pub fn fragment(children: impl IntoIterator<Item = impl IntoView>) -> Self {
		Self::Fragment(children.into_iter().map(IntoView::into_view).collect())
	}

	pub fn empty() -> Self {
		Self::Empty
	}

	/// Renders the view to an HTML string.
	pub fn render_to_string(&self) -> String {
		self.to_string()
	}

	fn write_html(&self, out: &mut impl Write) -> fmt::Result {
		match self {
			Self::Element(el) => el.write_html(out),
			Self::Text(text) => write!(out, "{}", Escaped(text)),
			Self::Fragment(children) => children.iter().try_for_each(|c| c.write_html(out)),
			Self::Empty => Ok(()),
		}
	}
}

impl fmt::Display for View {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		self.write_html(f)
	}
}

/// HTML-escaped text (`& < > " '`).
struct Escaped<'a>(&'a str);

impl fmt::Display for Escaped<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let mut rest = self.0;
		while let Some(pos) = rest.find(['&', '<', '>', '"', '\'']) {
			f.write_str(&rest[..pos])?;
			f.write_str(match rest.as_bytes()[pos] {
				b'&' => "&amp;",
				b'<' => "&lt;",
				b'>' => "&gt;",
				b'"' => "&quot;",
				_ => "&#x27;",
			})?;
			rest = &rest[pos + 1..];
		}
		f.write_str(rest)
	}
}

/// Conversion into a [`View`], accepted wherever a child or region is built.
pub trait IntoView {
	fn into_view(self) -> View;
}

impl IntoView for View {
	fn into_view(self) -> View {
		self
	}
}

impl IntoView for ElementView {
	fn into_view(self) -> View {
		View::Element(self)
	}
}

impl IntoView for String {
	fn into_view(self) -> View {
		View::text(self)
	}
}

impl IntoView for &'static str {
	fn into_view(self) -> View {
		View::text(self)
	}
}

impl<T: IntoView> IntoView for Option<T> {
	fn into_view(self) -> View {
		self.map_or(View::Empty, IntoView::into_view)
	}
}

impl<T: IntoView> IntoView for Vec<T> {
	fn into_view(self) -> View {
		View::fragment(self)
	}
}

impl IntoView for () {
	fn into_view(self) -> View {
		View::Empty
	}
}

macro_rules! impl_into_view_for_tuple {
	($($name:ident),+) => {
		impl<$($name: IntoView),+> IntoView for ($($name,)+) {
			#[allow(non_snake_case)]
			fn into_view(self) -> View {
				let ($($name,)+) = self;
				View::Fragment(vec![$($name.into_view()),+])
			}
		}
	};
}

impl_into_view_for_tuple!(A, B);
impl_into_view_for_tuple!(A, B, C);
