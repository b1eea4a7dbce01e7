//! Browser launcher.
//!
//! Mounts an [`App`] into a DOM element and keeps it in sync with
//! `window.location.hash`. Clicks on rendered links go through the router,
//! so `data-replace` links replace the current history entry.

use crate::app::{App, AppError};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

fn mount_err(what: &str) -> AppError {
	AppError::Mount(what.to_string())
}

/// Renders `app` into the element with id `root_id` and re-renders it on
/// every navigation, including `hashchange` events from plain anchors and
/// the browser's back/forward buttons.
///
/// The app lives for the rest of the page's lifetime.
pub fn launch(app: App, root_id: &str) -> Result<(), AppError> {
	let window = web_sys::window().ok_or_else(|| mount_err("window not available"))?;
	let document = window
		.document()
		.ok_or_else(|| mount_err("document not available"))?;
	let root = document
		.get_element_by_id(root_id)
		.ok_or_else(|| AppError::Mount(format!("no element with id '{}'", root_id)))?;

	let app = Rc::new(app);
	root.set_inner_html(&app.render_to_string());

	{
		let app_ref = Rc::clone(&app);
		let root = root.clone();
		app.router().on_navigate(move |location| {
			tracing::debug!(path = location.path(), "re-rendering");
			root.set_inner_html(&app_ref.render_to_string());
		});
	}

	let on_click = {
		let app = Rc::clone(&app);
		Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |event: web_sys::MouseEvent| {
			if event.button() != 0
				|| event.ctrl_key()
				|| event.meta_key()
				|| event.shift_key()
				|| event.alt_key()
			{
				return;
			}
			let Some(link) = event
				.target()
				.and_then(|t| t.dyn_into::<web_sys::Element>().ok())
				.and_then(|el| el.closest("a[data-link]").ok().flatten())
			else {
				return;
			};
			let Some(href) = link.get_attribute("href") else {
				return;
			};
			let replace = link.get_attribute("data-replace").as_deref() == Some("true");

			event.prevent_default();
			if let Err(e) = app.router().follow_href(&href, replace) {
				tracing::warn!(href = %href, error = %e, "link navigation failed");
			}
		})
	};
	root.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
		.map_err(|e| AppError::Mount(format!("{:?}", e)))?;
	on_click.forget();

	let on_hash_change = {
		let app = Rc::clone(&app);
		Closure::<dyn FnMut()>::new(move || {
			app.router().sync_with_history();
		})
	};
	window
		.add_event_listener_with_callback("hashchange", on_hash_change.as_ref().unchecked_ref())
		.map_err(|e| AppError::Mount(format!("{:?}", e)))?;
	on_hash_change.forget();

	Ok(())
}
