//! DOM helpers shared by the behavior bindings (WASM only).
//!
//! Thin wrappers over `web-sys` that turn JavaScript exceptions into
//! [`BehaviorError`] and keep listener closures alive for the page lifetime.

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
	Document, Element, Event, EventTarget, HtmlElement, HtmlInputElement, HtmlSelectElement,
	HtmlTextAreaElement, NodeList, Window,
};

use crate::behaviors::alerts::fade_transition;
use crate::error::BehaviorError;

/// Returns the global `window`.
pub fn window() -> Result<Window, BehaviorError> {
	web_sys::window().ok_or(BehaviorError::MissingGlobal("window"))
}

/// Returns the global `document`.
pub fn document() -> Result<Document, BehaviorError> {
	window()?
		.document()
		.ok_or(BehaviorError::MissingGlobal("document"))
}

/// Collects every element in the document matching `selector`.
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, BehaviorError> {
	let list = document
		.query_selector_all(selector)
		.map_err(|e| BehaviorError::dom("querySelectorAll", &e))?;
	Ok(elements(&list))
}

/// Collects every descendant of `root` matching `selector`.
pub fn query_all_in(root: &Element, selector: &str) -> Result<Vec<Element>, BehaviorError> {
	let list = root
		.query_selector_all(selector)
		.map_err(|e| BehaviorError::dom("querySelectorAll", &e))?;
	Ok(elements(&list))
}

fn elements(list: &NodeList) -> Vec<Element> {
	(0..list.length())
		.filter_map(|i| list.get(i))
		.filter_map(|node| node.dyn_into::<Element>().ok())
		.collect()
}

/// Registers `handler` for `event_type` on `target` for the page lifetime.
pub fn listen<F>(target: &EventTarget, event_type: &str, handler: F) -> Result<(), BehaviorError>
where
	F: FnMut(Event) + 'static,
{
	let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
	target
		.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())
		.map_err(|e| BehaviorError::dom("addEventListener", &e))?;
	// Listeners are never removed; the page owns them until unload.
	closure.forget();
	Ok(())
}

/// Registers a handler that the browser removes after its first call.
pub fn listen_once<F>(target: &EventTarget, event_type: &str, handler: F) -> Result<(), BehaviorError>
where
	F: FnOnce(Event) + 'static,
{
	let closure: Closure<dyn FnMut(Event)> = Closure::once(handler);
	let options = web_sys::AddEventListenerOptions::new();
	options.set_once(true);
	target
		.add_event_listener_with_callback_and_add_event_listener_options(
			event_type,
			closure.as_ref().unchecked_ref(),
			&options,
		)
		.map_err(|e| BehaviorError::dom("addEventListener", &e))?;
	closure.forget();
	Ok(())
}

/// Runs `f` once after `delay_ms`. The timer cannot be cancelled.
pub fn schedule<F>(delay_ms: u32, f: F)
where
	F: FnOnce() + 'static,
{
	Timeout::new(delay_ms, f).forget();
}

/// Sets an inline style property on an HTML element.
pub fn set_style(element: &Element, property: &str, value: &str) -> Result<(), BehaviorError> {
	let html = element
		.dyn_ref::<HtmlElement>()
		.ok_or_else(|| BehaviorError::Dom {
			operation: "style",
			reason: format!("<{}> is not an HTML element", element.tag_name()),
		})?;
	html.style()
		.set_property(property, value)
		.map_err(|e| BehaviorError::dom("style.setProperty", &e))
}

/// Fades `element` to transparent and removes it once the fade completes.
pub fn fade_out_and_remove(element: Element, fade_ms: u32) {
	let faded = set_style(&element, "transition", &fade_transition(fade_ms))
		.and_then(|()| set_style(&element, "opacity", "0"));
	if let Err(err) = faded {
		warn_log!("fade skipped: {}", err);
	}
	schedule(fade_ms, move || element.remove());
}

/// Current value of an `<input>`, `<textarea>` or `<select>`.
pub fn field_value(element: &Element) -> Option<String> {
	if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
		return Some(input.value());
	}
	if let Some(textarea) = element.dyn_ref::<HtmlTextAreaElement>() {
		return Some(textarea.value());
	}
	element
		.dyn_ref::<HtmlSelectElement>()
		.map(HtmlSelectElement::value)
}

/// The element an event was dispatched to.
pub fn event_element(event: &Event) -> Option<Element> {
	event.target()?.dyn_into::<Element>().ok()
}

/// Viewport width in CSS pixels.
pub fn viewport_width(window: &Window) -> Result<f64, BehaviorError> {
	let width = window
		.inner_width()
		.map_err(|e| BehaviorError::dom("innerWidth", &e))?;
	width.as_f64().ok_or_else(|| BehaviorError::Dom {
		operation: "innerWidth",
		reason: "not a number".to_string(),
	})
}
