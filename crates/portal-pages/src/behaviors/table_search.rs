//! Table search filter
//!
//! A search box carrying `data-table-search="<table id>"` filters the body
//! rows of that table. Matching is a case-insensitive substring test over
//! the row's whole text; an empty term shows every row.

#[cfg(target_arch = "wasm32")]
use crate::{config::PageConfig, dom, error::BehaviorError};

/// Selector of the search boxes.
pub const SELECTOR: &str = "[data-table-search]";

/// Attribute naming the id of the filtered table.
pub const ATTRIBUTE: &str = "data-table-search";

/// Selector of the filtered rows inside the table.
pub const ROW_SELECTOR: &str = "tbody tr";

/// A search term, lowercased once per input event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerm(String);

impl SearchTerm {
	/// Normalizes a raw search box value.
	pub fn new(raw: &str) -> Self {
		Self(raw.to_lowercase())
	}

	/// Returns true if a row with this text stays visible.
	pub fn matches(&self, row_text: &str) -> bool {
		self.0.is_empty() || row_text.to_lowercase().contains(&self.0)
	}
}

/// CSS `display` value for a row.
pub fn row_display(visible: bool) -> &'static str {
	if visible { "" } else { "none" }
}

#[cfg(target_arch = "wasm32")]
fn filter(table: &web_sys::Element, raw: &str) -> Result<(), BehaviorError> {
	let term = SearchTerm::new(raw);
	for row in dom::query_all_in(table, ROW_SELECTOR)? {
		let text = row.text_content().unwrap_or_default();
		dom::set_style(&row, "display", row_display(term.matches(&text)))?;
	}
	Ok(())
}

/// Binds the filter to every search box whose table exists.
#[cfg(target_arch = "wasm32")]
pub fn attach(document: &web_sys::Document, _config: &PageConfig) -> Result<usize, BehaviorError> {
	let mut count = 0;
	for input in dom::query_all(document, SELECTOR)? {
		let table_id = input.get_attribute(ATTRIBUTE).unwrap_or_default();
		let Some(table) = document.get_element_by_id(&table_id) else {
			debug_log!("no table #{} for search box", table_id);
			continue;
		};

		let target = input.clone();
		dom::listen(&input, "input", move |_| {
			let raw = dom::field_value(&target).unwrap_or_default();
			if let Err(err) = filter(&table, &raw) {
				warn_log!("table filter failed: {}", err);
			}
		})?;
		count += 1;
	}
	Ok(count)
}
