//! Error types for page behaviors.

use thiserror::Error;

/// Error raised while attaching a behavior or running a helper.
#[derive(Debug, Error)]
pub enum BehaviorError {
	/// A browser global (`window`, `document`, ...) is not available.
	#[error("browser global `{0}` is unavailable")]
	MissingGlobal(&'static str),

	/// An element the operation cannot proceed without is absent.
	#[error("required element `{0}` not found")]
	MissingElement(String),

	/// A DOM call returned a JavaScript exception.
	#[error("DOM operation `{operation}` failed: {reason}")]
	Dom {
		/// The DOM operation that failed.
		operation: &'static str,
		/// Text of the JavaScript exception.
		reason: String,
	},

	/// A marker attribute carries a value that cannot be interpreted.
	#[error("invalid `{attribute}` value {value:?}")]
	InvalidAttribute {
		/// The attribute name.
		attribute: &'static str,
		/// The raw attribute value.
		value: String,
	},

	/// The page configuration block is malformed.
	#[error("invalid page configuration: {0}")]
	Config(#[from] serde_json::Error),
}

impl BehaviorError {
	/// Creates a [`BehaviorError::Dom`] from a JavaScript exception value.
	pub fn dom(operation: &'static str, reason: &wasm_bindgen::JsValue) -> Self {
		Self::Dom {
			operation,
			reason: js_reason(reason),
		}
	}
}

/// Extracts a human-readable message from a JavaScript exception.
pub(crate) fn js_reason(value: &wasm_bindgen::JsValue) -> String {
	value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
