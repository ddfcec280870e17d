//! CSRF-aware requests
//!
//! The server embeds its CSRF token in every page; requests made from the
//! browser must echo it back in the `X-CSRFToken` header.
//!
//! ## Token Retrieval
//!
//! 1. **Meta tag**: `<meta name="csrf-token" content="...">` in the HTML head
//! 2. **Hidden input**: `<input name="csrf_token">` rendered inside forms
//!
//! ## Usage
//!
//! ```ignore
//! use portal_pages::csrf::{FetchOptions, fetch_with_csrf};
//!
//! let response = fetch_with_csrf(
//!     "/api/clientes/42",
//!     FetchOptions::new().method(reqwest::Method::DELETE),
//! )
//! .await?;
//! ```
//!
//! From inline scripts the same helper is available as
//! `fetchWithCSRF(url, options)`, which wraps `window.fetch` and returns its
//! promise untouched.

use reqwest::header::{HeaderName, HeaderValue, InvalidHeaderValue};
use reqwest::{Client, Method, Request, Url};
use thiserror::Error;

/// The meta tag name for CSRF tokens.
pub const CSRF_META_NAME: &str = "csrf-token";

/// The header name used to send CSRF tokens in AJAX requests.
pub const CSRF_HEADER_NAME: &str = "X-CSRFToken";

/// The form field name for CSRF tokens.
pub const CSRF_FORM_FIELD: &str = "csrf_token";

/// Error returned by [`fetch_with_csrf`] and [`build_request`].
#[derive(Debug, Error)]
pub enum FetchError {
	/// The URL could not be parsed or resolved.
	#[error("invalid URL: {0}")]
	Url(#[from] url::ParseError),

	/// The token contains characters not allowed in a header.
	#[error("invalid CSRF token: {0}")]
	Token(#[from] InvalidHeaderValue),

	/// Building or sending the request failed.
	#[error(transparent)]
	Request(#[from] reqwest::Error),
}

/// Caller-supplied request options.
#[derive(Debug, Clone, Default)]
pub struct FetchOptions {
	/// HTTP method; `GET` by default.
	pub method: Method,
	/// Extra headers, in insertion order.
	pub headers: Vec<(String, String)>,
	/// Request body.
	pub body: Option<String>,
}

impl FetchOptions {
	/// Creates `GET` options without headers or body.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the HTTP method.
	pub fn method(mut self, method: Method) -> Self {
		self.method = method;
		self
	}

	/// Adds a header.
	pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.headers.push((name.into(), value.into()));
		self
	}

	/// Sets the request body.
	pub fn body(mut self, body: impl Into<String>) -> Self {
		self.body = Some(body.into());
		self
	}
}

/// Retrieves the CSRF token from the page.
///
/// Returns `None` if no token is found.
#[cfg(target_arch = "wasm32")]
pub fn get_csrf_token() -> Option<String> {
	get_csrf_token_from_meta().or_else(get_csrf_token_from_input)
}

/// Retrieves the CSRF token (non-WASM stub).
#[cfg(not(target_arch = "wasm32"))]
pub fn get_csrf_token() -> Option<String> {
	None
}

/// Retrieves the CSRF token from a meta tag.
#[cfg(target_arch = "wasm32")]
pub fn get_csrf_token_from_meta() -> Option<String> {
	let document = web_sys::window()?.document()?;
	let selector = format!("meta[name=\"{}\"]", CSRF_META_NAME);
	let meta = document.query_selector(&selector).ok()??;
	meta.get_attribute("content")
}

/// Retrieves the CSRF token from a hidden form input.
#[cfg(target_arch = "wasm32")]
pub fn get_csrf_token_from_input() -> Option<String> {
	use wasm_bindgen::JsCast;
	use web_sys::HtmlInputElement;

	let document = web_sys::window()?.document()?;
	let selector = format!("input[name=\"{}\"]", CSRF_FORM_FIELD);
	let input = document.query_selector(&selector).ok()??;
	let input: HtmlInputElement = input.dyn_into().ok()?;
	Some(input.value())
}

/// Resolves `url` against `base` when it is relative.
pub fn resolve_url(base: Option<&str>, url: &str) -> Result<Url, FetchError> {
	match Url::parse(url) {
		Ok(absolute) => Ok(absolute),
		Err(url::ParseError::RelativeUrlWithoutBase) => match base {
			Some(base) => Ok(Url::parse(base)?.join(url)?),
			None => Err(url::ParseError::RelativeUrlWithoutBase.into()),
		},
		Err(err) => Err(err.into()),
	}
}

/// Builds a request from `options`, setting the CSRF header when a token is
/// given. The token replaces any `X-CSRFToken` header the caller passed.
pub fn build_request(
	client: &Client,
	url: Url,
	options: FetchOptions,
	token: Option<&str>,
) -> Result<Request, FetchError> {
	let mut builder = client.request(options.method, url);
	for (name, value) in options.headers {
		builder = builder.header(name, value);
	}
	if let Some(body) = options.body {
		builder = builder.body(body);
	}

	let mut request = builder.build()?;
	if let Some(token) = token {
		request.headers_mut().insert(
			HeaderName::from_static("x-csrftoken"),
			HeaderValue::from_str(token)?,
		);
	}
	Ok(request)
}

#[cfg(target_arch = "wasm32")]
fn current_location() -> Option<String> {
	web_sys::window()?.location().href().ok()
}

#[cfg(not(target_arch = "wasm32"))]
fn current_location() -> Option<String> {
	None
}

/// Sends a request carrying the page's CSRF token.
///
/// Relative URLs are resolved against the current page location. The
/// response is returned as-is; HTTP error statuses are not turned into
/// errors.
pub async fn fetch_with_csrf(url: &str, options: FetchOptions) -> Result<reqwest::Response, FetchError> {
	let url = resolve_url(current_location().as_deref(), url)?;
	let client = Client::new();
	let request = build_request(&client, url, options, get_csrf_token().as_deref())?;
	Ok(client.execute(request).await?)
}

#[cfg(target_arch = "wasm32")]
mod js {
	use js_sys::{Object, Promise, Reflect};
	use wasm_bindgen::JsCast;
	use wasm_bindgen::prelude::*;
	use web_sys::{Headers, RequestInit};

	use super::{CSRF_HEADER_NAME, get_csrf_token};

	fn headers_of(options: &JsValue) -> Result<JsValue, JsValue> {
		let headers = Reflect::get(options, &JsValue::from_str("headers"))?;
		if !headers.is_undefined() && !headers.is_null() {
			return Ok(headers);
		}
		let created: JsValue = Object::new().into();
		Reflect::set(options, &JsValue::from_str("headers"), &created)?;
		Ok(created)
	}

	/// `fetchWithCSRF(url, options)`: `window.fetch` with the CSRF header.
	#[wasm_bindgen(js_name = fetchWithCSRF)]
	pub fn fetch_with_csrf_js(url: &str, options: Option<Object>) -> Result<Promise, JsValue> {
		let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window object"))?;
		let options: JsValue = options.unwrap_or_else(Object::new).into();
		let headers = headers_of(&options)?;

		if let Some(token) = get_csrf_token() {
			match headers.dyn_ref::<Headers>() {
				Some(headers) => headers.set(CSRF_HEADER_NAME, &token)?,
				None => {
					Reflect::set(
						&headers,
						&JsValue::from_str(CSRF_HEADER_NAME),
						&JsValue::from_str(&token),
					)?;
				}
			}
		}

		Ok(window.fetch_with_str_and_init(url, options.unchecked_ref::<RequestInit>()))
	}
}
