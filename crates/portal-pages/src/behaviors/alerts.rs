//! Alert auto-dismiss
//!
//! Server-rendered flash alerts fade out and disappear after a delay. Only
//! alerts present at attach time are covered.

#[cfg(target_arch = "wasm32")]
use crate::{config::PageConfig, dom, error::BehaviorError};

/// Selector of the alerts to dismiss.
pub const SELECTOR: &str = ".alert";

/// CSS `transition` value for a fade lasting `fade_ms`.
pub fn fade_transition(fade_ms: u32) -> String {
	format!("opacity {}s ease", f64::from(fade_ms) / 1000.0)
}

/// Schedules every alert on the page for dismissal.
#[cfg(target_arch = "wasm32")]
pub fn attach(document: &web_sys::Document, config: &PageConfig) -> Result<usize, BehaviorError> {
	let alerts = dom::query_all(document, SELECTOR)?;
	for alert in &alerts {
		let alert = alert.clone();
		let fade_ms = config.fade_ms;
		dom::schedule(config.alert_dismiss_ms, move || {
			dom::fade_out_and_remove(alert, fade_ms)
		});
	}
	Ok(alerts.len())
}
