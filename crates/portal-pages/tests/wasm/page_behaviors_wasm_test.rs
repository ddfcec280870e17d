//! Browser tests for the page behaviors
//!
//! Each test mounts a small server-rendered fragment, attaches the behavior
//! under test and drives it with synthetic DOM events.
//!
//! Run with:
//!   wasm-pack test --chrome --headless crates/portal-pages

#![cfg(target_arch = "wasm32")]

use gloo_timers::future::TimeoutFuture;
use portal_pages::behaviors::{
	Behavior, alerts, autoresize, char_counter, clipboard, dropdown, loading, password,
	table_search, tooltip, validation,
};
use portal_pages::{PageConfig, attach_page_behaviors};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, Element, Event, EventInit, HtmlElement, HtmlInputElement};

wasm_bindgen_test_configure!(run_in_browser);

/// A fragment appended to `<body>`, removed when dropped.
struct Fixture {
	root: Element,
}

impl Fixture {
	fn mount(html: &str) -> Self {
		let root = document().create_element("div").unwrap();
		root.set_inner_html(html);
		document().body().unwrap().append_child(&root).unwrap();
		Self { root }
	}

	fn find(&self, selector: &str) -> Element {
		self.root
			.query_selector(selector)
			.unwrap()
			.unwrap_or_else(|| panic!("fixture has no {}", selector))
	}
}

impl Drop for Fixture {
	fn drop(&mut self) {
		self.root.remove();
	}
}

fn document() -> Document {
	web_sys::window().unwrap().document().unwrap()
}

fn dispatch(target: &Element, event_type: &str) {
	let event = Event::new(event_type).unwrap();
	target.dispatch_event(&event).unwrap();
}

fn click(target: &Element) {
	target.dyn_ref::<HtmlElement>().unwrap().click();
}

fn style(element: &Element, property: &str) -> String {
	element
		.dyn_ref::<HtmlElement>()
		.unwrap()
		.style()
		.get_property_value(property)
		.unwrap()
}

fn has_class(element: &Element, class: &str) -> bool {
	element.class_list().contains(class)
}

#[wasm_bindgen_test]
async fn test_alert_fades_and_is_removed() {
	let fixture = Fixture::mount(r#"<div class="alert alert-success" id="t-alert">Guardado</div>"#);
	let alert = fixture.find("#t-alert");
	let config = PageConfig {
		alert_dismiss_ms: 10,
		fade_ms: 10,
		..PageConfig::default()
	};

	let count = alerts::attach(&document(), &config).unwrap();
	assert!(count >= 1);
	assert!(alert.is_connected());

	TimeoutFuture::new(80).await;
	assert!(!alert.is_connected());
}

#[wasm_bindgen_test]
fn test_password_toggle_by_target_attribute() {
	let fixture = Fixture::mount(
		r#"<input type="password" id="t-pw" value="secreto">
		<span>separator</span>
		<button type="button" class="password-toggle" data-toggle-target="t-pw">👁</button>"#,
	);
	let config = PageConfig::default();
	password::attach(&document(), &config).unwrap();

	let toggle = fixture.find(".password-toggle");
	let input: HtmlInputElement = fixture.find("#t-pw").dyn_into().unwrap();

	click(&toggle);
	assert_eq!(input.type_(), "text");
	assert_eq!(toggle.text_content().unwrap(), config.messages.icon_plain);

	click(&toggle);
	assert_eq!(input.type_(), "password");
	assert_eq!(toggle.text_content().unwrap(), config.messages.icon_masked);
}

#[wasm_bindgen_test]
fn test_password_toggle_previous_sibling_fallback() {
	let fixture = Fixture::mount(
		r#"<input type="password" id="t-pw2"><button type="button" class="password-toggle">👁</button>"#,
	);
	password::attach(&document(), &PageConfig::default()).unwrap();

	click(&fixture.find(".password-toggle"));
	let input: HtmlInputElement = fixture.find("#t-pw2").dyn_into().unwrap();
	assert_eq!(input.type_(), "text");
}

#[wasm_bindgen_test]
fn test_required_field_validation() {
	let fixture = Fixture::mount(r#"<form><input name="nombre" required id="t-required"></form>"#);
	validation::attach(&document(), &PageConfig::default()).unwrap();
	let field = fixture.find("#t-required");

	dispatch(&field, "blur");
	assert!(has_class(&field, validation::INVALID_CLASS));
	assert!(!has_class(&field, validation::VALID_CLASS));

	field
		.dyn_ref::<HtmlInputElement>()
		.unwrap()
		.set_value("Ana");
	dispatch(&field, "input");
	assert!(has_class(&field, validation::VALID_CLASS));
	assert!(!has_class(&field, validation::INVALID_CLASS));
}

#[wasm_bindgen_test]
fn test_valid_field_not_revalidated_while_typing() {
	let fixture = Fixture::mount(r#"<form><input required id="t-typing" value="x"></form>"#);
	validation::attach(&document(), &PageConfig::default()).unwrap();
	let field = fixture.find("#t-typing");

	dispatch(&field, "blur");
	assert!(has_class(&field, validation::VALID_CLASS));

	field.dyn_ref::<HtmlInputElement>().unwrap().set_value("");
	dispatch(&field, "input");
	// Only blur marks a valid field invalid.
	assert!(has_class(&field, validation::VALID_CLASS));
}

#[wasm_bindgen_test]
fn test_textarea_grows_to_content() {
	let fixture = Fixture::mount(r#"<textarea id="t-grow" rows="1"></textarea>"#);
	autoresize::attach(&document(), &PageConfig::default()).unwrap();
	let textarea = fixture.find("#t-grow");

	textarea
		.dyn_ref::<web_sys::HtmlTextAreaElement>()
		.unwrap()
		.set_value("una\ndos\ntres\ncuatro\ncinco");
	dispatch(&textarea, "input");

	let height = style(&textarea, "height");
	assert!(height.ends_with("px"), "unexpected height {:?}", height);
	let pixels: f64 = height.trim_end_matches("px").parse().unwrap();
	assert!(pixels > 0.0);
}

#[wasm_bindgen_test]
fn test_table_search_hides_non_matching_rows() {
	let fixture = Fixture::mount(
		r#"<input id="t-search" data-table-search="t-clientes">
		<table id="t-clientes">
			<thead><tr><th>Nombre</th></tr></thead>
			<tbody>
				<tr id="t-ana"><td>Ana García</td></tr>
				<tr id="t-luis"><td>Luis Pérez</td></tr>
			</tbody>
		</table>"#,
	);
	let count = table_search::attach(&document(), &PageConfig::default()).unwrap();
	assert!(count >= 1);

	let search = fixture.find("#t-search");
	let input = search.dyn_ref::<HtmlInputElement>().unwrap();

	input.set_value("GARC");
	dispatch(&search, "input");
	assert_eq!(style(&fixture.find("#t-ana"), "display"), "");
	assert_eq!(style(&fixture.find("#t-luis"), "display"), "none");

	input.set_value("");
	dispatch(&search, "input");
	assert_eq!(style(&fixture.find("#t-luis"), "display"), "");
}

#[wasm_bindgen_test]
fn test_table_search_without_table_is_skipped() {
	let _fixture = Fixture::mount(r#"<input data-table-search="t-missing-table">"#);
	let before = document()
		.query_selector_all(table_search::SELECTOR)
		.unwrap()
		.length() as usize;

	let count = table_search::attach(&document(), &PageConfig::default()).unwrap();
	assert!(count < before);
}

#[wasm_bindgen_test]
fn test_char_counter_updates_on_input() {
	let fixture = Fixture::mount(
		r#"<div><textarea id="t-count" data-char-count="25"></textarea></div>"#,
	);
	let config = PageConfig::default();
	char_counter::attach(&document(), &config).unwrap();

	let counter = fixture.find("small.char-counter");
	assert_eq!(counter.text_content().unwrap(), "25 caracteres restantes");
	assert_eq!(style(&counter, "color"), char_counter::NEUTRAL_COLOR);

	let textarea = fixture.find("#t-count");
	textarea
		.dyn_ref::<web_sys::HtmlTextAreaElement>()
		.unwrap()
		.set_value("hola");
	dispatch(&textarea, "input");
	assert_eq!(counter.text_content().unwrap(), "21 caracteres restantes");

	textarea
		.dyn_ref::<web_sys::HtmlTextAreaElement>()
		.unwrap()
		.set_value("hola mundo");
	dispatch(&textarea, "input");
	assert_eq!(counter.text_content().unwrap(), "15 caracteres restantes");
	assert_eq!(style(&counter, "color"), char_counter::DANGER_COLOR);
}

#[wasm_bindgen_test]
fn test_char_counter_skips_unreadable_maximum() {
	let fixture = Fixture::mount(r#"<div><textarea data-char-count="mucho"></textarea></div>"#);
	char_counter::attach(&document(), &PageConfig::default()).unwrap();
	assert!(fixture.root.query_selector("small.char-counter").unwrap().is_none());
}

#[wasm_bindgen_test]
fn test_tooltip_shows_and_hides_per_anchor() {
	let fixture = Fixture::mount(
		r#"<button id="t-tip-a" data-tooltip="Editar">E</button>
		<button id="t-tip-b" data-tooltip="Borrar">B</button>"#,
	);
	tooltip::attach(&document(), &PageConfig::default()).unwrap();
	let first = fixture.find("#t-tip-a");
	let second = fixture.find("#t-tip-b");
	let tooltips = || document().query_selector_all(".tooltip").unwrap().length();

	dispatch(&first, "mouseenter");
	dispatch(&second, "mouseenter");
	assert_eq!(tooltips(), 2);

	dispatch(&first, "mouseleave");
	assert_eq!(tooltips(), 1);
	let remaining = document().query_selector(".tooltip").unwrap().unwrap();
	assert_eq!(remaining.text_content().unwrap(), "Borrar");
	assert!(style(&remaining, "top").ends_with("px"));

	dispatch(&second, "mouseleave");
	assert_eq!(tooltips(), 0);
}

#[wasm_bindgen_test]
fn test_dropdown_toggles_and_closes_on_outside_click() {
	let fixture = Fixture::mount(
		r#"<div class="user-dropdown" id="t-dd-a">
			<a class="dropdown-toggle" id="t-dd-a-toggle">Cuenta</a>
			<div class="dropdown-menu"></div>
		</div>
		<div class="user-dropdown" id="t-dd-b">
			<a class="dropdown-toggle" id="t-dd-b-toggle">Ayuda</a>
			<div class="dropdown-menu"></div>
		</div>
		<p id="t-outside">contenido</p>"#,
	);
	let config = PageConfig {
		mobile_breakpoint_px: f64::MAX,
		..PageConfig::default()
	};
	dropdown::attach(&document(), &config).unwrap();

	let menu_a = fixture.find("#t-dd-a .dropdown-menu");
	let menu_b = fixture.find("#t-dd-b .dropdown-menu");

	click(&fixture.find("#t-dd-a-toggle"));
	assert!(has_class(&menu_a, dropdown::OPEN_CLASS));

	click(&fixture.find("#t-dd-b-toggle"));
	assert!(!has_class(&menu_a, dropdown::OPEN_CLASS));
	assert!(has_class(&menu_b, dropdown::OPEN_CLASS));

	click(&fixture.find("#t-outside"));
	assert!(!has_class(&menu_b, dropdown::OPEN_CLASS));
}

fn cancelable_submit() -> Event {
	let init = EventInit::new();
	init.set_cancelable(true);
	Event::new_with_event_init_dict("submit", &init).unwrap()
}

#[wasm_bindgen_test]
async fn test_submit_loading_restored_on_pageshow() {
	let fixture = Fixture::mount(
		r#"<form id="t-load-form" action="javascript:void(0)">
			<button type="submit" id="t-load-btn"><b>Guardar</b></button>
		</form>"#,
	);
	let config = PageConfig::default();
	loading::attach(&document(), &config).unwrap();

	let form = fixture.find("#t-load-form");
	let button: web_sys::HtmlButtonElement = fixture.find("#t-load-btn").dyn_into().unwrap();

	form.dispatch_event(&cancelable_submit()).unwrap();
	assert!(button.disabled());
	assert!(button.query_selector(".loading-spinner").unwrap().is_some());
	assert!(button.text_content().unwrap().contains(&config.messages.processing));
	assert_eq!(
		button.get_attribute(loading::ORIGINAL_TEXT_ATTRIBUTE).as_deref(),
		Some("<b>Guardar</b>")
	);

	TimeoutFuture::new(10).await;
	assert!(button.disabled());

	let window = web_sys::window().unwrap();
	window.dispatch_event(&Event::new("pageshow").unwrap()).unwrap();
	assert!(!button.disabled());
	assert_eq!(button.inner_html(), "<b>Guardar</b>");
}

#[wasm_bindgen_test]
async fn test_submit_loading_restored_when_cancelled_later() {
	let fixture = Fixture::mount(
		r#"<form id="t-cancel-form" action="javascript:void(0)">
			<button type="submit" id="t-cancel-btn">Enviar</button>
		</form>"#,
	);
	loading::attach(&document(), &PageConfig::default()).unwrap();

	let form = fixture.find("#t-cancel-form");
	// Registered after the loading listener, like an inline validation script.
	let veto = wasm_bindgen::closure::Closure::<dyn FnMut(Event)>::new(|event: Event| {
		event.prevent_default();
	});
	form.add_event_listener_with_callback("submit", veto.as_ref().unchecked_ref())
		.unwrap();

	let button: web_sys::HtmlButtonElement = fixture.find("#t-cancel-btn").dyn_into().unwrap();
	form.dispatch_event(&cancelable_submit()).unwrap();
	assert!(button.disabled());

	TimeoutFuture::new(20).await;
	assert!(!button.disabled());
	assert_eq!(button.inner_html(), "Enviar");
	drop(veto);
}

#[wasm_bindgen_test]
async fn test_submit_loading_restored_by_timer() {
	let fixture = Fixture::mount(
		r#"<form id="t-timer-form" action="javascript:void(0)">
			<button type="submit" id="t-timer-btn">Enviar</button>
		</form>"#,
	);
	let config = PageConfig {
		loading_restore_ms: 30,
		..PageConfig::default()
	};
	loading::attach(&document(), &config).unwrap();

	let button: web_sys::HtmlButtonElement = fixture.find("#t-timer-btn").dyn_into().unwrap();
	fixture
		.find("#t-timer-form")
		.dispatch_event(&cancelable_submit())
		.unwrap();
	assert!(button.disabled());

	TimeoutFuture::new(100).await;
	assert!(!button.disabled());
	assert_eq!(button.inner_html(), "Enviar");
}

#[wasm_bindgen_test]
fn test_attach_page_behaviors_reports_counts() {
	let _fixture = Fixture::mount(
		r#"<input data-table-search="t-report-table">
		<table id="t-report-table"><tbody><tr><td>x</td></tr></tbody></table>"#,
	);
	let disabled = Behavior::ALL
		.into_iter()
		.filter(|b| *b != Behavior::TableSearch)
		.collect();
	let config = PageConfig {
		disabled,
		..PageConfig::default()
	};

	let report = attach_page_behaviors(&document(), &config);
	assert!(report.is_clean());
	assert_eq!(report.skipped.len(), Behavior::ALL.len() - 1);
	assert!(report.count_for(Behavior::TableSearch).unwrap() >= 1);
}

/// Replaces `window.confirm` with a stub answering `answer`; the original is
/// put back on drop.
struct ConfirmStub {
	original: wasm_bindgen::JsValue,
	_stub: wasm_bindgen::closure::Closure<dyn FnMut() -> bool>,
}

impl ConfirmStub {
	fn answering(answer: bool) -> Self {
		let window = web_sys::window().unwrap();
		let original = js_sys::Reflect::get(&window, &"confirm".into()).unwrap();
		let stub = wasm_bindgen::closure::Closure::<dyn FnMut() -> bool>::new(move || answer);
		js_sys::Reflect::set(&window, &"confirm".into(), stub.as_ref()).unwrap();
		Self {
			original,
			_stub: stub,
		}
	}
}

impl Drop for ConfirmStub {
	fn drop(&mut self) {
		let window = web_sys::window().unwrap();
		js_sys::Reflect::set(&window, &"confirm".into(), &self.original).unwrap();
	}
}

fn confirm_and_loading_only() -> PageConfig {
	PageConfig {
		disabled: Behavior::ALL
			.into_iter()
			.filter(|b| !matches!(b, Behavior::ConfirmSubmit | Behavior::SubmitLoading))
			.collect(),
		..PageConfig::default()
	}
}

#[wasm_bindgen_test]
fn test_declined_confirmation_never_shows_loading() {
	let _stub = ConfirmStub::answering(false);
	let fixture = Fixture::mount(
		r#"<form id="t-confirm-no" data-confirm="¿Eliminar la póliza?" action="javascript:void(0)">
			<button type="submit" id="t-confirm-no-btn">Eliminar</button>
		</form>"#,
	);
	let report = attach_page_behaviors(&document(), &confirm_and_loading_only());
	assert!(report.is_clean());

	let button: web_sys::HtmlButtonElement = fixture.find("#t-confirm-no-btn").dyn_into().unwrap();
	let submit = cancelable_submit();
	let not_cancelled = fixture.find("#t-confirm-no").dispatch_event(&submit).unwrap();

	assert!(!not_cancelled);
	assert!(submit.default_prevented());
	assert!(!button.disabled());
	assert_eq!(button.inner_html(), "Eliminar");
	assert!(button.get_attribute(loading::ORIGINAL_TEXT_ATTRIBUTE).is_none());
}

#[wasm_bindgen_test]
fn test_accepted_confirmation_proceeds_to_loading() {
	let _stub = ConfirmStub::answering(true);
	let fixture = Fixture::mount(
		r#"<form id="t-confirm-yes" data-confirm="" action="javascript:void(0)">
			<button type="submit" id="t-confirm-yes-btn">Guardar</button>
		</form>"#,
	);
	attach_page_behaviors(&document(), &confirm_and_loading_only());

	let button: web_sys::HtmlButtonElement = fixture.find("#t-confirm-yes-btn").dyn_into().unwrap();
	let submit = cancelable_submit();
	let not_cancelled = fixture.find("#t-confirm-yes").dispatch_event(&submit).unwrap();

	assert!(not_cancelled);
	assert!(!submit.default_prevented());
	assert!(button.disabled());
	assert!(button.query_selector(".loading-spinner").unwrap().is_some());

	let window = web_sys::window().unwrap();
	window.dispatch_event(&Event::new("pageshow").unwrap()).unwrap();
	assert!(!button.disabled());
}

#[wasm_bindgen_test]
async fn test_copy_without_clipboard_api_leaves_label() {
	let navigator = web_sys::window().unwrap().navigator();
	// Shadow the prototype getter the way an insecure context exposes it.
	let descriptor = js_sys::Object::new();
	js_sys::Reflect::set(&descriptor, &"value".into(), &wasm_bindgen::JsValue::UNDEFINED).unwrap();
	js_sys::Reflect::set(&descriptor, &"configurable".into(), &true.into()).unwrap();
	js_sys::Object::define_property(&navigator, &"clipboard".into(), &descriptor);

	let fixture = Fixture::mount(r#"<button type="button" id="t-copy" data-copy="POL-2024-001">Copiar</button>"#);
	clipboard::attach(&document(), &PageConfig::default()).unwrap();
	let button = fixture.find("#t-copy");

	click(&button);
	TimeoutFuture::new(20).await;
	assert_eq!(button.text_content().unwrap(), "Copiar");

	js_sys::Reflect::delete_property(&navigator, &"clipboard".into()).unwrap();
}
