use effects_core::EffectsError;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

pub fn window_document() -> Result<(web::Window, web::Document), EffectsError> {
    let window = web::window().ok_or(EffectsError::NoWindow)?;
    let document = window.document().ok_or(EffectsError::NoDocument)?;
    Ok((window, document))
}

/// Adapter for `map_err` on web-sys calls.
#[inline]
pub fn js_err(op: &'static str) -> impl Fn(JsValue) -> EffectsError {
    move |e| EffectsError::js(op, format!("{:?}", e))
}

/// First match for `selector`; an invalid selector counts as no match.
#[inline]
pub fn query(document: &web::Document, selector: &str) -> Option<web::Element> {
    document.query_selector(selector).ok().flatten()
}

#[inline]
pub fn query_html(document: &web::Document, selector: &str) -> Option<web::HtmlElement> {
    query(document, selector).and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::Element> {
    document
        .query_selector_all(selector)
        .map(|list| node_list_elements(&list))
        .unwrap_or_default()
}

pub fn query_all_in(root: &web::Element, selector: &str) -> Vec<web::Element> {
    root.query_selector_all(selector)
        .map(|list| node_list_elements(&list))
        .unwrap_or_default()
}

fn node_list_elements(list: &web::NodeList) -> Vec<web::Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web::Element>().ok())
        .collect()
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    if let Err(e) = el.style().set_property(property, value) {
        log::warn!("[dom] style {}={} failed: {:?}", property, value, e);
    }
}

#[inline]
pub fn page_y_offset(window: &web::Window) -> f64 {
    window.page_y_offset().unwrap_or(0.0)
}

#[inline]
fn millis(d: Duration) -> i32 {
    d.as_millis().min(i32::MAX as u128) as i32
}

/// An event listener that stays attached for as long as this handle lives.
pub struct EventListener {
    target: web::EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(web::Event)>,
}

impl EventListener {
    pub fn new(
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> Result<Self, EffectsError> {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        target
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .map_err(js_err("addEventListener"))?;
        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        _ = self.target.remove_event_listener_with_callback(
            self.event,
            self.callback.as_ref().unchecked_ref(),
        );
    }
}

/// A repeating timer, cleared when the handle is dropped.
pub struct Interval {
    window: web::Window,
    handle: i32,
    _callback: Closure<dyn FnMut()>,
}

impl Interval {
    pub fn new(
        window: &web::Window,
        period: Duration,
        handler: impl FnMut() + 'static,
    ) -> Result<Self, EffectsError> {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
        let handle = window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                millis(period),
            )
            .map_err(js_err("setInterval"))?;
        Ok(Self {
            window: window.clone(),
            handle,
            _callback: callback,
        })
    }
}

impl Drop for Interval {
    fn drop(&mut self) {
        self.window.clear_interval_with_handle(self.handle);
    }
}

/// Fire-and-forget timeout. The closure frees itself after running, so it
/// outlives whatever scheduled it.
pub fn set_timeout_once(
    window: &web::Window,
    delay: Duration,
    f: impl FnOnce() + 'static,
) -> Result<i32, EffectsError> {
    let callback = Closure::once_into_js(f);
    window
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.unchecked_ref(),
            millis(delay),
        )
        .map_err(js_err("setTimeout"))
}
