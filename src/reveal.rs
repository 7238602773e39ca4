use crate::dom::{self, js_err};
use effects_core::constants::*;
use effects_core::{stagger_delay_css, EffectsConfig, EffectsError, RevealState};
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, web::IntersectionObserver)>;

/// Fades sections (and their cards) in the first time they scroll into view.
pub struct ScrollReveal {
    observer: web::IntersectionObserver,
    _callback: ObserverCallback,
}

impl ScrollReveal {
    pub fn start(
        document: &web::Document,
        config: &EffectsConfig,
    ) -> Result<Option<Self>, EffectsError> {
        let sections = dom::query_all(document, REVEAL_SECTION_SELECTOR);
        if sections.is_empty() {
            log::debug!("[reveal] no sections, disabled");
            return Ok(None);
        }

        let children = dom::query_all(document, REVEAL_CHILD_SELECTOR);
        for child in &children {
            _ = child.class_list().add_1(CHILD_PENDING_CLASS);
        }

        let stagger = config.reveal_stagger;
        let callback: ObserverCallback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: web::IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                        continue;
                    };
                    let section = entry.target();
                    let state = reveal_state(&section);
                    if state.observe(entry.is_intersecting()) != state {
                        reveal_section(&section, stagger);
                        // terminal, no need to hear about this one again
                        observer.unobserve(&section);
                    }
                }
            },
        ) as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

        let init = web::IntersectionObserverInit::new();
        init.set_root_margin(REVEAL_ROOT_MARGIN);
        init.set_threshold(&JsValue::from_f64(config.reveal_threshold));
        let observer =
            web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
                .map_err(js_err("IntersectionObserver"))?;

        for section in &sections {
            _ = section.class_list().add_1(SECTION_PENDING_CLASS);
            observer.observe(section);
        }
        log::info!(
            "[reveal] watching {} sections, {} cards",
            sections.len(),
            children.len()
        );

        Ok(Some(Self {
            observer,
            _callback: callback,
        }))
    }
}

impl Drop for ScrollReveal {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn reveal_state(el: &web::Element) -> RevealState {
    if el.class_list().contains(REVEALED_CLASS) {
        RevealState::Revealed
    } else {
        RevealState::Pending
    }
}

/// Mark a section revealed and stagger its cards by index.
fn reveal_section(section: &web::Element, stagger: Duration) {
    _ = section.class_list().add_1(REVEALED_CLASS);
    let children = dom::query_all_in(section, &format!(".{}", CHILD_PENDING_CLASS));
    for (index, child) in children.iter().enumerate() {
        if let Some(html) = child.dyn_ref::<web::HtmlElement>() {
            dom::set_style(html, "transition-delay", &stagger_delay_css(index, stagger));
        }
        _ = child.class_list().add_1(REVEALED_CLASS);
    }
    log::debug!("[reveal] section revealed with {} cards", children.len());
}
