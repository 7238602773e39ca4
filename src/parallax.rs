use crate::dom::{self, EventListener};
use effects_core::constants::{HERO_GRID_SELECTOR, PIPELINE_SELECTOR};
use effects_core::{
    parallax_transform, tilt_for_cursor, Bounds, EffectsConfig, EffectsError, Tilt, TiltTransition,
};
use glam::DVec2;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Scroll-driven background drift and cursor-driven pipeline tilt.
pub struct ParallaxController {
    _listeners: Vec<EventListener>,
}

impl ParallaxController {
    pub fn start(
        window: &web::Window,
        document: &web::Document,
        config: &EffectsConfig,
    ) -> Result<Option<Self>, EffectsError> {
        let mut listeners = Vec::new();

        if let Some(grid) = dom::query_html(document, HERO_GRID_SELECTOR) {
            let w = window.clone();
            let factor = config.parallax_factor;
            listeners.push(EventListener::new(window, "scroll", move |_| {
                let transform = parallax_transform(dom::page_y_offset(&w), factor);
                dom::set_style(&grid, "transform", &transform);
            })?);
        } else {
            log::debug!("[parallax] no {}, background drift disabled", HERO_GRID_SELECTOR);
        }

        if let Some(pipeline) = dom::query_html(document, PIPELINE_SELECTOR) {
            listeners.extend(wire_tilt(&pipeline, config)?);
        } else {
            log::debug!("[parallax] no {}, tilt disabled", PIPELINE_SELECTOR);
        }

        if listeners.is_empty() {
            return Ok(None);
        }
        Ok(Some(Self {
            _listeners: listeners,
        }))
    }
}

fn wire_tilt(
    pipeline: &web::HtmlElement,
    config: &EffectsConfig,
) -> Result<[EventListener; 3], EffectsError> {
    let divisor = config.tilt_divisor_px;
    let perspective = config.tilt_perspective_px;

    let el = pipeline.clone();
    let on_move = EventListener::new(pipeline, "mousemove", move |ev| {
        let Some(mouse) = ev.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        let rect = el.get_bounding_client_rect();
        let bounds = Bounds {
            left: rect.left(),
            top: rect.top(),
            width: rect.width(),
            height: rect.height(),
        };
        let cursor = DVec2::new(mouse.client_x() as f64, mouse.client_y() as f64);
        let tilt = tilt_for_cursor(&bounds, cursor, divisor);
        dom::set_style(&el, "transform", &tilt.to_css(perspective));
    })?;

    let el = pipeline.clone();
    let on_leave = EventListener::new(pipeline, "mouseleave", move |_| {
        dom::set_style(&el, "transform", &Tilt::NEUTRAL.to_css(perspective));
        dom::set_style(&el, "transition", TiltTransition::Leave.css());
    })?;

    let el = pipeline.clone();
    let on_enter = EventListener::new(pipeline, "mouseenter", move |_| {
        dom::set_style(&el, "transition", TiltTransition::Enter.css());
    })?;

    Ok([on_move, on_leave, on_enter])
}
