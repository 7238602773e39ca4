use crate::dom::{self, EventListener};
use effects_core::constants::*;
use effects_core::{
    fragment_selector, header_height, scroll_target_top, shadow_visible, EffectsConfig,
    EffectsError, MenuState, NavWiring,
};
use std::cell::Cell;
use std::rc::Rc;
use web_sys as web;

/// Mobile menu elements plus their shared open/closed state.
#[derive(Clone)]
struct Menu {
    links: Option<web::Element>,
    button: Option<web::Element>,
    state: Rc<Cell<MenuState>>,
}

impl Menu {
    fn find(document: &web::Document) -> Self {
        let links = dom::query(document, NAV_LINKS_SELECTOR);
        let button = dom::query(document, MENU_BUTTON_SELECTOR);
        let open = links
            .as_ref()
            .map(|l| l.class_list().contains(MENU_OPEN_CLASS))
            .unwrap_or(false);
        Self {
            links,
            button,
            state: Rc::new(Cell::new(MenuState::from_open_class(open))),
        }
    }

    fn set(&self, next: MenuState) {
        self.state.set(next);
        let [(links_class, links_on), (button_class, button_on)] = next.class_flags();
        if let Some(links) = &self.links {
            _ = links.class_list().toggle_with_force(links_class, links_on);
        }
        if let Some(button) = &self.button {
            _ = button.class_list().toggle_with_force(button_class, button_on);
        }
    }

    fn toggle(&self) {
        self.set(self.state.get().toggle());
    }

    fn close(&self) {
        self.set(self.state.get().close());
    }
}

/// Header shadow, mobile menu, and smooth in-page scrolling.
pub struct NavController {
    _listeners: Vec<EventListener>,
}

impl NavController {
    pub fn start(
        window: &web::Window,
        document: &web::Document,
        config: &EffectsConfig,
    ) -> Result<Option<Self>, EffectsError> {
        let nav = dom::query_html(document, NAV_SELECTOR);
        let menu = Menu::find(document);
        let anchors = dom::query_all(document, FRAGMENT_LINK_SELECTOR);
        let wiring = NavWiring::for_elements(
            nav.is_some(),
            menu.links.is_some(),
            menu.button.is_some(),
            anchors.len(),
        );
        if !wiring.any() {
            log::debug!("[nav] nothing to wire, disabled");
            return Ok(None);
        }
        let mut listeners = Vec::new();

        match &nav {
            Some(nav) if wiring.scroll_shadow => {
                listeners.push(wire_scroll_shadow(window, nav, config.shadow_threshold_px)?);
            }
            _ => log::debug!("[nav] no {}, scroll shadow disabled", NAV_SELECTOR),
        }

        match &menu.button {
            Some(button) if wiring.menu_toggle => {
                let menu = menu.clone();
                listeners.push(EventListener::new(button, "click", move |_| menu.toggle())?);
            }
            _ => log::debug!("[nav] mobile menu incomplete, toggle disabled"),
        }

        for anchor in &anchors {
            listeners.push(wire_fragment_link(
                window,
                document,
                anchor,
                nav.as_ref(),
                &menu,
                config.scroll_margin_px,
            )?);
        }
        log::info!("[nav] wired {:?}, {} fragment links", wiring, anchors.len());

        Ok(Some(Self {
            _listeners: listeners,
        }))
    }
}

fn wire_scroll_shadow(
    window: &web::Window,
    nav: &web::HtmlElement,
    threshold: f64,
) -> Result<EventListener, EffectsError> {
    let nav = nav.clone();
    let w = window.clone();
    EventListener::new(window, "scroll", move |_| {
        let shadow = if shadow_visible(dom::page_y_offset(&w), threshold) {
            NAV_SHADOW
        } else {
            "none"
        };
        dom::set_style(&nav, "box-shadow", shadow);
    })
}

fn wire_fragment_link(
    window: &web::Window,
    document: &web::Document,
    anchor: &web::Element,
    nav: Option<&web::HtmlElement>,
    menu: &Menu,
    margin: f64,
) -> Result<EventListener, EffectsError> {
    let w = window.clone();
    let document = document.clone();
    let link = anchor.clone();
    let nav = nav.cloned();
    let menu = menu.clone();
    EventListener::new(anchor, "click", move |ev| {
        ev.prevent_default();
        let Some(href) = link.get_attribute("href") else {
            return;
        };
        let Some(target) = fragment_selector(&href).and_then(|sel| dom::query(&document, sel))
        else {
            log::debug!("[nav] {} resolves to nothing", href);
            return;
        };
        let top = scroll_target_top(
            target.get_bounding_client_rect().top(),
            dom::page_y_offset(&w),
            header_height(nav.as_ref().map(|n| n.offset_height() as f64)),
            margin,
        );
        let opts = web::ScrollToOptions::new();
        opts.set_top(top);
        opts.set_behavior(web::ScrollBehavior::Smooth);
        w.scroll_to_with_scroll_to_options(&opts);
        menu.close();
    })
}
