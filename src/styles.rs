use crate::dom::js_err;
use effects_core::constants::STYLE_ELEMENT_ID;
use effects_core::{EffectsError, StyleSheet};
use web_sys as web;

/// The `<style>` element this controller inserted, removed on drop.
///
/// Holds nothing when a sheet was already present, so a second controller
/// never duplicates rules and never removes someone else's.
pub struct InstalledStyles {
    element: Option<web::Element>,
}

pub fn install(
    document: &web::Document,
    sheet: &StyleSheet,
) -> Result<InstalledStyles, EffectsError> {
    if sheet.is_empty() {
        return Ok(InstalledStyles { element: None });
    }
    if document.get_element_by_id(STYLE_ELEMENT_ID).is_some() {
        log::debug!("[styles] #{} already installed", STYLE_ELEMENT_ID);
        return Ok(InstalledStyles { element: None });
    }
    let head = document
        .head()
        .ok_or_else(|| EffectsError::js("document.head", "missing <head>"))?;
    let style = document
        .create_element("style")
        .map_err(js_err("createElement"))?;
    style.set_id(STYLE_ELEMENT_ID);
    style.set_text_content(Some(&sheet.css()));
    head.append_child(&style).map_err(js_err("appendChild"))?;
    log::info!(
        "[styles] installed {}",
        sheet.names().collect::<Vec<_>>().join(", ")
    );
    Ok(InstalledStyles {
        element: Some(style),
    })
}

impl Drop for InstalledStyles {
    fn drop(&mut self) {
        if let Some(el) = self.element.take() {
            el.remove();
        }
    }
}
