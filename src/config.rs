use crate::attrs::apply_data_attributes;
use effects_core::EffectsConfig;
use web_sys as web;

/// Default config with any `<body data-effects-*>` switches applied.
pub fn from_document(document: &web::Document) -> EffectsConfig {
    let mut config = EffectsConfig::default();
    let Some(body) = document.body() else {
        return config;
    };
    let names = body.get_attribute_names();
    let attributes = names
        .iter()
        .filter_map(|name| name.as_string())
        .filter_map(|name| body.get_attribute(&name).map(|value| (name, value)));
    let applied = apply_data_attributes(&mut config, attributes);
    if applied > 0 {
        log::info!("[effects] {} switch(es) from <body>", applied);
    }
    config
}
