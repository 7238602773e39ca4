use effects_core::constants::CONFIG_DATA_PREFIX;
use effects_core::EffectsConfig;

/// Overlay `data-effects-*` attributes onto `config`, returning how many took
/// effect. Other attributes are ignored.
pub fn apply_data_attributes<I, N, V>(config: &mut EffectsConfig, attributes: I) -> usize
where
    I: IntoIterator<Item = (N, V)>,
    N: AsRef<str>,
    V: AsRef<str>,
{
    attributes
        .into_iter()
        .filter(|(name, value)| {
            name.as_ref()
                .strip_prefix(CONFIG_DATA_PREFIX)
                .map(|flag| config.apply_flag(flag, value.as_ref()))
                .unwrap_or(false)
        })
        .count()
}
