use std::cell::RefCell;

use folio_core::nav::DEFAULT_SCROLL_OFFSET;
use folio_core::{RevealOptions, Threshold};

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct SiteConfig {
    pub(crate) reveal: RevealOptions,
    pub(crate) header_scroll_offset: f64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            reveal: RevealOptions::default(),
            header_scroll_offset: DEFAULT_SCROLL_OFFSET,
        }
    }
}

thread_local! {
    static SITE_CONFIG: RefCell<Option<SiteConfig>> = RefCell::new(None);
}

pub(crate) fn site_config() -> SiteConfig {
    SITE_CONFIG.with(|slot| {
        slot.borrow_mut()
            .get_or_insert_with(|| {
                load_site_config(
                    option_env!("FOLIO_REVEAL_THRESHOLD"),
                    option_env!("FOLIO_HEADER_SCROLL_OFFSET"),
                )
            })
            .clone()
    })
}

fn load_site_config(threshold: Option<&str>, scroll_offset: Option<&str>) -> SiteConfig {
    let defaults = SiteConfig::default();
    let reveal = match threshold.map(str::trim).filter(|raw| !raw.is_empty()) {
        Some(raw) => match parse_threshold(raw) {
            Some(value) => RevealOptions::with_threshold(value),
            None => {
                gloo::console::warn!("config: ignoring invalid FOLIO_REVEAL_THRESHOLD", raw);
                defaults.reveal
            }
        },
        None => defaults.reveal,
    };
    let header_scroll_offset = scroll_offset
        .and_then(|raw| raw.trim().parse::<f64>().ok())
        .filter(|value| value.is_finite() && *value >= 0.0)
        .unwrap_or(defaults.header_scroll_offset);
    SiteConfig {
        reveal,
        header_scroll_offset,
    }
}

fn parse_threshold(raw: &str) -> Option<f64> {
    let value = raw.parse::<f64>().ok()?;
    Threshold::new(value).ok().map(Threshold::value)
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn unset_values_use_defaults() {
        assert_eq!(load_site_config(None, None), SiteConfig::default());
        assert_eq!(load_site_config(Some("  "), Some("")), SiteConfig::default());
    }

    #[wasm_bindgen_test]
    fn valid_overrides_apply() {
        let config = load_site_config(Some("0.25"), Some("120"));
        assert_eq!(config.reveal.visibility_threshold, 0.25);
        assert_eq!(config.header_scroll_offset, 120.0);
    }

    #[wasm_bindgen_test]
    fn out_of_range_values_fall_back() {
        let config = load_site_config(Some("1.5"), Some("-3"));
        assert_eq!(config, SiteConfig::default());
    }
}
