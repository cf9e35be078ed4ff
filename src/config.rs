use crate::constants::{CONFIG_SCRIPT_ID, HERO_BG_SELECTOR};
use crate::dom;
use folio_core::SiteConfig;
use web_sys as web;

/// Read the inline JSON config block. Absent → defaults; malformed → warning
/// and defaults, so a typo never blanks the page.
pub fn load(document: &web::Document) -> SiteConfig {
    let Some(text) = document
        .get_element_by_id(CONFIG_SCRIPT_ID)
        .and_then(|el| el.text_content())
    else {
        log::info!("[config] no #{} block, using defaults", CONFIG_SCRIPT_ID);
        return SiteConfig::default();
    };
    match SiteConfig::from_json(&text) {
        Ok(cfg) => cfg,
        Err(e) => {
            log::warn!("[config] {e}; using defaults");
            SiteConfig::default()
        }
    }
}

/// Apply the hero background image. Load failures are not handled.
pub fn apply_background_image(document: &web::Document, url: &str) {
    for el in dom::query_all(document, HERO_BG_SELECTOR) {
        _ = el
            .style()
            .set_property("background-image", &format!("url(\"{}\")", url));
    }
}
