// Browser smoke tests; run with `wasm-pack test --headless --chrome`.

#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn page_without_config_block_uses_defaults() {
    let window = web_sys::window().expect("window");
    let document = window.document().expect("document");
    let cfg = folio_web::site_config_from_document(&document);
    assert_eq!(cfg, folio_core::SiteConfig::default());
}

#[wasm_bindgen_test]
fn measured_boxes_ignore_css_transforms() {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .expect("document");
    let body = document.body().expect("body");
    body.style().set_property("margin", "0").unwrap();
    let el = document.create_element("div").unwrap();
    el.set_class_name("measure-me");
    el.set_attribute(
        "style",
        "position:absolute;left:20px;top:100px;width:50px;height:40px;transform:translateY(60px)",
    )
    .unwrap();
    body.append_child(&el).unwrap();

    let rects = folio_web::document_rects(&document, ".measure-me");
    body.remove_child(&el).unwrap();
    assert_eq!(rects.len(), 1);
    assert_eq!(rects[0], folio_core::Rect::new(20.0, 100.0, 50.0, 40.0));
}
