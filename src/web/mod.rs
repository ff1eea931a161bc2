//! Browser binding: the wasm entry point and DOM wiring for every page feature.

mod dom;
mod forms;
mod gallery;
mod page;

use wasm_bindgen::prelude::*;
use web_sys::Document;

use crate::config::PageConfig;
use crate::error::PageError;
use crate::logging::init_logging;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let document = match dom::document() {
        Ok(document) => document,
        Err(e) => {
            web_sys::console::error_1(&format!("folio: {}", e).into());
            return;
        }
    };

    let config = PageConfig::load_from_document(&document);
    init_logging(config.log_level);
    page::print_banner();

    bind_page(&document, config);
}

/// Features are independent: a section missing from the page only disables itself.
fn report(feature: &str, result: Result<(), PageError>) {
    if let Err(e) = result {
        log::warn!("⚠️ {} disabled: {}", feature, e);
    }
}

fn bind_page(document: &Document, config: PageConfig) {
    report("Navigation", page::bind_nav(document, &config.navbar));
    report("Navbar", page::bind_navbar(document, config.navbar.clone()));
    report("Hero", page::bind_hero(document, config.hero.clone()));
    page::bind_accordion(document);
    report("Reveal", page::bind_reveals(document, &config.reveal));
    report(
        "Counters",
        page::bind_counters(document, &config.reveal, &config.counter),
    );
    report("Lazy images", page::bind_lazy_images(document));
    page::bind_analytics(document);
    report("Gallery", gallery::bind_gallery(document, &config.gallery));
    report("Lifecycle", page::bind_lifecycle(document));

    let form_config = config.form;
    let form_document = document.clone();
    dom::on_ready(document, move || {
        forms::bind_forms(&form_document, &form_config);
    });

    log::info!("🚀 Page interactions ready");
}
