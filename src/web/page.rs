//! Page-wide effects: menu, header, hero, FAQ, counters, reveals, analytics.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use js_sys::{Array, Function, Object, Reflect};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, HtmlElement, HtmlImageElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, ScrollBehavior, ScrollToOptions,
};

use super::dom;
use crate::accordion::Accordion;
use crate::analytics::{self, AnalyticsEvent};
use crate::config::{CounterConfig, HeroConfig, NavbarConfig, RevealConfig};
use crate::constants::{CONSOLE_BANNER, LOADED_CLASS_DELAY_MS};
use crate::counter::{CounterAnimation, CounterFrame};
use crate::error::PageError;
use crate::hero;
use crate::nav::{self, NavMenu};
use crate::navbar::{NavbarAction, NavbarScroll};
use crate::reveal::{self, RevealKind};

/// Styled console greeting.
pub fn print_banner() {
    for (text, style) in CONSOLE_BANNER {
        web_sys::console::log_2(&text.into(), &style.into());
    }
}

/// Hamburger menu and smooth in-page anchor scrolling.
pub fn bind_nav(document: &Document, config: &NavbarConfig) -> Result<(), PageError> {
    let toggle: Element = dom::by_id(document, "navToggle")?;
    let menu: Element = dom::by_id(document, "navMenu")?;
    let state = Rc::new(RefCell::new(NavMenu::default()));

    {
        let state = state.clone();
        let menu = menu.clone();
        dom::on(&toggle, "click", move |_| {
            let open = state.borrow_mut().toggle();
            dom::set_class(&menu, "active", open);
        });
    }

    for link in dom::query_all(document, ".nav-link") {
        let state = state.clone();
        let menu = menu.clone();
        dom::on(&link, "click", move |_| {
            state.borrow_mut().link_clicked();
            dom::remove_class(&menu, "active");
        });
    }

    for anchor in dom::query_all(document, "a[href^=\"#\"]") {
        let document = document.clone();
        let offset = config.anchor_offset;
        let href = anchor.get_attribute("href").unwrap_or_default();
        dom::on(&anchor, "click", move |event| {
            event.prevent_default();
            let Some(selector) = nav::anchor_selector(&href) else {
                return;
            };
            let Some(target) = dom::query_doc::<HtmlElement>(&document, selector) else {
                return;
            };
            let options = ScrollToOptions::new();
            options.set_top(nav::anchor_scroll_target(
                f64::from(target.offset_top()),
                offset,
            ));
            options.set_behavior(ScrollBehavior::Smooth);
            if let Ok(window) = dom::window() {
                window.scroll_to_with_scroll_to_options(&options);
            }
        });
    }

    Ok(())
}

/// Header pin / stretch / hide on scroll.
pub fn bind_navbar(document: &Document, config: NavbarConfig) -> Result<(), PageError> {
    let navbar: Element = dom::query_doc(document, ".navbar")
        .ok_or_else(|| PageError::missing_element(".navbar"))?;
    let window = dom::window()?;
    let state = Rc::new(RefCell::new(NavbarScroll::new(config)));
    let hide_timer: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));

    dom::on(&window, "scroll", move |_| {
        let action = state.borrow_mut().on_scroll(dom::scroll_y());
        if action == NavbarAction::None {
            return;
        }
        if let Some(handle) = hide_timer.take() {
            dom::clear_timeout(handle);
        }

        match action {
            NavbarAction::Pin => {
                dom::remove_class(&navbar, "hide");
                dom::clear_style(&navbar, "transform");
                dom::clear_style(&navbar, "opacity");
            }
            NavbarAction::Stretch(stretch) => {
                dom::set_style(&navbar, "transform", &stretch.transform());
                dom::set_style(&navbar, "opacity", &stretch.opacity.to_string());
                dom::remove_class(&navbar, "hide");
            }
            NavbarAction::ScheduleHide { delay_ms } => {
                let navbar = navbar.clone();
                let handle = dom::set_timeout(delay_ms as i32, move || {
                    dom::add_class(&navbar, "hide");
                });
                hide_timer.set(handle);
            }
            NavbarAction::Show => dom::remove_class(&navbar, "hide"),
            NavbarAction::None => {}
        }
    });

    Ok(())
}

/// Hero video fade and background parallax.
pub fn bind_hero(document: &Document, config: HeroConfig) -> Result<(), PageError> {
    let hero: HtmlElement = dom::query_doc(document, ".hero")
        .ok_or_else(|| PageError::missing_element(".hero"))?;
    let video: Option<Element> = dom::query_doc(document, ".hero-video");
    let window = dom::window()?;

    dom::on(&window, "scroll", move |_| {
        let scroll_y = dom::scroll_y();
        if let Some(video) = &video {
            let opacity = hero::video_opacity(scroll_y, f64::from(hero.offset_height()));
            dom::set_style(video, "opacity", &opacity.to_string());
        }
        let offset = hero::parallax_offset(scroll_y, config.parallax_speed);
        dom::set_style(&hero, "background-position-y", &format!("{}px", offset));
    });

    Ok(())
}

/// FAQ accordion: one item open at a time.
pub fn bind_accordion(document: &Document) {
    let items = dom::query_all(document, ".faq-item");
    if items.is_empty() {
        return;
    }
    let state = Rc::new(RefCell::new(Accordion::new(items.len())));
    let items = Rc::new(items);

    for (index, item) in items.iter().enumerate() {
        let Some(question) = dom::query::<Element>(item, ".faq-question") else {
            continue;
        };
        let state = state.clone();
        let items = items.clone();
        dom::on(&question, "click", move |_| {
            let mut state = state.borrow_mut();
            state.toggle(index);
            for (i, item) in items.iter().enumerate() {
                dom::set_class(item, "active", state.is_open(i));
            }
        });
    }
}

/// Observe `elements` and call `on_batch` with every intersection batch.
fn observe(
    elements: &[Element],
    threshold: f64,
    root_margin: Option<&str>,
    on_batch: impl FnMut(Vec<IntersectionObserverEntry>, &IntersectionObserver) + 'static,
) -> Result<(), PageError> {
    if elements.is_empty() {
        return Ok(());
    }

    let mut on_batch = on_batch;
    let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
        let entries = entries
            .iter()
            .map(|entry| entry.unchecked_into::<IntersectionObserverEntry>())
            .collect();
        on_batch(entries, &observer);
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    if let Some(margin) = root_margin {
        options.set_root_margin(margin);
    }
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    callback.forget();

    for element in elements {
        observer.observe(element);
    }
    Ok(())
}

/// Fade/slide elements in as they scroll into view.
pub fn bind_reveals(document: &Document, config: &RevealConfig) -> Result<(), PageError> {
    for kind in RevealKind::ALL {
        let elements = dom::query_all(document, kind.selector());
        for element in &elements {
            for mutation in kind.prepare() {
                dom::apply(element, mutation);
            }
        }

        let batch_config = config.clone();
        observe(
            &elements,
            kind.threshold(config),
            kind.root_margin(config),
            move |entries, observer| {
                let hits: Vec<bool> = entries.iter().map(|e| e.is_intersecting()).collect();
                for plan in reveal::plan_batch(kind, &hits, &batch_config) {
                    let target = entries[plan.entry].target();
                    if plan.unobserve {
                        observer.unobserve(&target);
                    }
                    if plan.delay_ms == 0 {
                        for mutation in kind.reveal() {
                            dom::apply(&target, mutation);
                        }
                    } else {
                        dom::set_timeout(plan.delay_ms as i32, move || {
                            for mutation in kind.reveal() {
                                dom::apply(&target, mutation);
                            }
                        });
                    }
                }
            },
        )?;
        log::debug!("✨ {:?} reveal on {} elements", kind, elements.len());
    }
    Ok(())
}

fn run_counter(element: Element, mut counter: CounterAnimation) {
    match counter.tick() {
        CounterFrame::Running(text) => {
            element.set_text_content(Some(&text));
            dom::request_animation_frame(move || run_counter(element, counter));
        }
        CounterFrame::Finished(text) => element.set_text_content(Some(&text)),
    }
}

/// Count statistics up from zero the first time they are seen.
pub fn bind_counters(
    document: &Document,
    reveal: &RevealConfig,
    config: &CounterConfig,
) -> Result<(), PageError> {
    let elements = dom::query_all(document, ".stat-number");
    let config = config.clone();
    observe(&elements, reveal.stats_threshold, None, move |entries, observer| {
        for entry in entries.into_iter().filter(|e| e.is_intersecting()) {
            let element = entry.target();
            observer.unobserve(&element);
            let text = element.text_content().unwrap_or_default();
            let counter = CounterAnimation::new(text.trim(), &config);
            element.set_text_content(Some("0"));
            run_counter(element, counter);
        }
    })
}

fn supports_native_lazy_loading() -> bool {
    let Ok(window) = dom::window() else {
        return false;
    };
    Reflect::get(&window, &"HTMLImageElement".into())
        .and_then(|constructor| Reflect::get(&constructor, &"prototype".into()))
        .and_then(|prototype| Reflect::has(&prototype, &"loading".into()))
        .unwrap_or(false)
}

/// Load `loading="lazy"` images by hand where the browser cannot.
pub fn bind_lazy_images(document: &Document) -> Result<(), PageError> {
    if supports_native_lazy_loading() {
        return Ok(());
    }
    let images = dom::query_all(document, "img[loading=\"lazy\"]");
    log::debug!("🐢 Lazy-loading {} images by observer", images.len());
    observe(&images, 0.0, None, |entries, observer| {
        for entry in entries.into_iter().filter(|e| e.is_intersecting()) {
            let target = entry.target();
            observer.unobserve(&target);
            if let Some(img) = target.dyn_ref::<HtmlImageElement>() {
                let src = img.get_attribute("data-src").unwrap_or_else(|| img.src());
                img.set_src(&src);
            }
        }
    })
}

fn send_event(event: &AnalyticsEvent) {
    let Ok(window) = dom::window() else {
        return;
    };
    let Some(gtag) = Reflect::get(&window, &"gtag".into())
        .ok()
        .and_then(|gtag| gtag.dyn_into::<Function>().ok())
    else {
        return;
    };

    let params = Object::new();
    let _ = Reflect::set(&params, &"event_category".into(), &event.category.into());
    let _ = Reflect::set(&params, &"event_label".into(), &event.label.into());
    if let Some(value) = event.value {
        let _ = Reflect::set(&params, &"value".into(), &value.into());
    }
    if let Err(e) = gtag.call3(&JsValue::NULL, &"event".into(), &event.action.into(), &params) {
        log::debug!("gtag call failed: {:?}", e);
    }
}

/// Report contact link clicks and form submissions to gtag, when it is loaded.
pub fn bind_analytics(document: &Document) {
    for link in dom::query_all(document, analytics::TRACKED_LINKS) {
        let href = link.get_attribute("href").unwrap_or_default();
        dom::on(&link, "click", move |_| {
            if let Some(event) = analytics::link_event(&href) {
                send_event(&event);
            }
        });
    }

    if let Some(form) = document.get_element_by_id(analytics::TRACKED_FORM_ID) {
        dom::on(&form, "submit", |_| send_event(&analytics::form_submit_event()));
    }
}

/// Add `loaded` to the body on window load and shortly after the DOM is ready.
pub fn bind_lifecycle(document: &Document) -> Result<(), PageError> {
    let body = dom::body(document)?;

    if document.ready_state() == "complete" {
        dom::add_class(&body, "loaded");
    } else {
        let window = dom::window()?;
        let body = body.clone();
        dom::on(&window, "load", move |_| dom::add_class(&body, "loaded"));
    }

    dom::on_ready(document, move || {
        log::info!("✅ Page ready");
        dom::set_timeout(LOADED_CLASS_DELAY_MS, move || dom::add_class(&body, "loaded"));
    });
    Ok(())
}
