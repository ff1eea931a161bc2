//! Gallery browser binding: builds the catalog from the portfolio markup and
//! wires filter buttons, group selectors and the lightbox to the DOM.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use folio_gallery::{
    ActiveControl, Catalog, CategoryFilter, Control, EntryAnimation, FilterChange, GalleryItem,
    GallerySelector, GroupId, ImagePreloader, ImageRef, ItemId, Key, Lightbox, LightboxFrame,
    LightboxInput, LightboxUpdate,
};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, HtmlImageElement, KeyboardEvent};

use super::dom;
use crate::config::GalleryConfig;
use crate::error::PageError;

const ITEM_SELECTOR: &str = ".portfolio-item";
const GROUP_CONTAINER_SELECTOR: &str = "[id^=\"gallery-\"]";
const FILTER_BUTTON_SELECTOR: &str = ".filter-btn";
const GROUP_BUTTON_SELECTOR: &str = ".selector-btn";

/// Warms the browser cache by starting an image load nobody displays.
#[derive(Debug, Clone, Copy)]
struct DomPreloader {
    enabled: bool,
}

impl ImagePreloader for DomPreloader {
    fn preload(&self, image: &ImageRef) {
        if !self.enabled {
            return;
        }
        match HtmlImageElement::new() {
            Ok(img) => img.set_src(&image.src),
            Err(e) => log::debug!("Preload of {} skipped: {:?}", image.src, e),
        }
    }
}

/// Lightbox overlay elements.
struct LightboxView {
    modal: Element,
    image: HtmlImageElement,
    caption: Element,
    body: HtmlElement,
}

impl LightboxView {
    fn find(document: &Document) -> Result<Self, PageError> {
        Ok(Self {
            modal: dom::by_id(document, "imageModal")?,
            image: dom::by_id(document, "modalImage")?,
            caption: dom::by_id(document, "modalCaption")?,
            body: dom::body(document)?,
        })
    }

    fn render(&self, frame: &LightboxFrame) {
        self.image.set_src(&frame.image.src);
        self.image.set_alt(&frame.image.alt);
        self.caption.set_text_content(Some(&frame.caption));
    }

    fn show(&self, update: &LightboxUpdate) {
        match update {
            LightboxUpdate::Opened(frame) => {
                self.render(frame);
                dom::add_class(&self.modal, "active");
                dom::set_style(&self.body, "overflow", "hidden");
            }
            LightboxUpdate::Moved(frame) => self.render(frame),
            LightboxUpdate::Closed => {
                dom::remove_class(&self.modal, "active");
                dom::clear_style(&self.body, "overflow");
            }
        }
    }
}

/// Everything a gallery event handler touches.
struct GalleryController {
    selector: GallerySelector,
    lightbox: Lightbox<DomPreloader>,
    items: HashMap<ItemId, Element>,
    containers: Vec<Element>,
    filter_buttons: Vec<Element>,
    group_buttons: Vec<Element>,
    view: LightboxView,
    filter_animation: String,
}

impl GalleryController {
    fn select_group(&mut self, group: GroupId) {
        let change = self.selector.set_group(group);
        self.show_change(&change);
    }

    fn select_category(&mut self, filter: CategoryFilter) {
        let change = self.selector.set_category_filter(filter);
        self.show_change(&change);
    }

    fn show_change(&self, change: &FilterChange) {
        match &change.active {
            ActiveControl::Group(group) => {
                dom::mark_active(&self.group_buttons, "data-target", group.as_str());
                for container in &self.containers {
                    let display = if container.id() == group.as_str() {
                        "block"
                    } else {
                        "none"
                    };
                    dom::set_style(container, "display", display);
                }
            }
            ActiveControl::Category(filter) => {
                dom::mark_active(&self.filter_buttons, "data-filter", filter.as_str());
            }
        }

        for id in &change.hidden {
            if let Some(element) = self.items.get(id) {
                dom::add_class(element, "hidden");
            }
        }

        for shown in &change.shown {
            let Some(element) = self.items.get(&shown.id) else {
                continue;
            };
            dom::remove_class(element, "hidden");
            if let EntryAnimation::Cascade { .. } = shown.animation {
                dom::set_style(element, "animation", "none");
                dom::reflow(element);
            }
            let animation = shown.animation.css(&self.filter_animation);
            dom::set_style(element, "animation", &animation);
        }

        log::debug!(
            "🖼️ {} shown, {} hidden",
            change.shown.len(),
            change.hidden.len()
        );
    }

    fn activate(&mut self, id: &ItemId) {
        if let Some(update) = self.lightbox.activate(id, &self.selector) {
            self.view.show(&update);
        }
    }

    fn handle(&mut self, input: LightboxInput) {
        if let Some(update) = self.lightbox.handle(input) {
            self.view.show(&update);
        }
    }
}

/// Read the portfolio markup into a catalog. Returns the elements keyed by id.
fn scan_items(
    document: &Document,
    default_group: &str,
) -> Result<(Catalog, HashMap<ItemId, Element>), PageError> {
    let mut items = Vec::new();
    let mut elements = HashMap::new();

    for (index, element) in dom::query_all(document, ITEM_SELECTOR)
        .into_iter()
        .enumerate()
    {
        let Some(img) = dom::query::<HtmlImageElement>(&element, "img") else {
            log::warn!("🖼️ Gallery item {} has no image, skipping", index);
            continue;
        };

        let id = match element.id() {
            id if !id.is_empty() => id,
            _ => format!("item-{}", index),
        };
        let category = element.get_attribute("data-category").unwrap_or_default();
        let group = element
            .closest(GROUP_CONTAINER_SELECTOR)
            .ok()
            .flatten()
            .map(|container| container.id())
            .unwrap_or_else(|| default_group.to_string());
        let caption = dom::query::<Element>(&element, ".portfolio-category")
            .and_then(|label| label.text_content())
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty())
            .unwrap_or_else(|| category.clone());

        let item = GalleryItem::new(
            id.as_str(),
            category,
            group.as_str(),
            ImageRef::new(img.src(), img.alt()),
        )
        .with_caption(caption);

        elements.insert(item.id.clone(), element);
        items.push(item);
    }

    Ok((Catalog::new(items)?, elements))
}

/// Group shown first: the pre-activated selector button, else the configured default.
fn initial_group(group_buttons: &[Element], config: &GalleryConfig) -> GroupId {
    group_buttons
        .iter()
        .find(|button| button.class_list().contains("active"))
        .and_then(|button| button.get_attribute("data-target"))
        .map(GroupId::new)
        .unwrap_or_else(|| GroupId::new(config.default_group.as_str()))
}

pub fn bind_gallery(document: &Document, config: &GalleryConfig) -> Result<(), PageError> {
    let (catalog, items) = scan_items(document, &config.default_group)?;
    if catalog.is_empty() {
        log::info!("🖼️ No gallery items on this page");
        return Ok(());
    }

    let group_buttons = dom::query_all(document, GROUP_BUTTON_SELECTOR);
    let group = initial_group(&group_buttons, config);
    log::info!(
        "🖼️ Gallery: {} items in {} groups, starting on {}",
        catalog.len(),
        catalog.groups().len(),
        group
    );

    let controller = Rc::new(RefCell::new(GalleryController {
        selector: GallerySelector::new(catalog, group)
            .with_stagger_step(config.stagger_step()),
        lightbox: Lightbox::new(DomPreloader {
            enabled: config.preload_neighbours,
        }),
        items,
        containers: dom::query_all(document, GROUP_CONTAINER_SELECTOR),
        filter_buttons: dom::query_all(document, FILTER_BUTTON_SELECTOR),
        group_buttons,
        view: LightboxView::find(document)?,
        filter_animation: config.filter_animation.clone(),
    }));

    bind_filters(&controller);
    bind_items(&controller);
    bind_lightbox(document, &controller)?;
    Ok(())
}

fn bind_filters(controller: &Rc<RefCell<GalleryController>>) {
    let (filter_buttons, group_buttons) = {
        let c = controller.borrow();
        (c.filter_buttons.clone(), c.group_buttons.clone())
    };

    for button in filter_buttons {
        let value = button.get_attribute("data-filter").unwrap_or_default();
        let controller = controller.clone();
        dom::on(&button, "click", move |_| {
            controller
                .borrow_mut()
                .select_category(CategoryFilter::parse(&value));
        });
    }

    for button in group_buttons {
        let Some(target) = button.get_attribute("data-target") else {
            continue;
        };
        let controller = controller.clone();
        dom::on(&button, "click", move |_| {
            controller
                .borrow_mut()
                .select_group(GroupId::new(target.as_str()));
        });
    }
}

fn bind_items(controller: &Rc<RefCell<GalleryController>>) {
    let items: Vec<(ItemId, Element)> = controller
        .borrow()
        .items
        .iter()
        .map(|(id, element)| (id.clone(), element.clone()))
        .collect();

    for (id, element) in items {
        let controller = controller.clone();
        dom::on(&element, "click", move |_| {
            controller.borrow_mut().activate(&id);
        });
    }
}

fn bind_lightbox(
    document: &Document,
    controller: &Rc<RefCell<GalleryController>>,
) -> Result<(), PageError> {
    let controls = [
        ("modalClose", Control::Close),
        ("modalPrev", Control::Prev),
        ("modalNext", Control::Next),
    ];
    for (id, control) in controls {
        let element: Element = dom::by_id(document, id)?;
        let controller = controller.clone();
        dom::on(&element, "click", move |event| {
            let input = LightboxInput::ControlClick(control);
            if input.stops_propagation() {
                event.stop_propagation();
            }
            controller.borrow_mut().handle(input);
        });
    }

    let modal = controller.borrow().view.modal.clone();
    let modal_value: JsValue = modal.clone().into();
    {
        let controller = controller.clone();
        dom::on(&modal, "click", move |event| {
            let on_backdrop = event
                .target()
                .map(|target| JsValue::from(target) == modal_value)
                .unwrap_or(false);
            controller
                .borrow_mut()
                .handle(LightboxInput::BackdropClick { on_backdrop });
        });
    }

    let controller = controller.clone();
    dom::on(document, "keydown", move |event| {
        let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        let key = Key::from_dom_key(&event.key());
        if key != Key::Other {
            controller.borrow_mut().handle(LightboxInput::Key(key));
        }
    });

    Ok(())
}
