//! Contact forms: attachment previews and asynchronous submission.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_time::Instant;
use web_sys::{
    Document, Element, File, FileReader, FormData, Headers, HtmlButtonElement, HtmlElement,
    HtmlFormElement, HtmlInputElement, RequestInit, Response,
};

use super::dom;
use crate::config::FormConfig;
use crate::contact_form::{self, AttachmentCheck, ContactForm, SubmitDecision};
use crate::error::PageError;

const PREVIEW_STYLE: &str =
    "width:70px; height:70px; object-fit:cover; border-radius:5px; border:1px solid #ccc;";

/// Bind every form that posts to the configured endpoint.
pub fn bind_forms(document: &Document, config: &FormConfig) {
    let ready_at = Instant::now();
    let mut bound = 0;

    for element in dom::query_all(document, "form") {
        let Ok(form) = element.dyn_into::<HtmlFormElement>() else {
            continue;
        };
        if !contact_form::targets_endpoint(&form.action(), &config.endpoint_host) {
            continue;
        }
        bind_form(document, form, config.clone(), ready_at);
        bound += 1;
    }

    log::debug!("📨 {} contact forms bound", bound);
}

fn bind_form(document: &Document, form: HtmlFormElement, config: FormConfig, ready_at: Instant) {
    let state = Rc::new(RefCell::new(ContactForm::new(&form.id(), config, ready_at)));
    let preview: Option<Element> = dom::query(&form, ".preview");
    let message: Option<HtmlElement> = dom::query(&form, ".form-message");

    let file_input = dom::query::<HtmlInputElement>(&form, "input[type=\"file\"]");
    if let (Some(input), Some(preview)) = (file_input, preview.clone()) {
        let state = state.clone();
        let document = document.clone();
        let input_c = input.clone();
        dom::on(&input, "change", move |_| {
            preview.set_inner_html("");
            let files: Vec<File> = input_c
                .files()
                .map(|list| (0..list.length()).filter_map(|i| list.get(i)).collect())
                .unwrap_or_default();

            match state.borrow().check_attachments(files.len()) {
                AttachmentCheck::Rejected(reason) => {
                    if let Ok(window) = dom::window() {
                        let _ = window.alert_with_message(&reason);
                    }
                    input_c.set_value("");
                }
                AttachmentCheck::Accepted => {
                    for file in &files {
                        if let Err(e) = show_preview(&document, &preview, file) {
                            log::warn!("📎 Preview of {} failed: {}", file.name(), e);
                        }
                    }
                }
            }
        });
    }

    let Some(button) = dom::query::<HtmlButtonElement>(&form, "button[type=\"submit\"]") else {
        log::warn!("📨 Form {} has no submit button", form.id());
        return;
    };

    let form_c = form.clone();
    dom::on(&form, "submit", move |event| {
        event.prevent_default();

        let decision = state
            .borrow_mut()
            .begin_submit(Instant::now(), &button.inner_text());
        let button_text = match decision {
            SubmitDecision::Send { button_text } => button_text,
            other => {
                log::debug!("📨 Submission not sent: {:?}", other);
                return;
            }
        };

        button.set_disabled(true);
        button.set_inner_text(button_text);

        let (form, button, message, preview, state) = (
            form_c.clone(),
            button.clone(),
            message.clone(),
            preview.clone(),
            state.clone(),
        );
        wasm_bindgen_futures::spawn_local(async move {
            let ok = match post(&form).await {
                Ok(ok) => ok,
                Err(e) => {
                    log::warn!("📨 Form submission failed: {}", e);
                    false
                }
            };

            let (status, restore) = state.borrow_mut().finish_submit(ok);
            if let Some(message) = &message {
                message.set_text_content(Some(status.text));
                let _ = message.style().set_property("color", status.color);
            }
            if ok {
                form.reset();
                if let Some(preview) = &preview {
                    preview.set_inner_html("");
                }
            }
            button.set_disabled(false);
            button.set_inner_text(&restore);
        });
    });
}

fn show_preview(document: &Document, preview: &Element, file: &File) -> Result<(), PageError> {
    let reader = FileReader::new()?;
    let (document, preview, reader_c) = (document.clone(), preview.clone(), reader.clone());

    let onload = wasm_bindgen::closure::Closure::once_into_js(move || {
        let Some(src) = reader_c.result().ok().and_then(|result| result.as_string()) else {
            return;
        };
        if let Ok(img) = document.create_element("img") {
            let _ = img.set_attribute("src", &src);
            let _ = img.set_attribute("style", PREVIEW_STYLE);
            let _ = preview.append_child(&img);
        }
    });
    reader.set_onload(Some(onload.unchecked_ref()));
    reader.read_as_data_url(file)?;
    Ok(())
}

/// POST the form to its action; `Ok(true)` on a 2xx response.
async fn post(form: &HtmlFormElement) -> Result<bool, PageError> {
    let data = FormData::new_with_form(form)?;
    let headers = Headers::new()?;
    headers.set("Accept", "application/json")?;

    let init = RequestInit::new();
    init.set_method("POST");
    init.set_body(&data);
    init.set_headers(&headers);

    let promise = dom::window()?.fetch_with_str_and_init(&form.action(), &init);
    let response: Response = JsFuture::from(promise).await?.dyn_into()?;
    Ok(response.ok())
}
