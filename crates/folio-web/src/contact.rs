//! Browser side of the contact form: read the fields, POST the encoded body
//! and feed the outcome back into the page controller.

use crate::constants::*;
use crate::dom;
use crate::view;
use folio_core::{ContactForm, ContactRequest, PageController};
use gloo_net::http::Request;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

pub fn wire_contact_form(document: &web::Document, controller: Rc<RefCell<PageController>>) {
    let Some(form) = document.get_element_by_id(CONTACT_FORM_ID) else {
        log::warn!("[contact] no #{} in host page", CONTACT_FORM_ID);
        return;
    };
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        ev.prevent_default();
        let Some(document) = dom::window_document() else {
            return;
        };
        let form = read_form(&document);
        let started = controller.borrow_mut().begin_submit(&form);
        let request = match started {
            Ok(r) => r,
            Err(e) => {
                notify(&e.to_string());
                return;
            }
        };
        view::render(&document, &controller.borrow().view());

        let controller = controller.clone();
        spawn_local(async move {
            let outcome = post(&request).await;
            let finished = controller.borrow_mut().finish_submit(outcome);
            if let Some(document) = dom::window_document() {
                view::render(&document, &controller.borrow().view());
            }
            if let Err(e) = finished {
                notify(&e.to_string());
            }
        });
    }) as Box<dyn FnMut(_)>);
    let _ = form.add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Send one attempt. `Ok` carries whatever status the server answered with;
/// `Err` is a transport failure (offline, CORS, aborted).
async fn post(request: &ContactRequest) -> Result<u16, String> {
    let resp = Request::post(request.endpoint)
        .header("Content-Type", request.content_type)
        .body(request.body.clone())
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    log::info!(
        "[contact] attempt {} answered {}",
        request.attempt,
        resp.status()
    );
    Ok(resp.status())
}

fn read_form(document: &web::Document) -> ContactForm {
    let input = |id: &str| {
        document
            .get_element_by_id(id)
            .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok())
            .map(|el| el.value())
            .unwrap_or_default()
    };
    let message = document
        .get_element_by_id(CONTACT_MESSAGE_ID)
        .and_then(|el| el.dyn_into::<web::HtmlTextAreaElement>().ok())
        .map(|el| el.value())
        .unwrap_or_default();
    ContactForm {
        name: input(CONTACT_NAME_ID),
        email: input(CONTACT_EMAIL_ID),
        message,
    }
}

/// Clear the fields for the next message.
pub fn reset_form() {
    if let Some(form) = dom::window_document()
        .and_then(|d| d.get_element_by_id(CONTACT_FORM_ID))
        .and_then(|el| el.dyn_into::<web::HtmlFormElement>().ok())
    {
        form.reset();
    }
}

fn notify(message: &str) {
    if let Some(w) = web::window() {
        let _ = w.alert_with_message(message);
    }
}
