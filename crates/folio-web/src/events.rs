use crate::constants::*;
use crate::dom::{self, add_click_listener};
use crate::sections;
use crate::view;
use folio_core::{PageController, PointerTracker};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Apply `action` to the controller and re-render when it reports a change.
pub fn act(
    controller: &Rc<RefCell<PageController>>,
    action: impl FnOnce(&mut PageController) -> bool,
) -> bool {
    let changed = action(&mut controller.borrow_mut());
    if changed {
        if let Some(document) = dom::window_document() {
            view::render(&document, &controller.borrow().view());
        }
    }
    changed
}

/// Record pointer moves anywhere in the window. Never re-renders the page.
pub fn wire_pointer(window: &web::Window, tracker: Rc<RefCell<PointerTracker>>) {
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let Some(w) = web::window() else {
            return;
        };
        let vw = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        let vh = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        tracker
            .borrow_mut()
            .record(ev.client_x() as f64, ev.client_y() as f64, vw, vh);
    }) as Box<dyn FnMut(_)>);
    let _ = window
        .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    closure.forget();
}

pub fn wire_page(
    window: &web::Window,
    document: &web::Document,
    controller: &Rc<RefCell<PageController>>,
) {
    wire_likes(document, controller);
    wire_projects(document, controller);
    wire_contact_toggles(document, controller);
    wire_scroll(window, document, controller);
}

fn wire_likes(document: &web::Document, controller: &Rc<RefCell<PageController>>) {
    let c = controller.clone();
    add_click_listener(document, LIKE_BUTTON_ID, move || {
        act(&c, |pc| {
            pc.like();
            true
        });
    });
}

fn wire_projects(document: &web::Document, controller: &Rc<RefCell<PageController>>) {
    let count = controller.borrow().catalog().projects.len();
    for i in 0..count {
        let c = controller.clone();
        add_click_listener(document, &sections::project_card_id(i), move || {
            act(&c, |pc| pc.select_project(i).is_some());
        });
    }
    for id in [MODAL_BACKDROP_ID, MODAL_CLOSE_ID] {
        let c = controller.clone();
        add_click_listener(document, id, move || {
            act(&c, PageController::close_modal);
        });
    }
}

/// Open the form (if idle) and bring the contact section into view.
fn open_contact(controller: &Rc<RefCell<PageController>>) {
    act(controller, PageController::start_conversation);
    if let Some(document) = dom::window_document() {
        dom::scroll_into_view(&document, CONTACT_SECTION_ID);
    }
}

fn wire_contact_toggles(document: &web::Document, controller: &Rc<RefCell<PageController>>) {
    let c = controller.clone();
    add_click_listener(document, START_CONVERSATION_ID, move || {
        act(&c, PageController::start_conversation);
    });

    let tiers = controller.borrow().catalog().pricing.len();
    for i in 0..tiers {
        let c = controller.clone();
        add_click_listener(document, &sections::pricing_cta_id(i), move || {
            open_contact(&c)
        });
    }

    let c = controller.clone();
    add_click_listener(document, CLOSE_FORM_ID, move || {
        act(&c, PageController::close_form);
    });

    let c = controller.clone();
    add_click_listener(document, SEND_ANOTHER_ID, move || {
        if act(&c, PageController::send_another) {
            crate::contact::reset_form();
        }
    });
}

fn wire_scroll(
    window: &web::Window,
    document: &web::Document,
    controller: &Rc<RefCell<PageController>>,
) {
    let c = controller.clone();
    dom::add_element_listener(window, "scroll", move || {
        let offset = web::window()
            .and_then(|w| w.scroll_y().ok())
            .unwrap_or(0.0);
        act(&c, |pc| pc.on_scroll(offset));
    });

    add_click_listener(document, SCROLL_TOP_ID, || {
        if let Some(w) = web::window() {
            let opts = web::ScrollToOptions::new();
            opts.set_top(0.0);
            opts.set_behavior(web::ScrollBehavior::Smooth);
            w.scroll_to_with_scroll_to_options(&opts);
        }
    });
}
