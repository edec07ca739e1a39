use crate::constants::*;
use crate::dom::{self, set_text, set_visible};
use crate::sections;
use folio_core::{ContactView, PageView, Project, CONFIRMATION_BODY, CONFIRMATION_TITLE};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Bring the interactive parts of the DOM in line with `view`.
///
/// Every call writes the full derived view; the handful of nodes involved
/// makes diffing pointless.
pub fn render(document: &web::Document, view: &PageView<'_>) {
    set_text(document, LIKE_COUNT_ID, &view.likes_label());
    render_contact(document, view.contact);
    render_modal(document, view.modal);
    set_visible(document, SCROLL_TOP_ID, view.show_scroll_to_top);
}

fn render_contact(document: &web::Document, contact: ContactView) {
    set_visible(document, CONTACT_INVITE_ID, contact == ContactView::Invite);
    set_visible(
        document,
        CONTACT_PANEL_ID,
        matches!(contact, ContactView::Form { .. }),
    );
    set_visible(document, CONFIRMATION_ID, contact == ContactView::Confirmation);

    if contact == ContactView::Confirmation {
        set_text(document, CONFIRMATION_TITLE_ID, CONFIRMATION_TITLE);
        set_text(document, CONFIRMATION_BODY_ID, CONFIRMATION_BODY);
    }

    let submitting = matches!(contact, ContactView::Form { submitting: true });
    if let Some(button) = document
        .get_element_by_id(CONTACT_SUBMIT_ID)
        .and_then(|el| el.dyn_into::<web::HtmlButtonElement>().ok())
    {
        button.set_disabled(submitting);
        button.set_text_content(Some(if submitting {
            SUBMIT_PENDING_LABEL
        } else {
            SUBMIT_LABEL
        }));
    }
    if let Some(close) = document
        .get_element_by_id(CLOSE_FORM_ID)
        .and_then(|el| el.dyn_into::<web::HtmlButtonElement>().ok())
    {
        close.set_disabled(submitting);
    }
}

fn render_modal(document: &web::Document, project: Option<&Project>) {
    let Some(project) = project else {
        set_visible(document, MODAL_ID, false);
        return;
    };
    set_text(document, MODAL_TITLE_ID, &project.title);
    set_text(document, MODAL_BODY_ID, &project.long_description);
    if let Some(img) = document.get_element_by_id(MODAL_IMAGE_ID) {
        let _ = img.set_attribute("src", &project.image);
        let _ = img.set_attribute("alt", &project.title);
    }
    if let Some(slot) = document.get_element_by_id(MODAL_STATUS_ID) {
        dom::clear(&slot);
        if let Ok(badge) = sections::status_badge(document, project) {
            let _ = dom::append(&slot, &badge);
        }
    }
    if let Some(slot) = document.get_element_by_id(MODAL_TAGS_ID) {
        dom::clear(&slot);
        if let Ok(tags) = sections::tag_list(document, &project.tags) {
            let _ = dom::append(&slot, &tags);
        }
    }
    set_visible(document, MODAL_ID, true);
}
