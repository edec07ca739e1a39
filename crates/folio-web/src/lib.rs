#![cfg(target_arch = "wasm32")]
mod canvas;
mod constants;
mod contact;
mod dom;
mod events;
mod frame;
mod render;
mod sections;
mod view;

use folio_core::{Catalog, PageController, PointerTracker};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    // Page content and interactions come up before the backdrop so a slow
    // adapter request never delays the page.
    let catalog = Catalog::portfolio()?;
    sections::render_all(&document, &catalog)?;
    let controller = Rc::new(RefCell::new(PageController::new(catalog)));
    if let Ok(offset) = window.scroll_y() {
        controller.borrow_mut().on_scroll(offset);
    }
    view::render(&document, &controller.borrow().view());
    events::wire_page(&window, &document, &controller);
    contact::wire_contact_form(&document, controller.clone());

    let tracker = Rc::new(RefCell::new(PointerTracker::new()));
    events::wire_pointer(&window, tracker.clone());

    let canvas = dom::canvas_by_id(&document, constants::FIELD_CANVAS_ID)?;
    let (backdrop, canvas) = frame::init_backdrop(&document, canvas).await?;
    log::info!("[field] backdrop: {}", backdrop.name());
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(
        tracker, backdrop, canvas,
    )));
    frame::start_loop(frame_ctx);
    Ok(())
}
