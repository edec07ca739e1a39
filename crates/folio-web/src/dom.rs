use crate::constants::HIDDEN_CLASS;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn js_err(e: JsValue) -> anyhow::Error {
    anyhow::anyhow!("{:?}", e)
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    handler: impl FnMut() + 'static,
) {
    match document.get_element_by_id(element_id) {
        Some(el) => add_element_listener(&el, "click", handler),
        None => log::warn!("[dom] no #{} to listen on", element_id),
    }
}

pub fn add_element_listener(
    target: &web::EventTarget,
    event: &str,
    mut handler: impl FnMut() + 'static,
) {
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    let _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// How many backing pixels each CSS pixel of the canvas gets.
#[derive(Clone, Copy, Debug)]
pub enum BackingScale {
    DevicePixels,
    Downscaled(u32),
}

impl BackingScale {
    pub fn ratio(self) -> f64 {
        match self {
            BackingScale::DevicePixels => web::window()
                .map(|w| w.device_pixel_ratio())
                .unwrap_or(1.0),
            BackingScale::Downscaled(n) => 1.0 / n.max(1) as f64,
        }
    }
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement, scale: BackingScale) {
    let ratio = scale.ratio();
    let rect = canvas.get_bounding_client_rect();
    let w_px = (rect.width() * ratio) as u32;
    let h_px = (rect.height() * ratio) as u32;
    canvas.set_width(w_px.max(1));
    canvas.set_height(h_px.max(1));
}

/// Keep the canvas backing store in step with its CSS size.
pub fn wire_canvas_resize(canvas: &web::HtmlCanvasElement, scale: BackingScale) {
    sync_canvas_backing_size(canvas, scale);
    let Some(window) = web::window() else {
        return;
    };
    let canvas = canvas.clone();
    add_element_listener(&window, "resize", move || {
        sync_canvas_backing_size(&canvas, scale);
    });
}

pub fn canvas_by_id(document: &web::Document, id: &str) -> anyhow::Result<web::HtmlCanvasElement> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", id))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("#{} is not a canvas: {:?}", id, e))
}

/// Swap `canvas` for a fresh element with the same id and class.
///
/// A canvas that has handed out a `webgpu` context refuses `2d`, so the CPU
/// fallback needs a new one.
pub fn replace_canvas(
    document: &web::Document,
    canvas: &web::HtmlCanvasElement,
) -> anyhow::Result<web::HtmlCanvasElement> {
    let fresh = document
        .create_element("canvas")
        .map_err(js_err)?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    fresh.set_id(&canvas.id());
    fresh.set_class_name(&canvas.class_name());
    canvas.replace_with_with_node_1(&fresh).map_err(js_err)?;
    Ok(fresh)
}

#[inline]
pub fn set_visible(document: &web::Document, id: &str, visible: bool) {
    if let Some(el) = document.get_element_by_id(id) {
        let classes = el.class_list();
        let _ = if visible {
            classes.remove_1(HIDDEN_CLASS)
        } else {
            classes.add_1(HIDDEN_CLASS)
        };
    }
}

#[inline]
pub fn set_text(document: &web::Document, id: &str, text: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        el.set_text_content(Some(text));
    }
}

pub fn scroll_into_view(document: &web::Document, id: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        let opts = web::ScrollIntoViewOptions::new();
        opts.set_behavior(web::ScrollBehavior::Smooth);
        el.scroll_into_view_with_scroll_into_view_options(&opts);
    }
}

/// Create `<tag class="...">` with optional text content.
pub fn element(
    document: &web::Document,
    tag: &str,
    class: &str,
    text: Option<&str>,
) -> anyhow::Result<web::Element> {
    let el = document.create_element(tag).map_err(js_err)?;
    if !class.is_empty() {
        el.set_class_name(class);
    }
    if let Some(t) = text {
        el.set_text_content(Some(t));
    }
    Ok(el)
}

#[inline]
pub fn append(parent: &web::Element, child: &web::Element) -> anyhow::Result<()> {
    parent.append_child(child).map(|_| ()).map_err(js_err)
}

/// Drop any placeholder children so re-rendering a container is idempotent.
#[inline]
pub fn clear(el: &web::Element) {
    el.set_inner_html("");
}
