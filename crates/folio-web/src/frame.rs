use crate::canvas::CpuField;
use crate::dom::{self, BackingScale};
use crate::render::{Backdrop, GpuState};
use folio_core::{AnimationClock, FieldRenderer, PointerTracker, CPU_FALLBACK_DOWNSCALE};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub clock: AnimationClock,
    pub tracker: Rc<RefCell<PointerTracker>>,
    pub field: FieldRenderer,
    pub backdrop: Backdrop,
    pub canvas: web::HtmlCanvasElement,
}

impl FrameContext {
    pub fn new(
        tracker: Rc<RefCell<PointerTracker>>,
        backdrop: Backdrop,
        canvas: web::HtmlCanvasElement,
    ) -> Self {
        Self {
            clock: AnimationClock::mount(),
            tracker,
            field: FieldRenderer::default(),
            backdrop,
            canvas,
        }
    }

    /// Run one frame. Returns `false` once the clock is unmounted or suspended
    /// and the loop should stop scheduling.
    pub fn frame(&mut self) -> bool {
        if self.clock.is_mounted() && !self.canvas.is_connected() {
            log::info!("[field] canvas detached");
            self.clock.unmount();
        }
        let Some(time) = self.clock.tick() else {
            return false;
        };
        let target = self.tracker.borrow().sample();
        let size = (self.canvas.width(), self.canvas.height());
        if let Some(uniforms) = self.field.advance(time, target, size) {
            self.backdrop.draw(&self.canvas, uniforms);
        }
        true
    }

    /// React to `pagehide`: a page entering the back/forward cache is only
    /// suspended, anything else unmounts.
    pub fn hide(&mut self, persisted: bool) {
        if persisted {
            self.clock.suspend();
        } else {
            self.clock.unmount();
        }
    }

    /// React to `pageshow`; returns whether the loop needs re-arming.
    pub fn show(&mut self, persisted: bool) -> bool {
        persisted && self.clock.resume()
    }
}

/// Pick the backdrop surface. WebGPU first; on any failure the canvas is
/// replaced and the CPU renderer draws into a 2D context instead.
pub async fn init_backdrop(
    document: &web::Document,
    canvas: web::HtmlCanvasElement,
) -> anyhow::Result<(Backdrop, web::HtmlCanvasElement)> {
    dom::sync_canvas_backing_size(&canvas, BackingScale::DevicePixels);
    match GpuState::new(&canvas).await {
        Ok(gpu) => {
            dom::wire_canvas_resize(&canvas, BackingScale::DevicePixels);
            Ok((Backdrop::Gpu(gpu), canvas))
        }
        Err(e) => {
            log::warn!("[gpu] unavailable ({:?}); falling back to canvas2d", e);
            let canvas = dom::replace_canvas(document, &canvas)?;
            dom::wire_canvas_resize(&canvas, BackingScale::Downscaled(CPU_FALLBACK_DOWNSCALE));
            let cpu = CpuField::new(&canvas)?;
            Ok((Backdrop::Cpu(cpu), canvas))
        }
    }
}

type Tick = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Queue `tick` for the next animation frame unless one is already queued.
fn schedule(tick: &Tick, pending: &Cell<Option<i32>>) {
    if pending.get().is_some() {
        return;
    }
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        pending.set(w.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
    }
}

fn cancel(pending: &Cell<Option<i32>>) {
    if let (Some(w), Some(id)) = (web::window(), pending.take()) {
        let _ = w.cancel_animation_frame(id);
    }
}

/// Drive `frame_ctx` from `requestAnimationFrame` until it unmounts.
///
/// `pagehide` cancels the queued frame. If the page went into the
/// back/forward cache the clock is only suspended and `pageshow` restarts the
/// loop; otherwise it unmounts for good.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let Some(window) = web::window() else {
        return;
    };
    let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
    let tick: Tick = Rc::new(RefCell::new(None));

    let tick_clone = tick.clone();
    let pending_tick = pending.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        pending_tick.set(None);
        if !frame_ctx_tick.borrow_mut().frame() {
            log::info!("[field] frame loop stopped");
            return;
        }
        schedule(&tick_clone, &pending_tick);
    }) as Box<dyn FnMut()>));
    schedule(&tick, &pending);

    let ctx_hide = frame_ctx.clone();
    let pending_hide = pending.clone();
    let on_hide = Closure::wrap(Box::new(move |ev: web::PageTransitionEvent| {
        ctx_hide.borrow_mut().hide(ev.persisted());
        cancel(&pending_hide);
    }) as Box<dyn FnMut(_)>);
    let _ = window.add_event_listener_with_callback("pagehide", on_hide.as_ref().unchecked_ref());
    on_hide.forget();

    let on_show = Closure::wrap(Box::new(move |ev: web::PageTransitionEvent| {
        if frame_ctx.borrow_mut().show(ev.persisted()) {
            log::info!("[field] frame loop resumed");
            schedule(&tick, &pending);
        }
    }) as Box<dyn FnMut(_)>);
    let _ = window.add_event_listener_with_callback("pageshow", on_show.as_ref().unchecked_ref());
    on_show.forget();
}
