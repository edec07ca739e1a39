use crate::dom::js_err;
use folio_core::{rasterize, FieldUniforms};
use wasm_bindgen::{Clamped, JsCast};
use web_sys as web;

/// CPU rendition of the field for browsers without WebGPU. The canvas backing
/// store is kept small and stretched by CSS.
pub struct CpuField {
    ctx: web::CanvasRenderingContext2d,
    pixels: Vec<u8>,
}

impl CpuField {
    pub fn new(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(js_err)?
            .ok_or_else(|| anyhow::anyhow!("canvas has no 2d context"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        Ok(Self {
            ctx,
            pixels: Vec::new(),
        })
    }

    pub fn draw(&mut self, uniforms: &FieldUniforms) -> anyhow::Result<()> {
        let width = uniforms.resolution.x as u32;
        let height = uniforms.resolution.y as u32;
        if !rasterize(uniforms, width, height, &mut self.pixels) {
            return Ok(());
        }
        let image = web::ImageData::new_with_u8_clamped_array_and_sh(
            Clamped(&self.pixels[..]),
            width,
            height,
        )
        .map_err(js_err)?;
        self.ctx.put_image_data(&image, 0.0, 0.0).map_err(js_err)
    }
}
