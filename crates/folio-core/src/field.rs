//! Procedural colour field drawn behind the page.
//!
//! Each pixel is coloured from its position, the shader time and the smoothed
//! pointer: three octaves of coupled sinusoidal domain warping (stronger near
//! the pointer) pick a blend between two colour stops, and a slow global drift
//! tints the result toward a third stop.
//!
//! The GPU paths run `shaders/field.wgsl`; [`shade`] is the same algorithm in
//! Rust, used by the CPU fallback surface and as the reference in tests. Keep
//! the two in sync.

use crate::clock::FrameTime;
use crate::constants::*;
use crate::pointer::SmoothedPointer;
use glam::{Vec2, Vec3};

/// Per-renderer tunables. Colour stops are linear RGB.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldParams {
    pub color_stops: [Vec3; 3],
    pub smoothing: f32,
    pub time_scale: f32,
}

impl Default for FieldParams {
    fn default() -> Self {
        let stop = |hex: &str| parse_hex_color(hex).map(srgb_to_linear).unwrap_or(Vec3::ZERO);
        Self {
            color_stops: [
                stop(DEFAULT_COLOR_STOPS_HEX[0]),
                stop(DEFAULT_COLOR_STOPS_HEX[1]),
                stop(DEFAULT_COLOR_STOPS_HEX[2]),
            ],
            smoothing: POINTER_SMOOTHING,
            time_scale: TIME_SCALE,
        }
    }
}

impl FieldParams {
    /// Build params from three `#rrggbb` sRGB colours.
    pub fn from_hex_stops(stops: [&str; 3]) -> Option<Self> {
        let c0 = parse_hex_color(stops[0])?;
        let c1 = parse_hex_color(stops[1])?;
        let c2 = parse_hex_color(stops[2])?;
        Some(Self {
            color_stops: [srgb_to_linear(c0), srgb_to_linear(c1), srgb_to_linear(c2)],
            ..Self::default()
        })
    }
}

/// Full parameter set for one frame of field synthesis.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FieldUniforms {
    pub time: f32,
    pub mouse: Vec2,
    pub resolution: Vec2,
    pub color_stops: [Vec3; 3],
}

impl FieldUniforms {
    #[inline]
    pub fn aspect(&self) -> f32 {
        self.resolution.x / self.resolution.y.max(1.0)
    }

    /// Pack for upload; layout matches `FieldUniforms` in `field.wgsl`.
    pub fn to_gpu(&self) -> FieldUniformsGpu {
        let c = |v: Vec3| [v.x, v.y, v.z, 1.0];
        FieldUniformsGpu {
            resolution: self.resolution.to_array(),
            mouse: self.mouse.to_array(),
            time: self.time,
            _pad: [0.0; 3],
            color1: c(self.color_stops[0]),
            color2: c(self.color_stops[1]),
            color3: c(self.color_stops[2]),
        }
    }
}

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct FieldUniformsGpu {
    pub resolution: [f32; 2], // offset 0
    pub mouse: [f32; 2],      // offset 8
    pub time: f32,            // offset 16
    pub _pad: [f32; 3],       // vec4 below needs 16-byte alignment
    pub color1: [f32; 4],     // offset 32
    pub color2: [f32; 4],     // offset 48
    pub color3: [f32; 4],     // offset 64 -> total 80
}

/// Owns the smoothed pointer and regenerates the uniforms once per frame.
#[derive(Clone, Debug)]
pub struct FieldRenderer {
    params: FieldParams,
    pointer: SmoothedPointer,
    uniforms: FieldUniforms,
}

impl Default for FieldRenderer {
    fn default() -> Self {
        Self::new(FieldParams::default())
    }
}

impl FieldRenderer {
    pub fn new(params: FieldParams) -> Self {
        let uniforms = FieldUniforms {
            color_stops: params.color_stops,
            ..FieldUniforms::default()
        };
        Self {
            params,
            pointer: SmoothedPointer::default(),
            uniforms,
        }
    }

    /// Advance one frame: smooth the pointer toward `target`, rescale time and
    /// track the viewport size.
    ///
    /// Returns `None` when the viewport has a zero dimension; the caller skips
    /// drawing for that frame. Smoothing still advances so the pointer does not
    /// jump once the surface becomes drawable.
    pub fn advance(
        &mut self,
        frame: FrameTime,
        target: Vec2,
        viewport: (u32, u32),
    ) -> Option<&FieldUniforms> {
        self.pointer.step_by(target, self.params.smoothing);
        self.uniforms.time = frame.elapsed * self.params.time_scale;
        self.uniforms.mouse = self.pointer.pos;
        self.uniforms.color_stops = self.params.color_stops;
        let (w, h) = viewport;
        if w == 0 || h == 0 {
            return None;
        }
        self.uniforms.resolution = Vec2::new(w as f32, h as f32);
        Some(&self.uniforms)
    }

    pub fn pointer(&self) -> Vec2 {
        self.pointer.pos
    }
}

// ---------------- Per-pixel synthesis ----------------

/// GLSL `smoothstep`, including the reversed-edge form used for falloffs.
#[inline]
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Pointer proximity in `[0, 1]`; both points are aspect-corrected.
#[inline]
pub fn strength_at(p: Vec2, mouse: Vec2) -> f32 {
    smoothstep(STRENGTH_RADIUS, 0.0, p.distance(mouse))
}

/// Sequential domain warp: each octave displaces the already-displaced point.
#[inline]
pub fn warp(mut p: Vec2, strength: f32, time: f32) -> Vec2 {
    let amp = WARP_BASE + strength * WARP_STRENGTH_GAIN;
    for i in 1..=WARP_OCTAVES {
        let fi = i as f32;
        p.x += amp / fi * (fi * WARP_FREQUENCY * p.y + time).sin();
        p.y += amp / fi * (fi * WARP_FREQUENCY * p.x + time).cos();
    }
    p
}

/// Linear RGB colour at `uv` (origin bottom-left, `[0,1]²`).
pub fn shade(uv: Vec2, u: &FieldUniforms) -> Vec3 {
    let aspect = u.aspect();
    let mut p = uv * 2.0 - Vec2::ONE;
    p.x *= aspect;
    let m = Vec2::new(u.mouse.x * aspect, u.mouse.y);

    let strength = strength_at(p, m);
    let p = warp(p, strength, u.time);

    let [c1, c2, c3] = u.color_stops;
    let base = c1.lerp(c2, 0.5 + 0.5 * (p.x + p.y).sin());
    base.lerp(c3, TINT_AMPLITUDE * (u.time * TINT_RATE).sin())
}

/// Fill `out` with `width * height` sRGB RGBA8 pixels, top row first.
///
/// Returns `false` without touching `out` when either dimension is zero.
pub fn rasterize(u: &FieldUniforms, width: u32, height: u32, out: &mut Vec<u8>) -> bool {
    if width == 0 || height == 0 {
        return false;
    }
    let (w, h) = (width as usize, height as usize);
    out.resize(w * h * 4, 0);
    for row in 0..h {
        let v = 1.0 - (row as f32 + 0.5) / h as f32;
        for col in 0..w {
            let uv = Vec2::new((col as f32 + 0.5) / w as f32, v);
            let c = linear_to_srgb(shade(uv, u));
            let o = (row * w + col) * 4;
            out[o] = to_u8(c.x);
            out[o + 1] = to_u8(c.y);
            out[o + 2] = to_u8(c.z);
            out[o + 3] = 255;
        }
    }
    true
}

// ---------------- Colour helpers ----------------

/// Parse `#rrggbb` (or `rrggbb`) into sRGB floats in `[0, 1]`.
pub fn parse_hex_color(hex: &str) -> Option<Vec3> {
    let s = hex.trim().trim_start_matches('#');
    if s.len() != 6 || !s.is_ascii() {
        return None;
    }
    let ch = |i: usize| u8::from_str_radix(&s[i..i + 2], 16).ok();
    let (r, g, b) = (ch(0)?, ch(2)?, ch(4)?);
    Some(Vec3::new(r as f32, g as f32, b as f32) / 255.0)
}

#[inline]
pub fn srgb_to_linear(c: Vec3) -> Vec3 {
    let f = |v: f32| {
        if v <= 0.04045 {
            v / 12.92
        } else {
            ((v + 0.055) / 1.055).powf(2.4)
        }
    };
    Vec3::new(f(c.x), f(c.y), f(c.z))
}

#[inline]
pub fn linear_to_srgb(c: Vec3) -> Vec3 {
    let f = |v: f32| {
        let v = v.clamp(0.0, 1.0);
        if v <= 0.003_130_8 {
            v * 12.92
        } else {
            1.055 * v.powf(1.0 / 2.4) - 0.055
        }
    };
    Vec3::new(f(c.x), f(c.y), f(c.z))
}

#[inline]
fn to_u8(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0 + 0.5) as u8
}
