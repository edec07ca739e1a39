//! Pointer tracking in normalized device coordinates.
//!
//! Raw viewport pixels are mapped to `[-1, 1]` on both axes with the origin at
//! the viewport center and `y` pointing up. The tracker only stores the most
//! recent sample; it never notifies anyone, so pointer movement does not cause
//! page re-renders. The frame loop reads the sample once per frame and feeds
//! it to [`SmoothedPointer`].

use crate::constants::POINTER_SMOOTHING;
use glam::Vec2;

/// Map viewport pixel coordinates to normalized device coordinates.
///
/// Returns `None` when the viewport has no usable size yet. Positions outside
/// the viewport map outside `[-1, 1]` and are intentionally not clamped.
#[inline]
pub fn normalize_pointer(
    client_x: f64,
    client_y: f64,
    viewport_w: f64,
    viewport_h: f64,
) -> Option<Vec2> {
    let usable = |v: f64| v.is_finite() && v > 0.0;
    if !usable(viewport_w) || !usable(viewport_h) {
        return None;
    }
    let x = (client_x / viewport_w) * 2.0 - 1.0;
    let y = -((client_y / viewport_h) * 2.0 - 1.0);
    Some(Vec2::new(x as f32, y as f32))
}

/// Latest raw pointer sample for the lifetime of the page.
#[derive(Clone, Copy, Debug, Default)]
pub struct PointerTracker {
    latest: Option<Vec2>,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a pointer-move event. Samples taken against a zero-sized
    /// viewport are dropped and the previous sample is kept.
    pub fn record(&mut self, client_x: f64, client_y: f64, viewport_w: f64, viewport_h: f64) {
        if let Some(p) = normalize_pointer(client_x, client_y, viewport_w, viewport_h) {
            self.latest = Some(p);
        }
    }

    /// Most recent sample, or the viewport center before the first move.
    #[inline]
    pub fn sample(&self) -> Vec2 {
        self.latest.unwrap_or(Vec2::ZERO)
    }
}

/// Exponentially smoothed copy of the pointer, owned by the field renderer.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SmoothedPointer {
    pub pos: Vec2,
}

impl SmoothedPointer {
    /// Advance one frame toward `target` by [`POINTER_SMOOTHING`] on each axis.
    #[inline]
    pub fn step(&mut self, target: Vec2) {
        self.step_by(target, POINTER_SMOOTHING);
    }

    #[inline]
    pub fn step_by(&mut self, target: Vec2, factor: f32) {
        self.pos.x += (target.x - self.pos.x) * factor;
        self.pos.y += (target.y - self.pos.y) * factor;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_step_covers_five_percent() {
        let mut s = SmoothedPointer::default();
        s.step(Vec2::new(1.0, -1.0));
        assert!((s.pos.x - 0.05).abs() < 1e-6);
        assert!((s.pos.y + 0.05).abs() < 1e-6);
    }

    #[test]
    fn non_finite_viewport_is_ignored() {
        assert!(normalize_pointer(10.0, 10.0, f64::NAN, 100.0).is_none());
        assert!(normalize_pointer(10.0, 10.0, 100.0, 0.0).is_none());
    }
}
