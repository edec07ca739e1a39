// Host-side tests for the field renderer reference implementation.

use folio_core::{
    parse_hex_color, rasterize, shade, smoothstep, srgb_to_linear, strength_at, warp, FieldParams,
    FieldRenderer, FieldUniforms, FrameTime, STRENGTH_RADIUS, TIME_SCALE,
};
use glam::{Vec2, Vec3};

fn frame(elapsed: f32) -> FrameTime {
    FrameTime { elapsed }
}

fn uniforms(time: f32, mouse: Vec2) -> FieldUniforms {
    FieldUniforms {
        time,
        mouse,
        resolution: Vec2::new(1600.0, 900.0),
        color_stops: FieldParams::default().color_stops,
    }
}

#[test]
fn strength_is_one_at_the_pointer() {
    for p in [Vec2::ZERO, Vec2::new(0.3, -0.9), Vec2::new(-1.7, 0.2)] {
        assert_eq!(strength_at(p, p), 1.0);
    }
}

#[test]
fn strength_vanishes_beyond_radius() {
    let m = Vec2::new(0.1, 0.1);
    for d in [STRENGTH_RADIUS, 0.9, 1.5, 4.0] {
        let p = m + Vec2::new(d, 0.0);
        assert!(strength_at(p, m) < 1e-6, "strength at distance {d}");
    }
    let near = strength_at(m + Vec2::new(0.79, 0.0), m);
    assert!(near > 0.0 && near < 0.01);
}

#[test]
fn strength_decreases_with_distance() {
    let m = Vec2::ZERO;
    let mut prev = strength_at(m, m);
    for i in 1..=16 {
        let s = strength_at(Vec2::new(i as f32 * 0.05, 0.0), m);
        assert!(s <= prev);
        prev = s;
    }
}

#[test]
fn smoothstep_matches_glsl_with_reversed_edges() {
    assert_eq!(smoothstep(0.0, 1.0, 0.5), 0.5);
    assert_eq!(smoothstep(0.8, 0.0, 0.0), 1.0);
    assert_eq!(smoothstep(0.8, 0.0, 0.8), 0.0);
    let a = smoothstep(0.8, 0.0, 0.2);
    let b = 1.0 - smoothstep(0.0, 0.8, 0.2);
    assert!((a - b).abs() < 1e-6);
}

#[test]
fn warp_octaves_are_sequential() {
    let p0 = Vec2::new(0.25, -0.4);
    let (strength, time) = (0.6, 1.3);
    let amp = 0.3 + 0.5 * strength;
    let mut p = p0;
    for i in 1..=3 {
        let fi = i as f32;
        p.x += amp / fi * (fi * 3.0 * p.y + time).sin();
        p.y += amp / fi * (fi * 3.0 * p.x + time).cos();
    }
    let got = warp(p0, strength, time);
    assert!((got - p).length() < 1e-6);

    // An independent (non-sequential) evaluation gives a different point
    let mut q = p0;
    for i in 1..=3 {
        let fi = i as f32;
        q.x += amp / fi * (fi * 3.0 * p0.y + time).sin();
        q.y += amp / fi * (fi * 3.0 * p0.x + time).cos();
    }
    assert!((got - q).length() > 1e-3);
}

#[test]
fn without_tint_colors_lie_between_first_two_stops() {
    let u = uniforms(0.0, Vec2::new(0.2, 0.1));
    let [c1, c2, _] = u.color_stops;
    for iy in 0..8 {
        for ix in 0..8 {
            let uv = Vec2::new(ix as f32 / 7.0, iy as f32 / 7.0);
            let c = shade(uv, &u);
            for k in 0..3 {
                let (lo, hi) = (c1[k].min(c2[k]), c1[k].max(c2[k]));
                assert!(c[k] >= lo - 1e-5 && c[k] <= hi + 1e-5);
            }
        }
    }
}

#[test]
fn tint_peaks_at_thirty_percent_toward_third_stop() {
    // sin(time * 0.2) == 1
    let t = std::f32::consts::FRAC_PI_2 / 0.2;
    let u = uniforms(t, Vec2::ZERO);
    let uv = Vec2::new(0.37, 0.61);
    let c = shade(uv, &u);
    let aspect = u.aspect();
    let mut p = uv * 2.0 - Vec2::ONE;
    p.x *= aspect;
    let m = Vec2::new(u.mouse.x * aspect, u.mouse.y);
    let p = warp(p, strength_at(p, m), t);
    let [c1, c2, c3] = u.color_stops;
    let base = c1.lerp(c2, 0.5 + 0.5 * (p.x + p.y).sin());
    let expected = base + (c3 - base) * 0.3;
    assert!((c - expected).length() < 1e-4);
}

#[test]
fn renderer_scales_time_and_smooths_pointer() {
    let mut r = FieldRenderer::default();
    let target = Vec2::new(1.0, -1.0);
    let u = *r.advance(frame(2.0), target, (1920, 1080)).unwrap();
    assert!((u.time - 2.0 * TIME_SCALE).abs() < 1e-6);
    assert!((u.mouse - Vec2::new(0.05, -0.05)).length() < 1e-6);
    assert_eq!(u.resolution, Vec2::new(1920.0, 1080.0));
}

#[test]
fn renderer_skips_frames_without_a_viewport() {
    let mut r = FieldRenderer::default();
    assert!(r.advance(frame(0.1), Vec2::ONE, (0, 720)).is_none());
    assert!(r.advance(frame(0.2), Vec2::ONE, (1280, 0)).is_none());
    // smoothing kept running while skipped
    assert!(r.pointer().x > 0.09);
    let u = r.advance(frame(0.3), Vec2::ONE, (1280, 720)).unwrap();
    assert_eq!(u.resolution, Vec2::new(1280.0, 720.0));
}

#[test]
fn resize_updates_resolution_every_frame() {
    let mut r = FieldRenderer::default();
    r.advance(frame(0.0), Vec2::ZERO, (800, 600));
    let u = *r.advance(frame(0.016), Vec2::ZERO, (1024, 768)).unwrap();
    assert_eq!(u.resolution, Vec2::new(1024.0, 768.0));
    let again = *r.advance(frame(0.032), Vec2::ZERO, (1024, 768)).unwrap();
    assert_eq!(again.resolution, u.resolution);
}

#[test]
fn default_stops_round_trip_to_hex_on_screen() {
    let params = FieldParams::default();
    let srgb = parse_hex_color("#1e40af").unwrap();
    assert!((params.color_stops[1] - srgb_to_linear(srgb)).length() < 1e-6);
}

#[test]
fn custom_hex_stops_are_linearised() {
    let p = FieldParams::from_hex_stops(["#000000", "#ffffff", "#808080"]).unwrap();
    assert_eq!(p.color_stops[0], Vec3::ZERO);
    assert!((p.color_stops[1] - Vec3::ONE).length() < 1e-6);
    assert!(p.color_stops[2].x < 0.5);
    assert!(FieldParams::from_hex_stops(["#000000", "nope", "#808080"]).is_none());
}

#[test]
fn rasterize_fills_opaque_rgba() {
    let u = uniforms(1.0, Vec2::ZERO);
    let mut buf = Vec::new();
    assert!(rasterize(&u, 16, 9, &mut buf));
    assert_eq!(buf.len(), 16 * 9 * 4);
    assert!(buf.chunks_exact(4).all(|px| px[3] == 255));
    assert!(!rasterize(&u, 0, 9, &mut buf));
    assert_eq!(buf.len(), 16 * 9 * 4);
}

#[test]
fn gpu_packing_preserves_values() {
    let u = uniforms(3.5, Vec2::new(0.25, -0.5));
    let g = u.to_gpu();
    assert_eq!(g.resolution, [1600.0, 900.0]);
    assert_eq!(g.mouse, [0.25, -0.5]);
    assert_eq!(g.time, 3.5);
    assert_eq!(g.color3[3], 1.0);
    assert_eq!(bytemuck::bytes_of(&g).len(), 80);
}
