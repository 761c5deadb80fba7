use quadfit_engine::coords::{ContentExtent, Viewport};
use quadfit_engine::fit::{FitError, FitScale, compute_fit_scale};
use quadfit_engine::render::fit_geometry;

/// Deterministic spread of sizes from 1 px to a few thousand px.
fn sizes() -> Vec<f32> {
    let mut seed: u32 = 0x9e37_79b9;
    let mut out = vec![1.0, 2.0, 3.0, 100.0, 400.0, 1080.0, 1920.0, 4096.0];
    for _ in 0..24 {
        seed = seed.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        out.push(1.0 + (seed >> 20) as f32);
    }
    out
}

fn for_all(mut check: impl FnMut(f32, f32, f32, f32)) {
    let sizes = sizes();
    for &cw in &sizes {
        for &ch in sizes.iter().step_by(3) {
            for &vw in sizes.iter().step_by(5) {
                for &vh in sizes.iter().step_by(7) {
                    check(cw, ch, vw, vh);
                }
            }
        }
    }
}

#[test]
fn scales_stay_in_unit_range() {
    for_all(|cw, ch, vw, vh| {
        let s = compute_fit_scale(cw, ch, vw, vh).unwrap();
        assert!(s.x > 0.0 && s.x <= 1.0, "{cw}x{ch} in {vw}x{vh}: {s:?}");
        assert!(s.y > 0.0 && s.y <= 1.0, "{cw}x{ch} in {vw}x{vh}: {s:?}");
    });
}

#[test]
fn one_axis_always_touches_the_edge() {
    for_all(|cw, ch, vw, vh| {
        let s = compute_fit_scale(cw, ch, vw, vh).unwrap();
        assert_eq!(s.x.max(s.y), 1.0, "{cw}x{ch} in {vw}x{vh}: {s:?}");
    });
}

#[test]
fn fitted_quad_keeps_content_aspect() {
    for_all(|cw, ch, vw, vh| {
        let s = compute_fit_scale(cw, ch, vw, vh).unwrap();
        let on_screen = (s.x * vw) / (s.y * vh);
        let content = cw / ch;
        assert!(
            ((on_screen - content) / content).abs() < 1e-4,
            "{cw}x{ch} in {vw}x{vh}: {on_screen} vs {content}"
        );
    });
}

#[test]
fn pure_and_deterministic() {
    for_all(|cw, ch, vw, vh| {
        assert_eq!(compute_fit_scale(cw, ch, vw, vh), compute_fit_scale(cw, ch, vw, vh));
    });
}

#[test]
fn matching_aspect_is_undistorted() {
    for &w in &sizes() {
        for &h in sizes().iter().step_by(4) {
            assert_eq!(compute_fit_scale(w, h, w, h).unwrap(), FitScale::IDENTITY);
        }
    }
}

#[test]
fn zero_dimensions_never_produce_nan() {
    let cases = [
        (0.0, 1.0, 1.0, 1.0, "content_width"),
        (1.0, 0.0, 1.0, 1.0, "content_height"),
        (1.0, 1.0, 0.0, 1.0, "viewport_width"),
        (1.0, 1.0, 1.0, 0.0, "viewport_height"),
    ];
    for (cw, ch, vw, vh, name) in cases {
        match compute_fit_scale(cw, ch, vw, vh) {
            Err(FitError::InvalidArgument { name: got, .. }) => assert_eq!(got, name),
            other => panic!("expected InvalidArgument for {name}, got {other:?}"),
        }
    }
}

#[test]
fn resize_sequence_regenerates_geometry() {
    let text = ContentExtent::new(660, 90);
    let portrait = fit_geometry(text, Viewport::new(1080, 1920)).unwrap();
    let landscape = fit_geometry(text, Viewport::new(1920, 1080)).unwrap();

    // Wide text letterboxes in both orientations, less so in landscape.
    assert_eq!(portrait.scale().x, 1.0);
    assert_eq!(landscape.scale().x, 1.0);
    assert!(landscape.scale().y > portrait.scale().y);
}

#[test]
fn extreme_finite_inputs_never_escape_the_unit_range() {
    let extremes = [f32::MIN_POSITIVE, 1.0e-3, 1.0, 4096.0, 1.0e20, 3.0e38, f32::MAX];
    for &cw in &extremes {
        for &ch in &extremes {
            for &vw in &extremes {
                for &vh in &extremes {
                    match compute_fit_scale(cw, ch, vw, vh) {
                        Ok(s) => {
                            assert!(s.x > 0.0 && s.x <= 1.0, "{cw}x{ch} in {vw}x{vh}: {s:?}");
                            assert!(s.y > 0.0 && s.y <= 1.0, "{cw}x{ch} in {vw}x{vh}: {s:?}");
                            assert_eq!(s.x.max(s.y), 1.0, "{cw}x{ch} in {vw}x{vh}: {s:?}");
                        }
                        Err(FitError::ScaleUnderflow { ratio }) => {
                            assert!(ratio > 0.0 && (ratio as f32) == 0.0, "{cw}x{ch} in {vw}x{vh}: {ratio}");
                        }
                        Err(e) => panic!("{cw}x{ch} in {vw}x{vh}: unexpected {e}"),
                    }
                }
            }
        }
    }
}

#[test]
fn overflowing_aspects_still_fit() {
    let s = compute_fit_scale(3.0e38, 1.0e-3, 100.0, 100.0).unwrap();
    assert_eq!(s.x, 1.0);
    assert!(s.y > 0.0);

    assert_eq!(compute_fit_scale(3.0e38, 1.0e-3, 3.0e38, 1.0e-3).unwrap(), FitScale::IDENTITY);
}
