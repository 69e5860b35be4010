use super::*;

const KEYWORDS: [&str; 5] = ["linear", "ease", "ease-in", "ease-out", "ease-in-out"];

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-3
}

#[test]
fn endpoints_are_stable() {
    for spec in KEYWORDS
        .iter()
        .copied()
        .chain(["cubic-bezier(0.1, 0.7, 1.0, 0.1)", "cubic-bezier(0,0,1,1)"])
    {
        let ease = Easing::parse(spec);
        assert_eq!(ease.apply(0.0), 0.0, "{spec}");
        assert_eq!(ease.apply(1.0), 1.0, "{spec}");
    }
}

#[test]
fn keywords_map_to_css_control_points() {
    assert_eq!(Easing::parse("linear"), Easing::Linear);
    assert_eq!(
        Easing::parse("ease"),
        Easing::CubicBezier {
            x1: 0.25,
            y1: 0.1,
            x2: 0.25,
            y2: 1.0
        }
    );
    assert_eq!(
        Easing::parse("ease-in-out"),
        Easing::CubicBezier {
            x1: 0.42,
            y1: 0.0,
            x2: 0.58,
            y2: 1.0
        }
    );
}

#[test]
fn missing_and_unknown_specs_are_linear() {
    assert_eq!(resolve_easing(None), Easing::Linear);
    assert_eq!(resolve_easing(Some("")), Easing::Linear);
    assert_eq!(resolve_easing(Some("bouncy")), Easing::Linear);
    assert_eq!(resolve_easing(Some("cubic-bezier(a,b,c,d)")), Easing::Linear);
    assert_eq!(resolve_easing(Some("cubic-bezier(0.1,0.2,0.3)")), Easing::Linear);
    assert_eq!(resolve_easing(Some("steps(4)")).apply(0.3), 0.3);
}

#[test]
fn cubic_bezier_parser_is_tolerant() {
    assert_eq!(
        parse_cubic_bezier("  CUBIC-BEZIER( 0.1 , 0.2,0.3 ,  0.4 ) "),
        Some([0.1, 0.2, 0.3, 0.4])
    );
    assert_eq!(parse_cubic_bezier("cubic-bezier (1,0,0,1)"), Some([1.0, 0.0, 0.0, 1.0]));
    assert_eq!(parse_cubic_bezier("cubic-bezier(1,0,0,1,5)"), None);
    assert_eq!(parse_cubic_bezier("cubic-bezier(NaN,0,0,1)"), None);
    assert_eq!(parse_cubic_bezier("bezier(0,0,1,1)"), None);
}

#[test]
fn identity_bezier_tracks_input() {
    let ease = Easing::parse("cubic-bezier(0.333333, 0.333333, 0.666667, 0.666667)");
    for t in [0.1, 0.25, 0.5, 0.9] {
        assert!(approx(ease.apply(t), t), "t={t}");
    }
}

#[test]
fn named_curves_have_expected_shape() {
    // Reference values from browser implementations of the CSS curves.
    assert!(approx(Easing::parse("ease").apply(0.5), 0.8024));
    assert!(approx(Easing::parse("ease-in").apply(0.5), 0.3153));
    assert!(approx(Easing::parse("ease-out").apply(0.5), 0.6847));
    assert!(approx(Easing::parse("ease-in-out").apply(0.5), 0.5));
}

#[test]
fn input_is_clamped_for_curves() {
    let ease = Easing::parse("ease");
    assert_eq!(ease.apply(-0.5), 0.0);
    assert_eq!(ease.apply(1.5), 1.0);
}

#[test]
fn flat_slope_falls_back_to_bisection() {
    // x(u) = u^3 here, so the slope at u = 1e-4 is far below the Newton threshold.
    let ease = Easing::parse("cubic-bezier(0, 0, 0, 1)");
    let a = ease.apply(1e-4);
    let b = ease.apply(0.5);
    assert!(a.is_finite() && b.is_finite());
    assert!(a < 0.02);
    assert!(a < b);
    assert!((0.0..=1.0).contains(&b));
}

#[test]
fn monotonic_spot_check() {
    for spec in ["ease", "ease-in", "ease-out", "ease-in-out"] {
        let ease = Easing::parse(spec);
        let a = ease.apply(0.25);
        let b = ease.apply(0.5);
        let c = ease.apply(0.75);
        assert!(a < b, "{spec}");
        assert!(b < c, "{spec}");
    }
}
