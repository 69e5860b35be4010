use super::*;
use crate::model::{
    filter::{PrimitiveType, SvgFilterPrimitive},
    timeline::{Direction, FillMode},
    track::{CssFilterFn, CssUnit, Keyframe},
};

fn ramp(a: impl Into<AnimValue>, b: impl Into<AnimValue>) -> Vec<Keyframe> {
    vec![Keyframe::new(0.0, a), Keyframe::new(1000.0, b)]
}

fn single(node: &str, track: Track) -> Timeline {
    Timeline::new(format!("t-{node}"), 1000.0).with_binding(Binding::new("b", node).with_track(track))
}

#[test]
fn nothing_active_yields_empty_css() {
    let snap = build_snapshot(&[], 0.0, &[]);
    assert!(snap.is_empty());
    assert!(snap.svg_filters.is_empty());
}

#[test]
fn later_timeline_overrides_opacity() {
    let a = single("n", Track::style(StyleProperty::Opacity, ramp(0.0, 1.0)));
    let b = single("n", Track::style(StyleProperty::Opacity, ramp(1.0, 0.5)));

    let snap = build_snapshot(&[a.clone(), b.clone()], 500.0, &[]);
    assert_eq!(snap.css_text, "[data-mir-node-id=\"n\"] > * {opacity:0.75;}");

    let snap = build_snapshot(&[b, a], 500.0, &[]);
    assert_eq!(snap.css_text, "[data-mir-node-id=\"n\"] > * {opacity:0.5;}");
}

#[test]
fn transforms_keep_last_value_per_axis_across_timelines() {
    let a = Timeline::new("a", 1000.0).with_binding(
        Binding::new("b", "n")
            .with_track(Track::style(StyleProperty::TranslateX, ramp(0.0, 100.0)))
            .with_track(Track::style(StyleProperty::Scale, ramp(1.0, 2.0))),
    );
    let b = single("n", Track::style(StyleProperty::TranslateX, ramp(0.0, 10.0)));

    let snap = build_snapshot(&[a, b], 500.0, &[]);
    assert_eq!(
        snap.css_text,
        "[data-mir-node-id=\"n\"] > * {transform:translateX(5px) scale(1.5);transform-origin:center;}"
    );
}

#[test]
fn color_takes_text_and_ignores_numbers() {
    let t = Timeline::new("t", 1000.0).with_binding(
        Binding::new("b", "n")
            .with_track(Track::style(StyleProperty::Color, ramp("red", "blue")))
            .with_track(Track::style(StyleProperty::Color, ramp(1.0, 2.0))),
    );
    let snap = build_snapshot(&[t], 999.0, &[]);
    assert_eq!(snap.css_text, "[data-mir-node-id=\"n\"] > * {color:red;}");
}

#[test]
fn mismatched_value_types_leave_node_out() {
    let t = single("n", Track::style(StyleProperty::Opacity, ramp("a", "b")));
    assert_eq!(build_snapshot(&[t], 100.0, &[]).css_text, "");
}

#[test]
fn bindings_without_target_are_skipped() {
    let filters = vec![SvgFilterDefinition::new("f")
        .with_primitive(SvgFilterPrimitive::new("p", PrimitiveType::FeOffset))];
    let t = single("", Track::svg_filter_attr("f", "p", "dx", ramp(0.0, 10.0)));
    let snap = build_snapshot(&[t], 500.0, &filters);
    assert_eq!(snap.css_text, "");
    assert!(matches!(snap.svg_filters[0], Cow::Borrowed(_)));
}

#[test]
fn css_filters_format_value_and_unit() {
    let t = Timeline::new("t", 1000.0).with_binding(
        Binding::new("b", "n")
            .with_track(Track::css_filter(CssFilterFn::Blur, CssUnit::Px, ramp(0.0, 8.0)))
            .with_track(Track::css_filter(CssFilterFn::HueRotate, CssUnit::Deg, ramp(0.0, 90.0)))
            .with_track(Track::css_filter(CssFilterFn::Saturate, CssUnit::Percent, ramp(100.0, 100.0))),
    );
    let snap = build_snapshot(&[t], 500.0, &[]);
    assert_eq!(
        snap.css_text,
        "[data-mir-node-id=\"n\"] > * {filter:blur(4px) hue-rotate(45deg) saturate(100%);}"
    );
}

#[test]
fn svg_filter_tracks_reference_filter_once_and_overlay_attrs() {
    let filters = vec![
        SvgFilterDefinition::new("glow").with_primitive(
            SvgFilterPrimitive::new("blur", PrimitiveType::FeGaussianBlur).with_attr("stdDeviation", 0.0),
        ),
        SvgFilterDefinition::new("unused"),
    ];
    let t = Timeline::new("t", 1000.0).with_binding(
        Binding::new("b", "n")
            .with_track(Track::svg_filter_attr("glow", "blur", "stdDeviation", ramp(0.0, 8.0)))
            .with_track(Track::svg_filter_attr("glow", "blur", "result", ramp("a", "b"))),
    );
    let snap = build_snapshot(&[t], 250.0, &filters);
    assert_eq!(snap.css_text, "[data-mir-node-id=\"n\"] > * {filter:url(#glow);}");

    let prim = &snap.svg_filters[0].primitives[0];
    assert_eq!(prim.attr("stdDeviation"), Some(&AnimValue::Number(2.0)));
    assert_eq!(prim.attr("result"), Some(&AnimValue::from("a")));
    assert!(matches!(snap.svg_filters[1], Cow::Borrowed(_)));
    // The input is never touched.
    assert_eq!(filters[0].primitives[0].attr("stdDeviation"), Some(&AnimValue::Number(0.0)));
}

#[test]
fn nodes_keep_first_seen_order() {
    let t = Timeline::new("t", 1000.0)
        .with_binding(Binding::new("b1", "z").with_track(Track::style(StyleProperty::Opacity, ramp(1.0, 1.0))))
        .with_binding(Binding::new("b2", "a").with_track(Track::style(StyleProperty::Opacity, ramp(0.0, 0.0))));
    let snap = build_snapshot(&[t], 0.0, &[]);
    assert_eq!(
        snap.css_text,
        "[data-mir-node-id=\"z\"] > * {opacity:1;}\n[data-mir-node-id=\"a\"] > * {opacity:0;}"
    );
}

#[test]
fn preview_uses_cursor_directly() {
    // Delay, direction and fill are ignored: the cursor is already local time.
    let t = single("n", Track::style(StyleProperty::Opacity, ramp(0.0, 1.0)))
        .with_delay_ms(5000.0)
        .with_direction(Direction::Reverse)
        .with_fill_mode(FillMode::None);
    let snap = build_preview_snapshot(&t, 250.0, &[]);
    assert_eq!(snap.css_text, "[data-mir-node-id=\"n\"] > * {opacity:0.25;}");
    assert_eq!(build_snapshot(std::slice::from_ref(&t), 250.0, &[]).css_text, "");
}

#[test]
fn snapshot_serializes_with_camel_case_keys() {
    let t = single("n", Track::style(StyleProperty::Opacity, ramp(0.0, 1.0)));
    let v = serde_json::to_value(build_snapshot(&[t], 500.0, &[])).unwrap();
    assert_eq!(v["cssText"], "[data-mir-node-id=\"n\"] > * {opacity:0.5;}");
    assert!(v["svgFilters"].as_array().unwrap().is_empty());
}
