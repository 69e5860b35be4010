use super::*;

#[test]
fn empty_drafts_produce_no_rule() {
    assert_eq!(render_rule("n", &StyleDraft::default()), None);

    let mut drafts = IndexMap::new();
    drafts.insert("n".to_owned(), StyleDraft::default());
    assert_eq!(render_css(&drafts), "");
}

#[test]
fn declarations_follow_fixed_order() {
    let mut draft = StyleDraft::default();
    draft.push_filter("blur(2px)".to_owned());
    draft.scale.push(1.5);
    draft.color = Some("red".to_owned());
    draft.opacity = Some(0.5);

    assert_eq!(
        render_rule("node-1", &draft).unwrap(),
        "[data-mir-node-id=\"node-1\"] > * {opacity:0.5;color:red;transform:scale(1.5);transform-origin:center;filter:blur(2px);}"
    );
}

#[test]
fn transform_uses_last_value_per_axis_in_fixed_order() {
    let draft = StyleDraft {
        translate_x: vec![10.0, 20.0],
        translate_y: vec![-4.0],
        scale: vec![2.0, 0.5],
        ..StyleDraft::default()
    };
    assert_eq!(
        render_rule("n", &draft).unwrap(),
        "[data-mir-node-id=\"n\"] > * {transform:translateX(20px) translateY(-4px) scale(0.5);transform-origin:center;}"
    );
}

#[test]
fn filter_parts_are_deduplicated_and_space_joined() {
    let mut draft = StyleDraft::default();
    draft.push_filter("url(#f)".to_owned());
    draft.push_filter("blur(1px)".to_owned());
    draft.push_filter("url(#f)".to_owned());
    assert_eq!(draft.filters, vec!["url(#f)", "blur(1px)"]);
    assert!(render_rule("n", &draft).unwrap().ends_with("{filter:url(#f) blur(1px);}"));
}

#[test]
fn node_ids_are_escaped_and_rules_newline_joined() {
    let opaque = StyleDraft {
        opacity: Some(1.0),
        ..StyleDraft::default()
    };
    let mut drafts = IndexMap::new();
    drafts.insert(r#"we"ird\id"#.to_owned(), opaque.clone());
    drafts.insert("plain".to_owned(), opaque);
    assert_eq!(
        render_css(&drafts),
        "[data-mir-node-id=\"we\\\"ird\\\\id\"] > * {opacity:1;}\n[data-mir-node-id=\"plain\"] > * {opacity:1;}"
    );
}
