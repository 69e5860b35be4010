use indexmap::IndexMap;

use crate::{
    foundation::format::{escape_attr_value, fmt_number, write_number},
    snapshot::draft::StyleDraft,
};

/// Attribute the DOM renderer stamps on every node wrapper.
pub const NODE_ID_ATTR: &str = "data-mir-node-id";

/// Serialize drafts into newline-joined rules, skipping nodes with nothing to say.
pub(crate) fn render_css(drafts: &IndexMap<String, StyleDraft>) -> String {
    drafts
        .iter()
        .filter_map(|(node_id, draft)| render_rule(node_id, draft))
        .collect::<Vec<_>>()
        .join("\n")
}

/// `[data-mir-node-id="<id>"] > * {decl;...;}` in the order opacity, color,
/// transform, filter.
pub(crate) fn render_rule(node_id: &str, draft: &StyleDraft) -> Option<String> {
    if draft.is_empty() {
        return None;
    }

    let mut out = format!(
        "[{NODE_ID_ATTR}=\"{}\"] > * {{",
        escape_attr_value(node_id)
    );
    if let Some(opacity) = draft.opacity {
        out.push_str("opacity:");
        write_number(&mut out, opacity);
        out.push(';');
    }
    if let Some(color) = &draft.color {
        out.push_str("color:");
        out.push_str(color);
        out.push(';');
    }
    if draft.has_transform() {
        out.push_str("transform:");
        out.push_str(&compose_transform(draft));
        out.push_str(";transform-origin:center;");
    }
    if !draft.filters.is_empty() {
        out.push_str("filter:");
        out.push_str(&draft.filters.join(" "));
        out.push(';');
    }
    out.push('}');
    Some(out)
}

fn compose_transform(draft: &StyleDraft) -> String {
    let mut parts = Vec::with_capacity(3);
    if let Some(&x) = draft.translate_x.last() {
        parts.push(format!("translateX({}px)", fmt_number(x)));
    }
    if let Some(&y) = draft.translate_y.last() {
        parts.push(format!("translateY({}px)", fmt_number(y)));
    }
    if let Some(&s) = draft.scale.last() {
        parts.push(format!("scale({})", fmt_number(s)));
    }
    parts.join(" ")
}

#[cfg(test)]
#[path = "../../tests/unit/snapshot/css.rs"]
mod tests;
