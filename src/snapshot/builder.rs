use std::borrow::Cow;

use indexmap::IndexMap;

use crate::{
    animation::{cursor::resolve_cursor, keyframes::resolve_value},
    model::{
        filter::SvgFilterDefinition,
        timeline::{Binding, Timeline},
        track::{StyleProperty, Track},
        value::AnimValue,
    },
    snapshot::{css::render_css, draft::StyleDraft, filters::FilterOverlays},
};

/// Resolved visual state for one instant.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewSnapshot<'a> {
    /// Newline-joined CSS rules; empty when nothing is active.
    pub css_text: String,
    /// Input filter definitions with animated attributes overlaid.
    ///
    /// Definitions without overlays are [`Cow::Borrowed`] from the input, so
    /// callers can skip re-rendering them.
    pub svg_filters: Vec<Cow<'a, SvgFilterDefinition>>,
}

impl PreviewSnapshot<'_> {
    /// True when no timeline contributed any CSS.
    pub fn is_empty(&self) -> bool {
        self.css_text.is_empty()
    }
}

/// Resolve every timeline at global time `global_ms` and merge the results.
///
/// Timelines, bindings and tracks merge strictly in input order; later
/// contributions override earlier ones field by field. Inactive timelines
/// contribute nothing.
#[tracing::instrument(level = "trace", skip(timelines, svg_filters), fields(timelines = timelines.len()))]
pub fn build_snapshot<'a>(
    timelines: &[Timeline],
    global_ms: f64,
    svg_filters: &'a [SvgFilterDefinition],
) -> PreviewSnapshot<'a> {
    let mut acc = SnapshotAccumulator::default();
    for timeline in timelines {
        let Some(cursor_ms) = resolve_cursor(timeline, global_ms) else {
            tracing::trace!(timeline = %timeline.id, "timeline inactive");
            continue;
        };
        acc.apply_timeline(timeline, cursor_ms);
    }
    acc.finish(svg_filters)
}

/// Resolve a single timeline at an already-resolved local cursor.
///
/// Used by the editor preview, where the playhead is the timeline's own time.
#[tracing::instrument(level = "trace", skip(timeline, svg_filters), fields(timeline = %timeline.id))]
pub fn build_preview_snapshot<'a>(
    timeline: &Timeline,
    cursor_ms: f64,
    svg_filters: &'a [SvgFilterDefinition],
) -> PreviewSnapshot<'a> {
    let mut acc = SnapshotAccumulator::default();
    acc.apply_timeline(timeline, cursor_ms);
    acc.finish(svg_filters)
}

#[derive(Default)]
struct SnapshotAccumulator {
    drafts: IndexMap<String, StyleDraft>,
    overlays: FilterOverlays,
}

impl SnapshotAccumulator {
    fn apply_timeline(&mut self, timeline: &Timeline, cursor_ms: f64) {
        for binding in &timeline.bindings {
            self.apply_binding(binding, cursor_ms);
        }
    }

    fn apply_binding(&mut self, binding: &Binding, cursor_ms: f64) {
        if binding.target_node_id.is_empty() {
            tracing::trace!(binding = %binding.id, "binding has no target");
            return;
        }
        let draft = self
            .drafts
            .entry(binding.target_node_id.clone())
            .or_default();

        for track in &binding.tracks {
            let value = resolve_value(track.keyframes(), cursor_ms);
            match track {
                Track::Style { property, .. } => apply_style(draft, *property, value),
                Track::CssFilter { function, unit, .. } => {
                    draft.push_filter(format!("{}({value}{})", function.as_str(), unit.as_str()));
                }
                Track::SvgFilterAttr {
                    filter_id,
                    primitive_id,
                    attr,
                    ..
                } => {
                    draft.push_filter(format!("url(#{filter_id})"));
                    self.overlays.record(filter_id, primitive_id, attr, value);
                }
            }
        }
    }

    fn finish(self, svg_filters: &[SvgFilterDefinition]) -> PreviewSnapshot<'_> {
        let css_text = render_css(&self.drafts);
        tracing::debug!(
            nodes = self.drafts.len(),
            overlays = !self.overlays.is_empty(),
            css_bytes = css_text.len(),
            "snapshot resolved"
        );
        PreviewSnapshot {
            css_text,
            svg_filters: self.overlays.apply(svg_filters),
        }
    }
}

fn apply_style(draft: &mut StyleDraft, property: StyleProperty, value: AnimValue) {
    match (property, value) {
        (StyleProperty::Opacity, AnimValue::Number(v)) => draft.opacity = Some(v),
        (StyleProperty::TranslateX, AnimValue::Number(v)) => draft.translate_x.push(v),
        (StyleProperty::TranslateY, AnimValue::Number(v)) => draft.translate_y.push(v),
        (StyleProperty::Scale, AnimValue::Number(v)) => draft.scale.push(v),
        (StyleProperty::Color, AnimValue::Text(s)) => draft.color = Some(s),
        (property, value) => {
            tracing::trace!(?property, ?value, "value type does not fit property");
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/snapshot/builder.rs"]
mod tests;
