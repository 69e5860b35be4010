/// Style contributions collected for one target node.
///
/// Transform axes keep every pushed value but only the last one per axis is
/// serialized; earlier contributions are dropped rather than composed.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct StyleDraft {
    pub(crate) opacity: Option<f64>,
    pub(crate) color: Option<String>,
    pub(crate) translate_x: Vec<f64>,
    pub(crate) translate_y: Vec<f64>,
    pub(crate) scale: Vec<f64>,
    pub(crate) filters: Vec<String>,
}

impl StyleDraft {
    /// True when no declaration would be emitted for this node.
    pub(crate) fn is_empty(&self) -> bool {
        self.opacity.is_none()
            && self.color.is_none()
            && !self.has_transform()
            && self.filters.is_empty()
    }

    pub(crate) fn has_transform(&self) -> bool {
        !(self.translate_x.is_empty() && self.translate_y.is_empty() && self.scale.is_empty())
    }

    /// Append a filter part unless the identical part is already present.
    pub(crate) fn push_filter(&mut self, part: String) {
        if !self.filters.contains(&part) {
            self.filters.push(part);
        }
    }
}
