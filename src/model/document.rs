use std::path::Path;

use anyhow::Context as _;

use crate::{
    foundation::error::{MotionError, MotionResult},
    model::{filter::SvgFilterDefinition, timeline::Timeline},
};

/// The editor's animation payload: every timeline plus the filter definitions
/// their `svg-filter-attr` tracks point at.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MotionDocument {
    /// Timelines in merge order.
    #[serde(default)]
    pub timelines: Vec<Timeline>,
    /// Filter definitions mounted in the SVG `<defs>` block.
    #[serde(default)]
    pub svg_filters: Vec<SvgFilterDefinition>,
}

impl MotionDocument {
    /// Parse a document from JSON text.
    pub fn from_json_str(s: &str) -> MotionResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Read and parse a JSON document from disk.
    pub fn from_path(path: &Path) -> MotionResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read motion document '{}'", path.display()))?;
        Self::from_json_str(&text)
    }

    /// Find a timeline by id.
    pub fn timeline(&self, id: &str) -> MotionResult<&Timeline> {
        self.timelines
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| MotionError::lookup(format!("unknown timeline '{id}'")))
    }

    /// Latest finite end time across all timelines, if any timeline ends.
    pub fn end_ms(&self) -> Option<f64> {
        self.timelines
            .iter()
            .filter_map(Timeline::end_ms)
            .fold(None, |acc, end| Some(acc.map_or(end, |a: f64| a.max(end))))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/model/document.rs"]
mod tests;
