use std::str::FromStr;

use serde::Deserialize as _;

use crate::model::track::Track;

/// A named animation clip with its own temporal configuration.
///
/// Timelines are read-only inputs to the resolver; nothing in this crate
/// mutates them.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Timeline {
    /// Stable identifier.
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Length of one iteration in milliseconds (clamped to `>= 1` upstream).
    pub duration_ms: f64,
    /// Start delay in milliseconds; `None` and negative values mean `0`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delay_ms: Option<f64>,
    /// Raw iteration count; see [`Iterations::from_count`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iterations: Option<IterationCount>,
    /// Playback direction per iteration.
    #[serde(default, deserialize_with = "lenient_keyword")]
    pub direction: Direction,
    /// Visibility outside the active window.
    #[serde(default, deserialize_with = "lenient_keyword")]
    pub fill_mode: FillMode,
    /// Default easing offered by the editor for new keyframes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub easing: Option<String>,
    /// Target bindings, in merge order.
    #[serde(default)]
    pub bindings: Vec<Binding>,
}

impl Timeline {
    /// Timeline with defaults: no delay, one iteration, normal direction, no fill.
    pub fn new(id: impl Into<String>, duration_ms: f64) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            duration_ms,
            delay_ms: None,
            iterations: None,
            direction: Direction::Normal,
            fill_mode: FillMode::None,
            easing: None,
            bindings: Vec::new(),
        }
    }

    /// Set the start delay.
    pub fn with_delay_ms(mut self, delay_ms: f64) -> Self {
        self.delay_ms = Some(delay_ms);
        self
    }

    /// Set the iteration count; `None` restores the default of one.
    pub fn with_iterations(mut self, iterations: Option<IterationCount>) -> Self {
        self.iterations = iterations;
        self
    }

    /// Set the playback direction.
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Set the fill mode.
    pub fn with_fill_mode(mut self, fill_mode: FillMode) -> Self {
        self.fill_mode = fill_mode;
        self
    }

    /// Append a binding.
    pub fn with_binding(mut self, binding: Binding) -> Self {
        self.bindings.push(binding);
        self
    }

    /// Normalized iteration count.
    pub fn iterations(&self) -> Iterations {
        Iterations::from_count(self.iterations.as_ref())
    }

    /// Iteration length used for cursor math; never below one millisecond.
    pub fn effective_duration_ms(&self) -> f64 {
        if self.duration_ms.is_finite() {
            self.duration_ms.max(1.0)
        } else {
            1.0
        }
    }

    /// Start delay used for cursor math; never negative.
    pub fn effective_delay_ms(&self) -> f64 {
        match self.delay_ms {
            Some(d) if d.is_finite() => d.max(0.0),
            _ => 0.0,
        }
    }

    /// Global time at which the last iteration ends, or `None` when looping forever.
    pub fn end_ms(&self) -> Option<f64> {
        let iterations = self.iterations();
        match iterations {
            Iterations::Finite(_) => Some(
                self.effective_delay_ms() + iterations.total_duration_ms(self.effective_duration_ms()),
            ),
            Iterations::Infinite => None,
        }
    }
}

/// Association of a timeline with one target node.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Binding {
    /// Stable identifier.
    pub id: String,
    /// Key into the external node tree; empty means the binding is skipped.
    #[serde(default)]
    pub target_node_id: String,
    /// Animated channels, in merge order.
    #[serde(default)]
    pub tracks: Vec<Track>,
}

impl Binding {
    /// Binding without tracks.
    pub fn new(id: impl Into<String>, target_node_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            target_node_id: target_node_id.into(),
            tracks: Vec::new(),
        }
    }

    /// Append a track.
    pub fn with_track(mut self, track: Track) -> Self {
        self.tracks.push(track);
        self
    }
}

/// Iteration count as it appears in documents: a number or a keyword.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum IterationCount {
    /// Plain count; fractional values are floored.
    Count(f64),
    /// Keyword form, normally `"infinite"`.
    Keyword(String),
}

impl IterationCount {
    /// The `infinite` sentinel.
    pub fn infinite() -> Self {
        Self::Keyword("infinite".to_owned())
    }
}

/// Normalized iteration count.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Iterations {
    /// A positive whole number of iterations.
    Finite(u64),
    /// Loop forever.
    Infinite,
}

impl Default for Iterations {
    fn default() -> Self {
        Self::Finite(1)
    }
}

impl Iterations {
    /// Normalize a raw count. Missing or invalid input yields one iteration.
    pub fn from_count(count: Option<&IterationCount>) -> Self {
        let n = match count {
            None => return Self::default(),
            Some(IterationCount::Count(n)) => *n,
            Some(IterationCount::Keyword(k)) => {
                let k = k.trim();
                if k.eq_ignore_ascii_case("infinite") {
                    return Self::Infinite;
                }
                match k.parse::<f64>() {
                    Ok(n) => n,
                    Err(_) => return Self::default(),
                }
            }
        };
        if !n.is_finite() || n.floor() < 1.0 {
            return Self::default();
        }
        Self::Finite(n.floor() as u64)
    }

    /// Length of the whole active window; `+inf` when infinite.
    pub fn total_duration_ms(self, duration_ms: f64) -> f64 {
        match self {
            Self::Finite(n) => duration_ms * n as f64,
            Self::Infinite => f64::INFINITY,
        }
    }
}

/// Playback direction, following CSS `animation-direction`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    /// Every iteration runs forward.
    #[default]
    Normal,
    /// Every iteration runs backward.
    Reverse,
    /// Odd iterations run backward.
    Alternate,
    /// Even iterations run backward.
    AlternateReverse,
}

impl FromStr for Direction {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "normal" => Ok(Self::Normal),
            "reverse" => Ok(Self::Reverse),
            "alternate" => Ok(Self::Alternate),
            "alternate-reverse" => Ok(Self::AlternateReverse),
            _ => Err(()),
        }
    }
}

/// Visibility outside the active run, following CSS `animation-fill-mode`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FillMode {
    /// Inactive before the start and after the end.
    #[default]
    None,
    /// Hold the final value after the end.
    Forwards,
    /// Show the starting value during the delay.
    Backwards,
    /// Both of the above.
    Both,
}

impl FillMode {
    /// Whether the timeline stays visible before its delay elapses.
    pub fn fills_backwards(self) -> bool {
        matches!(self, Self::Backwards | Self::Both)
    }

    /// Whether the timeline stays visible after its last iteration.
    pub fn fills_forwards(self) -> bool {
        matches!(self, Self::Forwards | Self::Both)
    }
}

impl FromStr for FillMode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Self::None),
            "forwards" => Ok(Self::Forwards),
            "backwards" => Ok(Self::Backwards),
            "both" => Ok(Self::Both),
            _ => Err(()),
        }
    }
}

// Unknown or mistyped keywords fall back to the default instead of failing the document.
fn lenient_keyword<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: FromStr + Default,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw
        .as_ref()
        .and_then(serde_json::Value::as_str)
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or_default())
}

#[cfg(test)]
#[path = "../../tests/unit/model/timeline.rs"]
mod tests;
