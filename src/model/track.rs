use crate::model::value::AnimValue;

/// An animated channel. The variant decides where the resolved value lands.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(
    tag = "kind",
    rename_all = "kebab-case",
    rename_all_fields = "camelCase"
)]
pub enum Track {
    /// Drives one style property of the target node.
    Style {
        /// Animated property.
        property: StyleProperty,
        /// Samples sorted by `at_ms`.
        keyframes: Vec<Keyframe>,
    },
    /// Contributes one CSS filter function to the target node.
    CssFilter {
        /// Filter function name.
        #[serde(rename = "fn")]
        function: CssFilterFn,
        /// Unit appended to the resolved value.
        unit: CssUnit,
        /// Samples sorted by `at_ms`.
        keyframes: Vec<Keyframe>,
    },
    /// Overrides one attribute of an SVG filter primitive and references the filter.
    SvgFilterAttr {
        /// Id of the [`crate::SvgFilterDefinition`].
        filter_id: String,
        /// Id of the primitive inside that filter.
        primitive_id: String,
        /// Attribute name on the primitive, e.g. `stdDeviation`.
        attr: String,
        /// Samples sorted by `at_ms`.
        keyframes: Vec<Keyframe>,
    },
}

impl Track {
    /// Style track.
    pub fn style(property: StyleProperty, keyframes: Vec<Keyframe>) -> Self {
        Self::Style {
            property,
            keyframes,
        }
    }

    /// CSS filter track.
    pub fn css_filter(function: CssFilterFn, unit: CssUnit, keyframes: Vec<Keyframe>) -> Self {
        Self::CssFilter {
            function,
            unit,
            keyframes,
        }
    }

    /// SVG filter attribute track.
    pub fn svg_filter_attr(
        filter_id: impl Into<String>,
        primitive_id: impl Into<String>,
        attr: impl Into<String>,
        keyframes: Vec<Keyframe>,
    ) -> Self {
        Self::SvgFilterAttr {
            filter_id: filter_id.into(),
            primitive_id: primitive_id.into(),
            attr: attr.into(),
            keyframes,
        }
    }

    /// Keyframes of any track kind.
    pub fn keyframes(&self) -> &[Keyframe] {
        match self {
            Self::Style { keyframes, .. }
            | Self::CssFilter { keyframes, .. }
            | Self::SvgFilterAttr { keyframes, .. } => keyframes,
        }
    }
}

/// Style properties a [`Track::Style`] can drive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum StyleProperty {
    /// `opacity`, last write wins.
    #[serde(rename = "opacity")]
    Opacity,
    /// Horizontal translation in px.
    #[serde(rename = "transform.translateX")]
    TranslateX,
    /// Vertical translation in px.
    #[serde(rename = "transform.translateY")]
    TranslateY,
    /// Uniform scale factor.
    #[serde(rename = "transform.scale")]
    Scale,
    /// `color`, string values only.
    #[serde(rename = "color")]
    Color,
}

/// CSS `filter` functions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CssFilterFn {
    /// `blur()`
    Blur,
    /// `brightness()`
    Brightness,
    /// `contrast()`
    Contrast,
    /// `grayscale()`
    Grayscale,
    /// `hue-rotate()`
    HueRotate,
    /// `invert()`
    Invert,
    /// `saturate()`
    Saturate,
    /// `sepia()`
    Sepia,
}

impl CssFilterFn {
    /// CSS function name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Blur => "blur",
            Self::Brightness => "brightness",
            Self::Contrast => "contrast",
            Self::Grayscale => "grayscale",
            Self::HueRotate => "hue-rotate",
            Self::Invert => "invert",
            Self::Saturate => "saturate",
            Self::Sepia => "sepia",
        }
    }
}

/// Unit suffix for CSS filter arguments.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum CssUnit {
    /// Pixels.
    #[serde(rename = "px")]
    Px,
    /// Percent.
    #[serde(rename = "%")]
    Percent,
    /// Degrees.
    #[serde(rename = "deg")]
    Deg,
}

impl CssUnit {
    /// Unit suffix as written in CSS.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Px => "px",
            Self::Percent => "%",
            Self::Deg => "deg",
        }
    }
}

/// A `(time, value)` sample.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Keyframe {
    /// Offset inside one iteration, in `[0, duration_ms]`.
    pub at_ms: f64,
    /// Sampled value.
    pub value: AnimValue,
    /// Easing applied on the way to the next keyframe.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub easing: Option<String>,
    /// Hold this value until the next keyframe instead of interpolating.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub hold: bool,
}

impl Keyframe {
    /// Linear, non-held keyframe.
    pub fn new(at_ms: f64, value: impl Into<AnimValue>) -> Self {
        Self {
            at_ms,
            value: value.into(),
            easing: None,
            hold: false,
        }
    }

    /// Set the easing toward the next keyframe.
    pub fn with_easing(mut self, easing: impl Into<String>) -> Self {
        self.easing = Some(easing.into());
        self
    }

    /// Mark as a hold keyframe.
    pub fn held(mut self) -> Self {
        self.hold = true;
        self
    }
}
