use indexmap::IndexMap;

use crate::model::value::AnimValue;

/// An SVG `<filter>` element as the renderer mounts it inside `<defs>`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SvgFilterDefinition {
    /// Element id, referenced from CSS as `url(#id)`.
    pub id: String,
    /// Coordinate system for the filter region.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub units: Option<FilterUnits>,
    /// Primitive chain in document order.
    #[serde(default)]
    pub primitives: Vec<SvgFilterPrimitive>,
}

impl SvgFilterDefinition {
    /// Filter with no primitives.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            units: None,
            primitives: Vec::new(),
        }
    }

    /// Append a primitive.
    pub fn with_primitive(mut self, primitive: SvgFilterPrimitive) -> Self {
        self.primitives.push(primitive);
        self
    }

    /// Look up a primitive by id.
    pub fn primitive(&self, id: &str) -> Option<&SvgFilterPrimitive> {
        self.primitives.iter().find(|p| p.id == id)
    }
}

/// One filter primitive element (`feGaussianBlur`, `feOffset`, ...).
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SvgFilterPrimitive {
    /// Primitive id, unique within its filter.
    pub id: String,
    /// Element tag.
    #[serde(rename = "type")]
    pub kind: PrimitiveType,
    /// `in` attribute.
    #[serde(rename = "in", default, skip_serializing_if = "Option::is_none")]
    pub input: Option<String>,
    /// `in2` attribute.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub in2: Option<String>,
    /// `result` attribute.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
    /// Remaining presentation attributes, in authoring order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attrs: Option<IndexMap<String, AnimValue>>,
}

impl SvgFilterPrimitive {
    /// Primitive without wiring or attributes.
    pub fn new(id: impl Into<String>, kind: PrimitiveType) -> Self {
        Self {
            id: id.into(),
            kind,
            input: None,
            in2: None,
            result: None,
            attrs: None,
        }
    }

    /// Set one attribute.
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<AnimValue>) -> Self {
        self.attrs
            .get_or_insert_with(IndexMap::new)
            .insert(name.into(), value.into());
        self
    }

    /// Read one attribute.
    pub fn attr(&self, name: &str) -> Option<&AnimValue> {
        self.attrs.as_ref()?.get(name)
    }
}

/// `filterUnits` values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FilterUnits {
    /// Fractions of the target's bounding box.
    ObjectBoundingBox,
    /// User-space coordinates.
    UserSpaceOnUse,
}

/// SVG filter-primitive element names.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PrimitiveType {
    /// `<feBlend>`
    FeBlend,
    /// `<feColorMatrix>`
    FeColorMatrix,
    /// `<feComponentTransfer>`
    FeComponentTransfer,
    /// `<feComposite>`
    FeComposite,
    /// `<feConvolveMatrix>`
    FeConvolveMatrix,
    /// `<feDiffuseLighting>`
    FeDiffuseLighting,
    /// `<feDisplacementMap>`
    FeDisplacementMap,
    /// `<feDropShadow>`
    FeDropShadow,
    /// `<feFlood>`
    FeFlood,
    /// `<feGaussianBlur>`
    FeGaussianBlur,
    /// `<feImage>`
    FeImage,
    /// `<feMerge>`
    FeMerge,
    /// `<feMorphology>`
    FeMorphology,
    /// `<feOffset>`
    FeOffset,
    /// `<feSpecularLighting>`
    FeSpecularLighting,
    /// `<feTile>`
    FeTile,
    /// `<feTurbulence>`
    FeTurbulence,
}
