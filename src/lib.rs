//! mir-motion resolves declarative animation timelines into a visual snapshot.
//!
//! Given timelines of keyframed tracks and a point in time, the engine
//! produces CSS text for the DOM renderer and a copy of the SVG filter
//! definitions with animated primitive attributes overlaid.
//!
//! # Pipeline overview
//!
//! 1. **Cursor**: `Timeline + global ms -> local ms | inactive` (delay,
//!    iterations, direction, fill mode) via [`resolve_cursor`]
//! 2. **Sample**: `Keyframe[] + local ms -> AnimValue` with per-keyframe
//!    easing via [`resolve_value`] and [`Easing`]
//! 3. **Assemble**: per-node style drafts and filter overlays, serialized into
//!    a [`PreviewSnapshot`] by [`build_snapshot`] / [`build_preview_snapshot`]
//!
//! Design constraints:
//!
//! - **Pure**: every entry point is a function of its arguments. There is no
//!   clock, cache or global registry; callers supply the time on every call.
//! - **Total**: resolution never fails. Bad easings are linear, bad iteration
//!   counts are one, non-numeric values hold.
//! - **Ordered**: timelines, bindings and tracks merge strictly in input order.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod foundation;
mod model;
mod snapshot;

pub use animation::cursor::{is_reverse_at_iteration, resolve_cursor};
pub use animation::ease::{Easing, parse_cubic_bezier, resolve_easing};
pub use animation::keyframes::resolve_value;
pub use foundation::error::{MotionError, MotionResult};
pub use foundation::format::{escape_attr_value, fmt_number};
pub use model::document::MotionDocument;
pub use model::filter::{FilterUnits, PrimitiveType, SvgFilterDefinition, SvgFilterPrimitive};
pub use model::timeline::{Binding, Direction, FillMode, IterationCount, Iterations, Timeline};
pub use model::track::{CssFilterFn, CssUnit, Keyframe, StyleProperty, Track};
pub use model::value::AnimValue;
pub use snapshot::builder::{PreviewSnapshot, build_preview_snapshot, build_snapshot};
pub use snapshot::css::NODE_ID_ATTR;
