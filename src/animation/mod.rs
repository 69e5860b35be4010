//! Time resolution: easing curves, keyframe sampling and timeline cursors.

pub(crate) mod cursor;
pub(crate) mod ease;
pub(crate) mod keyframes;
