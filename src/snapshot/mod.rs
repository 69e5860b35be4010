//! Snapshot assembly: per-node style drafts, CSS text and filter overlays.

pub(crate) mod builder;
pub(crate) mod css;
pub(crate) mod draft;
pub(crate) mod filters;
