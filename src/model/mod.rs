//! Input data model shared with the editor's JSON payloads.

pub(crate) mod document;
pub(crate) mod filter;
pub(crate) mod timeline;
pub(crate) mod track;
pub(crate) mod value;
