//! Field extractors for the export object.
//!
//! Four stateless sub-algorithms, one per logical field: props,
//! methods/computed (shared shape), components, and the whole-tree event
//! scan. Each consumes one sub-tree and produces a list of records; any
//! unexpected shape degrades to an empty or absent value for that field
//! only.

mod components;
mod events;
mod members;
mod props;

pub(crate) use components::extract_components;
pub(crate) use events::scan_events;
pub(crate) use members::extract_members;
pub(crate) use props::extract_props;
