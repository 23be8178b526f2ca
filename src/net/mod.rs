//! Network layer: wire types and REST helpers for the summarizer backend.

pub mod api;
pub mod types;
