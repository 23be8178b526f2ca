//! Small domain-free helpers shared by the pages and components.

pub mod format;
pub mod youtube;
