//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! The submission state machine is a plain synchronous struct so the whole
//! interaction contract (validation, loading, error, result, dismissal) can
//! be unit-tested natively. Components hold it in an `RwSignal` and apply
//! transitions from event handlers and async tasks.

pub mod submission;
