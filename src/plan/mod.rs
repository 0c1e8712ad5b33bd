//! Editing collaborator around the engine.

/// Assignment list, active channels and cached analysis.
pub mod store;
