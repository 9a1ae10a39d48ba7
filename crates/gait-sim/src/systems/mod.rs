//! Systems that operate on the harness world each tick.
//!
//! Systems are plain functions over `&mut World` (or `&World` when
//! read-only). All per-actor state lives in components.

pub mod movement;
pub mod snapshot;
pub mod steering;
