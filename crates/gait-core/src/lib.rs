//! Core types and definitions for GAIT.
//!
//! This crate defines the vocabulary shared across the workspace:
//! components, commands, snapshots, tuning config, errors, and constants.
//! It has no dependency on the ECS or any runtime framework.

pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod error;
pub mod state;
pub mod types;

pub use config::SteeringConfig;
pub use error::{GaitError, Result};
