//! # podpath-common
//!
//! Shared types, error definitions, configuration models, and constants
//! used across the podpath workspace.
//!
//! This crate is the leaf of the dependency graph. It depends on no other
//! internal crate and defines the wire shapes exchanged with the
//! orchestrator: the mount options payload and the driver result line.

#![cfg_attr(test, allow(clippy::expect_used, clippy::unwrap_used))]

pub mod config;
pub mod constants;
pub mod error;
pub mod types;
