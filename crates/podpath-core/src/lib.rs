//! # podpath-core
//!
//! The mount driver behind the `podpath` Flexvolume plugin.
//!
//! This crate provides:
//! - **Path derivation**: `<hostPath>/<namespace>/<pod name>/<pod uid>`.
//! - **Provisioning**: idempotent create-if-absent of the derived directory.
//! - **Mounting**: bind mount and forced unmount over `mount(2)`/`umount2(2)`.
//! - **Driver**: the `init`/`mount`/`unmount` protocol, each call turned
//!   into a single [`podpath_common::types::DriverOutput`].
//!
//! The driver keeps no state between calls. The host directory tree and the
//! kernel mount table are the only durable state.

#![cfg_attr(test, allow(clippy::expect_used, clippy::unwrap_used))]

pub mod driver;
pub mod mount;
pub mod path;
pub mod provision;
