// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
# syngen-observability

Logging initialization shared by syngen tools and tests.

Console output through `tracing-subscriber` with an env-filter built from
per-crate debug flags. `RUST_LOG`, when set, overrides the flags.
*/

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod init;

pub use init::{init_logging, DebugFlags};

/// Known syngen crate names for debug flags
pub const KNOWN_CRATES: &[&str] = &["syngen-wiring", "syngen-structures"];
