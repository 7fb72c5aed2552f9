// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
# syngen-structures

Growable storage primitives shared by the wiring crates.

The only export is [`DynamicArray`], an owned capacity-doubling buffer with
fallible growth. Edge index arrays and every per-synapse state array are
built on it.
*/

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod dynamic_array;

pub use dynamic_array::{DynamicArray, StructureError, StructureResult};
