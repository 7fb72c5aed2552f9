// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Wiring configuration
//!
//! TOML-loadable knobs for a generation run. Every field has a working
//! default, so partial files (or none at all) are fine.

use crate::types::{WiringError, WiringResult};
use serde::{Deserialize, Serialize};

/// Tunables for a generation run
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WiringConfig {
    /// Initial capacity of the edge store, in edges
    pub edge_capacity: usize,

    /// Seed for the deterministic per-index random source
    pub draw_seed: u64,
}

impl Default for WiringConfig {
    fn default() -> Self {
        Self {
            edge_capacity: 1024,
            draw_seed: 0,
        }
    }
}

impl WiringConfig {
    /// Parse a TOML document; unknown keys are rejected, missing keys
    /// fall back to defaults.
    pub fn from_toml_str(text: &str) -> WiringResult<Self> {
        toml::from_str(text).map_err(|e| WiringError::Config(e.to_string()))
    }
}
