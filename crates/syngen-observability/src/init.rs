// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Console logging initialization
//!
//! Builds an env-filter from per-crate debug flags and installs a fmt
//! subscriber. An explicit `RUST_LOG` wins over the flags.

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Per-crate debug switches; everything else logs at `info`
#[derive(Debug, Clone, Copy, Default)]
pub struct DebugFlags {
    pub wiring: bool,
    pub structures: bool,
}

impl DebugFlags {
    /// Enable debug output for every syngen crate
    pub fn all() -> Self {
        Self {
            wiring: true,
            structures: true,
        }
    }

    /// Render as an env-filter directive string
    pub fn to_filter_string(&self) -> String {
        let mut directives = vec!["info".to_string()];
        if self.wiring {
            directives.push("syngen-wiring=debug".to_string());
        }
        if self.structures {
            directives.push("syngen-structures=debug".to_string());
        }
        directives.join(",")
    }
}

/// Install a console subscriber filtered by `flags` (or `RUST_LOG` when
/// set). Fails if a global subscriber is already installed.
pub fn init_logging(flags: &DebugFlags) -> Result<()> {
    let filter = match std::env::var("RUST_LOG") {
        Ok(directives) if !directives.is_empty() => EnvFilter::new(directives),
        _ => EnvFilter::new(flags.to_filter_string()),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .map_err(|e| anyhow!("failed to initialize logging: {e}"))
}
