// Copyright 2025 the Rackplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the Rackplan demos.

use std::error::Error;
use std::fs;
use std::path::Path;

use rackplan_layout::{LayoutConfig, OverlaySelection};
use rackplan_view::CameraConfig;
use serde::{Deserialize, Serialize};

/// Everything a demo needs, loadable from JSON.
///
/// Missing fields fall back to their defaults, so `{}` is a valid file and
/// highlights the standard group. Use `"overlay": null` for no highlight.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Floor layout.
    pub layout: LayoutConfig,
    /// Camera tuning.
    pub camera: CameraConfig,
    /// Highlighted group, if any.
    pub overlay: Option<OverlaySelection>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            layout: LayoutConfig::default(),
            camera: CameraConfig::default(),
            overlay: Some(OverlaySelection::default()),
        }
    }
}

impl DemoConfig {
    /// Parses and validates a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self, Box<dyn Error>> {
        let config: Self = serde_json::from_str(json)?;
        config.layout.validate()?;
        Ok(config)
    }

    /// Reads a JSON configuration from `path`, or returns the defaults when
    /// no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self, Box<dyn Error>> {
        match path {
            Some(path) => {
                log::info!("loading configuration from {}", path.display());
                Self::from_json(&fs::read_to_string(path)?)
            }
            None => Ok(Self::default()),
        }
    }
}
