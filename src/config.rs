//! Run configuration.
//!
//! Stored as a JSON object on disk:
//! ```json
//! {
//!   "route": { "origin": "VVO", "destination": "TLV" }
//! }
//! ```
//! Every key is optional. Command-line flags take precedence over the file,
//! and the file over the built-in VVO/TLV route.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

use crate::route::Route;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RouteConfig {
    #[serde(default)]
    pub route: Route,
}

impl RouteConfig {
    /// Loads the config from a JSON file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_json(&content)
            .with_context(|| format!("invalid config {}", path.display()))
    }

    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Applies command-line overrides on top of the configured route.
    pub fn with_overrides(mut self, origin: Option<String>, destination: Option<String>) -> Self {
        if let Some(origin) = origin {
            self.route.origin = origin;
        }
        if let Some(destination) = destination {
            self.route.destination = destination;
        }
        self
    }
}
