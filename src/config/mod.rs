//! Unified configuration loading for the navigation engine.
//!
//! Bundles the per-module configuration sections into one YAML-loadable
//! document. Every field has a default, so an empty file (or no file at
//! all) yields a fully working configuration.

mod error;

pub use error::ConfigLoadError;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::narration::NarrationConfig;
use crate::pathfinding::AStarConfig;
use crate::route::RouteConfig;

/// Full engine configuration loaded from YAML
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct NavConfig {
    /// Route composition settings (includes per-leg A* settings)
    pub route: RouteConfig,

    /// Narration settings
    pub narration: NarrationConfig,
}

impl NavConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigLoadError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigLoadError::Io(e.to_string()))?;
        Self::from_yaml(&contents)
    }

    /// Load from default config path (configs/nav.yaml), falling back to
    /// defaults when the file does not exist
    pub fn load_default() -> Result<Self, ConfigLoadError> {
        let path = Path::new("configs/nav.yaml");
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        serde_yaml::from_str(yaml).map_err(|e| ConfigLoadError::Parse(e.to_string()))
    }

    /// Get the route composition config
    pub fn to_route_config(&self) -> RouteConfig {
        self.route.clone()
    }

    /// Get the A* config used for each route leg
    pub fn to_astar_config(&self) -> AStarConfig {
        self.route.astar.clone()
    }

    /// Get the narration config
    pub fn to_narration_config(&self) -> NarrationConfig {
        self.narration.clone()
    }
}
