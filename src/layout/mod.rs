//! Static store layout: grid dimensions, landmark cells, and zones.
//!
//! The layout is loaded once (typically from YAML) and treated as a
//! read-only snapshot for the lifetime of the engine.

mod error;
mod zone;

pub use error::LayoutError;
pub use zone::Zone;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::GridCoord;

/// Full store definition loaded from YAML.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StoreLayout {
    /// Grid width in cells
    pub width: u32,
    /// Grid height in cells
    pub height: u32,
    /// Entrance cell (always walkable)
    pub entrance: GridCoord,
    /// Checkout cell (always walkable)
    pub checkout: GridCoord,
    /// Aisle zones, in declaration order
    #[serde(default)]
    pub zones: Vec<Zone>,
}

impl StoreLayout {
    /// Load a layout from a YAML file.
    pub fn load(path: &Path) -> Result<Self, LayoutError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Parse a layout from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, LayoutError> {
        let layout: StoreLayout = serde_yaml::from_str(yaml)?;
        layout.check()?;
        Ok(layout)
    }

    /// Look up a zone by id.
    pub fn zone(&self, id: &str) -> Option<&Zone> {
        self.zones.iter().find(|z| z.id == id)
    }

    /// Index of a zone in declaration order.
    pub fn zone_index(&self, id: &str) -> Option<usize> {
        self.zones.iter().position(|z| z.id == id)
    }

    /// Is the coordinate within the grid rectangle?
    #[inline]
    pub fn in_bounds(&self, coord: GridCoord) -> bool {
        coord.x >= 0
            && coord.y >= 0
            && (coord.x as u32) < self.width
            && (coord.y as u32) < self.height
    }

    /// Report pairs of zones whose rectangles overlap.
    ///
    /// Overlap is a configuration error: the grid build keeps
    /// last-writer-wins semantics but hosts should validate and fix the
    /// layout instead of relying on that precedence.
    pub fn validate(&self) -> Vec<(&str, &str)> {
        let mut conflicts = Vec::new();
        for (i, a) in self.zones.iter().enumerate() {
            for b in &self.zones[i + 1..] {
                if a.overlaps(b) {
                    conflicts.push((a.id.as_str(), b.id.as_str()));
                }
            }
        }
        conflicts
    }

    fn check(&self) -> Result<(), LayoutError> {
        if self.width == 0 || self.height == 0 {
            return Err(LayoutError::Invalid(format!(
                "grid dimensions must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if !self.in_bounds(self.entrance) {
            return Err(LayoutError::Invalid(format!(
                "entrance ({},{}) outside {}x{} grid",
                self.entrance.x, self.entrance.y, self.width, self.height
            )));
        }
        if !self.in_bounds(self.checkout) {
            return Err(LayoutError::Invalid(format!(
                "checkout ({},{}) outside {}x{} grid",
                self.checkout.x, self.checkout.y, self.width, self.height
            )));
        }
        Ok(())
    }
}
