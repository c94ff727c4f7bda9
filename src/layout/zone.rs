//! Zone (aisle) definition.

use serde::{Deserialize, Serialize};

use crate::core::GridCoord;

/// A named rectangular region of the store associated with a set of products.
///
/// Zones are static configuration: loaded once, never moved after the grid
/// is built. The rectangle occupies cells `origin.x .. origin.x + width`
/// by `origin.y .. origin.y + height` (exclusive).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    /// Stable identifier used in route requests
    pub id: String,
    /// Display name used in spoken/rendered instructions
    pub name: String,
    /// Top-left cell of the zone rectangle
    pub origin: GridCoord,
    /// Rectangle width in cells
    pub width: u32,
    /// Rectangle height in cells
    pub height: u32,
    /// Product identifiers stocked in this zone
    #[serde(default)]
    pub products: Vec<String>,
    /// Display-only color hint, ignored by the engine
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Zone {
    /// Geometric center of the zone rectangle (floor division)
    #[inline]
    pub fn center(&self) -> GridCoord {
        GridCoord::new(
            self.origin.x + (self.width as i32) / 2,
            self.origin.y + (self.height as i32) / 2,
        )
    }

    /// Does the zone rectangle, expanded by `margin` cells on every side,
    /// contain the coordinate?
    pub fn contains_with_margin(&self, coord: GridCoord, margin: i32) -> bool {
        coord.x >= self.origin.x - margin
            && coord.x < self.origin.x + self.width as i32 + margin
            && coord.y >= self.origin.y - margin
            && coord.y < self.origin.y + self.height as i32 + margin
    }

    /// Does this zone's rectangle overlap another zone's rectangle?
    pub fn overlaps(&self, other: &Zone) -> bool {
        self.origin.x < other.origin.x + other.width as i32
            && other.origin.x < self.origin.x + self.width as i32
            && self.origin.y < other.origin.y + other.height as i32
            && other.origin.y < self.origin.y + self.height as i32
    }
}
