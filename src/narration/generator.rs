//! Zone-based route narration.
//!
//! Walks a composed path and attaches spoken-style instructions at the
//! points where the shopper enters a new zone. The output keeps every
//! step of the input path; only the `instruction` fields change.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::core::{GridCoord, PathStep};
use crate::layout::StoreLayout;

/// Narration configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct NarrationConfig {
    /// Margin (cells) by which zone rectangles are expanded when deciding
    /// that a step is "at" a zone
    pub zone_margin: i32,
    /// Chebyshev radius around entrance/checkout treated as those landmarks
    pub landmark_radius: i32,
    /// Minimum number of instructions before the midpoint fallback fires
    pub min_instructions: usize,
    /// Path length above which the midpoint fallback may fire
    pub long_route_len: usize,
    /// Columns at or left of this read as "left"
    pub left_max_col: i32,
    /// Columns at or right of this read as "right"
    pub right_min_col: i32,
    /// Rows at or above this read as "front"
    pub front_max_row: i32,
    /// Rows at or below this read as "back"
    pub back_min_row: i32,
}

impl Default for NarrationConfig {
    fn default() -> Self {
        Self {
            zone_margin: 2,
            landmark_radius: 1,
            min_instructions: 3,
            long_route_len: 10,
            left_max_col: 6,
            right_min_col: 14,
            front_max_row: 4,
            back_min_row: 10,
        }
    }
}

/// What a path step is standing at, for narration purposes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Spot<'a> {
    Entrance,
    Checkout,
    Aisle(&'a str, &'a str, GridCoord), // id, display name, center
}

impl<'a> Spot<'a> {
    fn id(&self) -> &'a str {
        match self {
            Spot::Entrance => "entrance",
            Spot::Checkout => "checkout",
            Spot::Aisle(id, _, _) => id,
        }
    }

    fn name(&self) -> &'a str {
        match self {
            Spot::Entrance => "Store Entrance",
            Spot::Checkout => "Checkout Counter",
            Spot::Aisle(_, name, _) => name,
        }
    }
}

/// Attaches instructions to composed routes.
pub struct Narrator<'a> {
    layout: &'a StoreLayout,
    config: NarrationConfig,
}

impl<'a> Narrator<'a> {
    /// Create a new narrator
    pub fn new(layout: &'a StoreLayout, config: NarrationConfig) -> Self {
        Self { layout, config }
    }

    /// Create with default configuration
    pub fn with_defaults(layout: &'a StoreLayout) -> Self {
        Self::new(layout, NarrationConfig::default())
    }

    /// Annotate a path with zone-transition instructions.
    ///
    /// The result has the same length and positions as the input. The first
    /// step always carries the start instruction and (for paths of more
    /// than one step) the last always carries the checkout instruction;
    /// interior instructions fire when the step's detected zone changes.
    pub fn annotate(&self, path: &[PathStep]) -> Vec<PathStep> {
        if path.is_empty() {
            return Vec::new();
        }

        let mut out = path.to_vec();
        let mut announced: HashSet<String> = HashSet::new();
        let mut current = self.spot_at(path[0].position).map(|s| s.id().to_string());

        out[0].instruction = Some(format!(
            "Start at the Store Entrance near the {} of the store",
            self.position_label(self.layout.entrance)
        ));

        let last = path.len() - 1;
        for i in 1..last {
            let Some(spot) = self.spot_at(path[i].position) else {
                continue;
            };
            // The entrance never triggers a fresh announcement
            if spot == Spot::Entrance {
                continue;
            }
            if current.as_deref() == Some(spot.id()) {
                continue;
            }

            let instruction = match spot {
                Spot::Checkout => format!(
                    "Proceed to the {} located in the {} area",
                    spot.name(),
                    self.position_label(self.layout.checkout)
                ),
                Spot::Aisle(_, name, center) => format!(
                    "Walk towards the {} section, located in the {} area of the store",
                    name,
                    self.position_label(center)
                ),
                Spot::Entrance => unreachable!(),
            };
            out[i].instruction = Some(instruction);
            announced.insert(spot.id().to_string());
            current = Some(spot.id().to_string());
        }

        if last > 0 {
            out[last].instruction = Some(format!(
                "Finally, head to the Checkout Counter near the {} corner",
                self.position_label(self.layout.checkout)
            ));
        }

        self.maybe_add_midpoint(&mut out, &announced);
        out
    }

    /// Long walks with almost no narration get one extra "continue past"
    /// instruction at the midpoint, if the midpoint lies in a zone that was
    /// never announced.
    fn maybe_add_midpoint(&self, out: &mut [PathStep], announced: &HashSet<String>) {
        let spoken = out.iter().filter(|s| s.instruction.is_some()).count();
        if spoken >= self.config.min_instructions || out.len() <= self.config.long_route_len {
            return;
        }

        let mid = out.len() / 2;
        let Some(spot) = self.spot_at(out[mid].position) else {
            return;
        };
        if announced.contains(spot.id()) {
            return;
        }
        if out[mid].instruction.is_none() {
            out[mid].instruction = Some(format!("Continue past the {} area", spot.name()));
        }
    }

    /// Detect the zone a position belongs to, entrance/checkout first,
    /// then zones in declaration order.
    fn spot_at(&self, position: GridCoord) -> Option<Spot<'_>> {
        if position.chebyshev_distance(&self.layout.entrance) <= self.config.landmark_radius {
            return Some(Spot::Entrance);
        }
        if position.chebyshev_distance(&self.layout.checkout) <= self.config.landmark_radius {
            return Some(Spot::Checkout);
        }
        self.layout
            .zones
            .iter()
            .find(|z| z.contains_with_margin(position, self.config.zone_margin))
            .map(|z| Spot::Aisle(&z.id, &z.name, z.center()))
    }

    /// Coarse 3x3 position label ("front-left" .. "back-right") for a cell.
    fn position_label(&self, coord: GridCoord) -> String {
        let vertical = if coord.y <= self.config.front_max_row {
            "front"
        } else if coord.y >= self.config.back_min_row {
            "back"
        } else {
            "middle"
        };
        let horizontal = if coord.x <= self.config.left_max_col {
            "left"
        } else if coord.x >= self.config.right_min_col {
            "right"
        } else {
            "center"
        };
        format!("{}-{}", vertical, horizontal)
    }
}

/// Annotate a path with default configuration
pub fn annotate(layout: &StoreLayout, path: &[PathStep]) -> Vec<PathStep> {
    Narrator::with_defaults(layout).annotate(path)
}
