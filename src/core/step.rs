//! Route step and movement direction types.

use serde::{Deserialize, Serialize};

use super::point::GridCoord;

/// Movement direction between two orthogonally adjacent cells.
///
/// `Up` is towards the front of the store (decreasing y), matching the
/// screen-space convention of store map renderers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Direction of the unit step from `from` to `to`.
    ///
    /// Returns `None` if the two cells are not orthogonally adjacent.
    pub fn between(from: GridCoord, to: GridCoord) -> Option<Direction> {
        match (to.x - from.x, to.y - from.y) {
            (0, -1) => Some(Direction::Up),
            (0, 1) => Some(Direction::Down),
            (-1, 0) => Some(Direction::Left),
            (1, 0) => Some(Direction::Right),
            _ => None,
        }
    }
}

/// One element of a computed route.
///
/// The first step of a path carries no direction; every subsequent step's
/// direction describes the move from its predecessor. Instructions are
/// attached by the narration pass and are `None` on raw pathfinder output.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathStep {
    /// Cell this step occupies
    pub position: GridCoord,
    /// Movement that produced this step, if any
    pub direction: Option<Direction>,
    /// Human/voice-readable guidance for this step, if any
    pub instruction: Option<String>,
}

impl PathStep {
    /// Create a bare step at a position (no direction, no instruction)
    #[inline]
    pub fn at(position: GridCoord) -> Self {
        Self {
            position,
            direction: None,
            instruction: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_between_adjacent() {
        let c = GridCoord::new(5, 5);
        assert_eq!(
            Direction::between(c, GridCoord::new(5, 4)),
            Some(Direction::Up)
        );
        assert_eq!(
            Direction::between(c, GridCoord::new(5, 6)),
            Some(Direction::Down)
        );
        assert_eq!(
            Direction::between(c, GridCoord::new(4, 5)),
            Some(Direction::Left)
        );
        assert_eq!(
            Direction::between(c, GridCoord::new(6, 5)),
            Some(Direction::Right)
        );
    }

    #[test]
    fn test_direction_between_non_adjacent() {
        let c = GridCoord::new(5, 5);
        assert_eq!(Direction::between(c, c), None);
        assert_eq!(Direction::between(c, GridCoord::new(6, 6)), None);
        assert_eq!(Direction::between(c, GridCoord::new(5, 7)), None);
    }

    #[test]
    fn test_direction_serde_lowercase() {
        let json = serde_yaml::to_string(&Direction::Up).unwrap();
        assert_eq!(json.trim(), "up");
    }
}
