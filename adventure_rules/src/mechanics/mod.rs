//! Game mechanics: directions, action kinds, the undo record, scale factors and
//! the fixed item descriptions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::entities::Location;
use crate::error::ActionError;

/// Scale multiplier applied by `shrink`.
pub const SHRINK_FACTOR: f64 = 0.5;

/// Scale multiplier applied by `grow`.
pub const GROW_FACTOR: f64 = 2.0;

/// Bound on both flight coordinates.
pub const FLIGHT_LIMIT: i32 = 100;

/// Check whether `(x, y)` is a valid flight target.
///
/// The x lower bound is exclusive, every other bound is inclusive:
/// `-100 < x <= 100` and `-100 <= y <= 100`.
pub fn within_flight_range(x: i32, y: i32) -> bool {
    x > -FLIGHT_LIMIT && x <= FLIGHT_LIMIT && (-FLIGHT_LIMIT..=FLIGHT_LIMIT).contains(&y)
}

/// Flavor text for items that have one. Read-only for the lifetime of the process.
pub const ITEM_DESCRIPTIONS: [(&str, &str); 5] = [
    ("water", "The water is dirty! Don't drink!"),
    ("table", "The table is cracked in the middle."),
    ("window", "The glass of the window is broken."),
    ("chair", "One leg of the chair is about to break!"),
    ("vegetables", "Hmmm...those vegetables do not look fresh."),
];

/// Look up the preset description of an item.
pub fn item_description(item: &str) -> Option<&'static str> {
    ITEM_DESCRIPTIONS
        .iter()
        .find(|(name, _)| *name == item)
        .map(|(_, description)| *description)
}

/// Description of an item, falling back to a generic line for unknown items.
pub fn describe_item(item: &str) -> String {
    item_description(item)
        .map(str::to_string)
        .unwrap_or_else(|| format!("Nothing special about {item}"))
}

/// The four directions a character can walk in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::East => "east",
            Direction::South => "south",
            Direction::West => "west",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = ActionError;

    /// Exact, case-sensitive match on the lowercase direction word.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "north" => Ok(Direction::North),
            "east" => Ok(Direction::East),
            "south" => Ok(Direction::South),
            "west" => Ok(Direction::West),
            other => Err(ActionError::InvalidDirection(other.to_string())),
        }
    }
}

/// Every action a character can perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    Grab,
    Drop,
    Examine,
    Use,
    Walk,
    Fly,
    Shrink,
    Grow,
    Rest,
}

impl ActionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionKind::Grab => "grab",
            ActionKind::Drop => "drop",
            ActionKind::Examine => "examine",
            ActionKind::Use => "use",
            ActionKind::Walk => "walk",
            ActionKind::Fly => "fly",
            ActionKind::Shrink => "shrink",
            ActionKind::Grow => "grow",
            ActionKind::Rest => "rest",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The single-slot undo record: the most recent action plus whatever is
/// needed to invert it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum LastAction {
    Grab { item: String },
    Drop { item: String },
    Examine,
    Use { item: String },
    /// `from` is the location held before the walk.
    Walk { from: Location },
    /// `from` is the location held before the flight.
    Fly { from: Location },
    Shrink,
    Grow,
    Rest,
}

impl LastAction {
    pub fn kind(&self) -> ActionKind {
        match self {
            LastAction::Grab { .. } => ActionKind::Grab,
            LastAction::Drop { .. } => ActionKind::Drop,
            LastAction::Examine => ActionKind::Examine,
            LastAction::Use { .. } => ActionKind::Use,
            LastAction::Walk { .. } => ActionKind::Walk,
            LastAction::Fly { .. } => ActionKind::Fly,
            LastAction::Shrink => ActionKind::Shrink,
            LastAction::Grow => ActionKind::Grow,
            LastAction::Rest => ActionKind::Rest,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flight_range_boundaries() {
        assert!(within_flight_range(0, 0));
        assert!(within_flight_range(100, 0));
        assert!(!within_flight_range(101, 0));
        assert!(!within_flight_range(-100, 0));
        assert!(within_flight_range(-99, 0));
        assert!(within_flight_range(0, 100));
        assert!(within_flight_range(0, -100));
        assert!(!within_flight_range(0, -101));
        assert!(!within_flight_range(0, 101));
    }

    #[test]
    fn test_direction_parsing() {
        assert_eq!("south".parse::<Direction>(), Ok(Direction::South));
        assert_eq!("west".parse::<Direction>(), Ok(Direction::West));
        assert_eq!(
            "up".parse::<Direction>(),
            Err(ActionError::InvalidDirection("up".into()))
        );
        assert!("South".parse::<Direction>().is_err());
    }

    #[test]
    fn test_item_descriptions() {
        assert_eq!(
            item_description("water"),
            Some("The water is dirty! Don't drink!")
        );
        assert_eq!(item_description("pen"), None);
        assert_eq!(describe_item("pen"), "Nothing special about pen");
        assert_eq!(describe_item("chair"), "One leg of the chair is about to break!");
    }

    #[test]
    fn test_last_action_kind() {
        let walk = LastAction::Walk {
            from: Location::default(),
        };
        assert_eq!(walk.kind(), ActionKind::Walk);
        assert_eq!(LastAction::Rest.kind(), ActionKind::Rest);
        assert_eq!(ActionKind::Use.to_string(), "use");
    }
}
