//! Entity definitions for the adventure: the character and what it owns.

mod character;
mod inventory;

pub use character::*;
pub use inventory::*;

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::mechanics::Direction;

/// Name of the place every character starts in.
pub const DEFAULT_LOCATION: &str = "Home";

/// Unique identifier for a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityId(pub Uuid);

impl EntityId {
    /// Create a new random entity ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

}

impl Default for EntityId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Where the character currently is.
///
/// After a walk the location is the direction walked, not a resulting
/// position.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Location {
    Named(String),
    Heading(Direction),
    Coordinates { x: i32, y: i32 },
}

impl Location {
    pub fn named(name: impl Into<String>) -> Self {
        Location::Named(name.into())
    }
}

impl Default for Location {
    fn default() -> Self {
        Location::named(DEFAULT_LOCATION)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Named(name) => f.write_str(name),
            Location::Heading(direction) => write!(f, "{direction}"),
            Location::Coordinates { x, y } => write!(f, "({x}, {y})"),
        }
    }
}

/// The character's size multiplier. Always strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Scale(f64);

impl Scale {
    /// Returns `None` unless `value` is finite and greater than zero.
    pub fn new(value: f64) -> Option<Self> {
        (value.is_finite() && value > 0.0).then_some(Self(value))
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Multiply by `factor`, saturating within the positive finite range.
    pub fn multiplied(self, factor: f64) -> Self {
        Self::saturating(self.0 * factor)
    }

    /// Divide by `factor`, saturating within the positive finite range.
    pub fn divided(self, factor: f64) -> Self {
        Self::saturating(self.0 / factor)
    }

    // Smallest positive subnormal up to the largest finite value.
    fn saturating(value: f64) -> Self {
        Self(value.clamp(f64::from_bits(1), f64::MAX))
    }
}

impl Default for Scale {
    fn default() -> Self {
        Self(1.0)
    }
}

impl fmt::Display for Scale {
    // Debug formatting keeps the fractional digit on whole numbers ("1.0").
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_display() {
        assert_eq!(Location::default().to_string(), "Home");
        assert_eq!(Location::Heading(Direction::South).to_string(), "south");
        assert_eq!(Location::Coordinates { x: -10, y: 1 }.to_string(), "(-10, 1)");
    }

    #[test]
    fn test_scale_display_and_arithmetic() {
        let scale = Scale::default();
        assert_eq!(scale.to_string(), "1.0");
        assert_eq!(scale.multiplied(0.5).to_string(), "0.5");
        assert_eq!(scale.multiplied(2.0).divided(2.0), scale);
    }

    #[test]
    fn test_scale_stays_positive() {
        assert!(Scale::new(0.0).is_none());
        assert!(Scale::new(-1.0).is_none());
        assert!(Scale::new(f64::NAN).is_none());

        let mut scale = Scale::default();
        for _ in 0..2000 {
            scale = scale.multiplied(0.5);
        }
        assert!(scale.value() > 0.0);
        assert_eq!(scale.value(), f64::from_bits(1));
    }

    #[test]
    fn test_scale_stays_finite() {
        let mut scale = Scale::default();
        for _ in 0..1100 {
            scale = scale.multiplied(2.0);
        }
        assert_eq!(scale.value(), f64::MAX);
        assert!(Scale::new(scale.value()).is_some());

        let undone = scale.divided(2.0);
        assert!(undone.value().is_finite());
        assert_eq!(undone.value(), f64::MAX / 2.0);
    }

    #[test]
    fn test_subnormal_shrink_undoes_exactly() {
        let tiny = Scale::new(f64::MIN_POSITIVE).unwrap();
        let shrunk = tiny.multiplied(0.5);
        assert!(shrunk.value() < f64::MIN_POSITIVE);
        assert_eq!(shrunk.divided(0.5), tiny);
    }

    #[test]
    fn test_entity_ids_are_unique() {
        assert_ne!(EntityId::new(), EntityId::new());
    }
}
