//! The character: inventory, location, scale and a one-slot undo record.

use super::{EntityId, Inventory, Location, Scale};
use crate::config::CharacterConfig;
use crate::error::{ActionError, ActionResult, ConfigError};
use crate::mechanics::{
    describe_item, within_flight_range, Direction, LastAction, GROW_FACTOR, SHRINK_FACTOR,
};
use crate::narration::{ConsoleNarrator, Narration, Narrator, UndoNarration};

/// A single adventuring character.
///
/// Every action validates its input before touching any state, emits exactly
/// one [`Narration`] and, on success, becomes the action `undo` will reverse.
/// Only the most recent action is remembered, and `undo` does not clear it:
/// calling `undo` twice applies the same inverse twice.
#[derive(Debug, Clone)]
pub struct CharacterState<N = ConsoleNarrator> {
    id: EntityId,
    inventory: Inventory,
    location: Location,
    scale: Scale,
    last_action: Option<LastAction>,
    narrator: N,
}

impl Default for CharacterState<ConsoleNarrator> {
    fn default() -> Self {
        Self::new(ConsoleNarrator)
    }
}

impl<N: Narrator> CharacterState<N> {
    /// Create a character at home, at scale 1.0, with nothing in hand.
    pub fn new(narrator: N) -> Self {
        Self {
            id: EntityId::new(),
            inventory: Inventory::new(),
            location: Location::default(),
            scale: Scale::default(),
            last_action: None,
            narrator,
        }
    }

    /// Create a character from a validated starting configuration.
    pub fn with_config(config: &CharacterConfig, narrator: N) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut character = Self::new(narrator);
        character.location = Location::named(config.starting_location.clone());
        character.scale = config.scale()?;
        Ok(character)
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    /// Held items, in the order they were picked up.
    pub fn inventory(&self) -> &[String] {
        self.inventory.items()
    }

    pub fn has_item(&self, item: &str) -> bool {
        self.inventory.contains(item)
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn scale(&self) -> f64 {
        self.scale.value()
    }

    pub fn last_action(&self) -> Option<&LastAction> {
        self.last_action.as_ref()
    }

    pub fn narrator(&self) -> &N {
        &self.narrator
    }

    /// Pick up an item.
    pub fn grab(&mut self, item: &str) -> ActionResult<()> {
        if self.inventory.contains(item) {
            return self.refuse(ActionError::DuplicateItem(item.to_string()));
        }

        self.inventory.insert(item);
        tracing::debug!(character = %self.id, item, "grabbed item");
        self.complete(
            LastAction::Grab {
                item: item.to_string(),
            },
            Narration::Grabbed {
                item: item.to_string(),
            },
        );
        Ok(())
    }

    /// Put down a held item, returning its name.
    pub fn drop(&mut self, item: &str) -> ActionResult<String> {
        if !self.inventory.remove(item) {
            return self.refuse(ActionError::ItemNotFound(item.to_string()));
        }

        tracing::debug!(character = %self.id, item, "dropped item");
        self.complete(
            LastAction::Drop {
                item: item.to_string(),
            },
            Narration::Dropped {
                item: item.to_string(),
            },
        );
        Ok(item.to_string())
    }

    /// Describe a held item. Cannot be undone.
    pub fn examine(&mut self, item: &str) -> ActionResult<()> {
        if !self.inventory.contains(item) {
            return self.refuse(ActionError::ItemNotFound(item.to_string()));
        }

        let description = describe_item(item);
        tracing::debug!(character = %self.id, item, "examined item");
        self.complete(
            LastAction::Examine,
            Narration::Examined {
                item: item.to_string(),
                description,
            },
        );
        Ok(())
    }

    /// Consume a held item.
    pub fn use_item(&mut self, item: &str) -> ActionResult<()> {
        if !self.inventory.remove(item) {
            return self.refuse(ActionError::ItemNotFound(item.to_string()));
        }

        tracing::debug!(character = %self.id, item, "used item");
        self.complete(
            LastAction::Use {
                item: item.to_string(),
            },
            Narration::Used {
                item: item.to_string(),
            },
        );
        Ok(())
    }

    /// Walk north, east, south or west. The new location is the direction
    /// itself.
    pub fn walk(&mut self, direction: &str) -> ActionResult<bool> {
        let direction = match direction.parse::<Direction>() {
            Ok(direction) => direction,
            Err(e) => return self.refuse(e),
        };

        let from = std::mem::replace(&mut self.location, Location::Heading(direction));
        tracing::debug!(character = %self.id, %from, %direction, "walked");
        self.complete(LastAction::Walk { from }, Narration::Walked { direction });
        Ok(true)
    }

    /// Fly to `(x, y)`, where `-100 < x <= 100` and `-100 <= y <= 100`.
    pub fn fly(&mut self, x: i32, y: i32) -> ActionResult<bool> {
        if !within_flight_range(x, y) {
            return self.refuse(ActionError::OutOfRange { x, y });
        }

        let to = Location::Coordinates { x, y };
        let from = std::mem::replace(&mut self.location, to.clone());
        tracing::debug!(character = %self.id, %from, %to, "flew");
        self.complete(LastAction::Fly { from }, Narration::Flew { location: to });
        Ok(true)
    }

    /// Halve the scale, returning the new value.
    pub fn shrink(&mut self) -> f64 {
        self.scale = self.scale.multiplied(SHRINK_FACTOR);
        tracing::debug!(character = %self.id, scale = self.scale.value(), "shrank");
        self.complete(LastAction::Shrink, Narration::Shrank { scale: self.scale });
        self.scale.value()
    }

    /// Double the scale, returning the new value.
    pub fn grow(&mut self) -> f64 {
        self.scale = self.scale.multiplied(GROW_FACTOR);
        tracing::debug!(character = %self.id, scale = self.scale.value(), "grew");
        self.complete(LastAction::Grow, Narration::Grew { scale: self.scale });
        self.scale.value()
    }

    /// Do nothing for a while. Cannot be undone.
    pub fn rest(&mut self) {
        tracing::debug!(character = %self.id, "rested");
        self.complete(LastAction::Rest, Narration::Rested);
    }

    /// Reverse the most recent action.
    ///
    /// The undo record is left in place, so a second call reapplies the same
    /// inverse. Inventory changes stay idempotent: re-adding a held item or
    /// removing a missing one does nothing.
    pub fn undo(&mut self) {
        let outcome = match &self.last_action {
            None => UndoNarration::NothingToUndo,
            Some(action @ LastAction::Grab { item }) => {
                self.inventory.remove(item);
                UndoNarration::Inventory {
                    action: action.kind(),
                    item: item.clone(),
                }
            }
            Some(action @ (LastAction::Drop { item } | LastAction::Use { item })) => {
                self.inventory.insert(item.as_str());
                UndoNarration::Inventory {
                    action: action.kind(),
                    item: item.clone(),
                }
            }
            Some(action @ (LastAction::Walk { from } | LastAction::Fly { from })) => {
                self.location = from.clone();
                UndoNarration::Location {
                    action: action.kind(),
                    location: self.location.clone(),
                }
            }
            Some(LastAction::Shrink) => {
                self.scale = self.scale.divided(SHRINK_FACTOR);
                UndoNarration::Shrink { scale: self.scale }
            }
            Some(LastAction::Grow) => {
                self.scale = self.scale.divided(GROW_FACTOR);
                UndoNarration::Grow { scale: self.scale }
            }
            Some(action @ (LastAction::Examine | LastAction::Rest)) => {
                UndoNarration::NotUndoable {
                    action: action.kind(),
                }
            }
        };

        tracing::debug!(character = %self.id, outcome = %outcome, "undo");
        self.narrator.narrate(Narration::Undone { outcome });
    }

    fn complete(&mut self, action: LastAction, narration: Narration) {
        self.last_action = Some(action);
        self.narrator.narrate(narration);
    }

    fn refuse<T>(&mut self, error: ActionError) -> ActionResult<T> {
        tracing::debug!(character = %self.id, error = %error, "action refused");
        self.narrator.narrate(Narration::Refused {
            message: error.to_string(),
        });
        Err(error)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::narration::RecordingNarrator;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_grab_twice_keeps_single_copy(item in "[a-z]{1,12}") {
            let mut character = CharacterState::new(RecordingNarrator::new());
            character.grab(&item).unwrap();
            prop_assert_eq!(character.grab(&item), Err(ActionError::DuplicateItem(item.clone())));
            prop_assert_eq!(character.inventory().iter().filter(|held| **held == item).count(), 1);
        }

        #[test]
        fn prop_unheld_item_not_found(item in "[a-z]{1,12}") {
            let mut character = CharacterState::new(RecordingNarrator::new());
            let missing = ActionError::ItemNotFound(item.clone());
            prop_assert_eq!(character.drop(&item), Err(missing.clone()));
            prop_assert_eq!(character.use_item(&item), Err(missing.clone()));
            prop_assert_eq!(character.examine(&item), Err(missing));
            prop_assert!(character.last_action().is_none());
        }

        #[test]
        fn prop_fly_matches_bounds(x in -200i32..200, y in -200i32..200) {
            let mut character = CharacterState::new(RecordingNarrator::new());
            let valid = x > -100 && x <= 100 && (-100..=100).contains(&y);
            prop_assert_eq!(character.fly(x, y).is_ok(), valid);
        }

        #[test]
        fn prop_undo_restores_scale(grows in 0usize..20, shrink_last in any::<bool>()) {
            let mut character = CharacterState::new(RecordingNarrator::new());
            for _ in 0..grows {
                character.grow();
            }
            let before = character.scale();
            if shrink_last {
                character.shrink();
            } else {
                character.grow();
            }
            character.undo();
            prop_assert_eq!(character.scale(), before);
        }
    }
}
