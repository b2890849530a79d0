//! Narration: the human-readable account of what a character just did.
//!
//! Actions never print. Each one hands exactly one [`Narration`] to the
//! character's [`Narrator`], which decides how to render it:
//!
//! - [`ConsoleNarrator`] prints one line per event to stdout
//! - [`RecordingNarrator`] keeps events in memory, for tests and replays
//! - [`JsonNarrator`] writes one JSON object per event per line

use serde::Serialize;
use std::fmt;
use std::io::Write;

use crate::entities::{Location, Scale};
use crate::mechanics::{ActionKind, Direction};

/// One event in the story of a character.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Narration {
    Grabbed { item: String },
    Dropped { item: String },
    Examined { item: String, description: String },
    Used { item: String },
    Walked { direction: Direction },
    Flew { location: Location },
    Shrank { scale: Scale },
    Grew { scale: Scale },
    Rested,
    Undone { outcome: UndoNarration },
    /// An action failed validation; `message` is the error's text.
    Refused { message: String },
}

/// What a call to `undo` did.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum UndoNarration {
    /// A grab, drop or use was reversed.
    Inventory { action: ActionKind, item: String },
    /// A walk or fly was reversed; `location` is where the character is now.
    Location { action: ActionKind, location: Location },
    Shrink { scale: Scale },
    Grow { scale: Scale },
    NotUndoable { action: ActionKind },
    NothingToUndo,
}

impl fmt::Display for Narration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Narration::Grabbed { item } => write!(f, "{item} added!"),
            Narration::Dropped { item } => write!(f, "{item} dropped!"),
            Narration::Examined { description, .. } => f.write_str(description),
            Narration::Used { item } => write!(f, "{item} used!"),
            Narration::Walked { direction } => write!(f, "You walk {direction}"),
            Narration::Flew { location } => write!(f, "You fly to {location}"),
            Narration::Shrank { scale } => {
                write!(f, "You shrank 50%! Current size is {scale}")
            }
            Narration::Grew { scale } => {
                write!(f, "Your size is doubled! Current size is {scale}")
            }
            Narration::Rested => f.write_str("You are resting."),
            Narration::Undone { outcome } => write!(f, "{outcome}"),
            Narration::Refused { message } => f.write_str(message),
        }
    }
}

impl fmt::Display for UndoNarration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UndoNarration::Inventory { action, .. } => {
                write!(f, "You undo the {action} action.")
            }
            UndoNarration::Location { action, location } => write!(
                f,
                "You undo the {action} action. Your current location is {location}"
            ),
            UndoNarration::Shrink { scale } => write!(f, "You undo shrinking. New size: {scale}"),
            UndoNarration::Grow { scale } => write!(f, "You undo growing. New size: {scale}"),
            UndoNarration::NotUndoable { action } => {
                write!(f, "You cannot undo the {action} action.")
            }
            UndoNarration::NothingToUndo => f.write_str("No action to undo."),
        }
    }
}

/// Sink for narration events.
pub trait Narrator {
    fn narrate(&mut self, narration: Narration);
}

impl<N: Narrator + ?Sized> Narrator for &mut N {
    fn narrate(&mut self, narration: Narration) {
        (**self).narrate(narration);
    }
}

impl<N: Narrator + ?Sized> Narrator for Box<N> {
    fn narrate(&mut self, narration: Narration) {
        (**self).narrate(narration);
    }
}

/// Prints every event as a line on stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleNarrator;

impl Narrator for ConsoleNarrator {
    fn narrate(&mut self, narration: Narration) {
        println!("{narration}");
    }
}

/// Keeps every event in memory.
#[derive(Debug, Clone, Default)]
pub struct RecordingNarrator {
    events: Vec<Narration>,
}

impl RecordingNarrator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[Narration] {
        &self.events
    }

    /// All events rendered as text lines.
    pub fn lines(&self) -> Vec<String> {
        self.events.iter().map(ToString::to_string).collect()
    }

    pub fn last(&self) -> Option<&Narration> {
        self.events.last()
    }

    pub fn last_line(&self) -> Option<String> {
        self.last().map(ToString::to_string)
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl Narrator for RecordingNarrator {
    fn narrate(&mut self, narration: Narration) {
        self.events.push(narration);
    }
}

/// Writes each event as a single line of JSON.
///
/// Write failures are logged and dropped; they never fail the action that
/// produced the event.
#[derive(Debug)]
pub struct JsonNarrator<W: Write> {
    writer: W,
}

impl<W: Write> JsonNarrator<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Narrator for JsonNarrator<W> {
    fn narrate(&mut self, narration: Narration) {
        let written = serde_json::to_writer(&mut self.writer, &narration)
            .map_err(std::io::Error::from)
            .and_then(|_| writeln!(self.writer));

        if let Err(e) = written {
            tracing::warn!(error = %e, "failed to write narration");
        }
    }
}
