//! # Adventure Rules
//!
//! State for a single text-adventure character: what it carries, where it is,
//! how big it is, and how to take back the last thing it did.
//!
//! Actions report through a [`Narrator`] instead of printing, so the same
//! character can talk to a terminal, a JSON stream or a test recorder.

pub mod config;
pub mod entities;
pub mod error;
pub mod mechanics;
pub mod narration;

pub use config::*;
pub use entities::*;
pub use error::*;
pub use mechanics::*;
pub use narration::*;
