//! Spell system: definitions and the spell book.
//!
//! ## Key Types
//!
//! - `SpellId`: Identifier for spell definitions
//! - `SpellDefinition`: Static spell data (cost, magnitudes, duration)
//! - `SpellBook`: Definition lookup with deterministic iteration order
//! - `StandardSpells`: Well-known IDs for the classic five-spell catalog

pub mod book;
pub mod definition;

pub use book::{SpellBook, StandardSpells};
pub use definition::{SpellDefinition, SpellId};
