//! Spell book for definition lookup.
//!
//! The `SpellBook` stores all spell definitions for a duel.
//! It provides fast lookup by `SpellId` and iterates in registration
//! order, so candidate enumeration is deterministic.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::definition::{SpellDefinition, SpellId};

/// Registry of spell definitions.
///
/// Stores every castable spell and provides lookup. Iteration order
/// is registration order, which fixes the order the search explores
/// candidates in.
///
/// ## Example
///
/// ```
/// use wizard_duel::spells::{SpellBook, SpellDefinition, SpellId};
///
/// let mut book = SpellBook::new();
///
/// let missile = SpellDefinition::new(SpellId::new(0), "Magic Missile", 53)
///     .with_damage(4);
///
/// book.register(missile);
///
/// let found = book.get(SpellId::new(0)).unwrap();
/// assert_eq!(found.name, "Magic Missile");
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SpellBook {
    spells: FxHashMap<SpellId, SpellDefinition>,
    order: Vec<SpellId>,
}

/// Well-known IDs for the standard five-spell catalog.
///
/// Returned by `SpellBook::standard()` so callers can name spells
/// without remembering raw IDs.
#[derive(Clone, Copy, Debug)]
pub struct StandardSpells {
    pub magic_missile: SpellId,
    pub drain: SpellId,
    pub shield: SpellId,
    pub poison: SpellId,
    pub recharge: SpellId,
}

impl SpellBook {
    /// Create a new empty spell book.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the standard catalog:
    ///
    /// - Magic Missile: 53 mana, 4 instant damage
    /// - Drain: 73 mana, 2 instant damage, 2 instant heal
    /// - Shield: 113 mana, +7 armor for 6 ticks
    /// - Poison: 173 mana, 3 damage per tick for 6 ticks
    /// - Recharge: 229 mana, +101 mana per tick for 5 ticks
    #[must_use]
    pub fn standard() -> (Self, StandardSpells) {
        let ids = StandardSpells {
            magic_missile: SpellId::new(0),
            drain: SpellId::new(1),
            shield: SpellId::new(2),
            poison: SpellId::new(3),
            recharge: SpellId::new(4),
        };

        let mut book = Self::new();
        book.register(
            SpellDefinition::new(ids.magic_missile, "Magic Missile", 53).with_damage(4),
        );
        book.register(
            SpellDefinition::new(ids.drain, "Drain", 73)
                .with_damage(2)
                .with_heal(2),
        );
        book.register(
            SpellDefinition::new(ids.shield, "Shield", 113)
                .with_armor(7)
                .with_duration(6),
        );
        book.register(
            SpellDefinition::new(ids.poison, "Poison", 173)
                .with_damage(3)
                .with_duration(6),
        );
        book.register(
            SpellDefinition::new(ids.recharge, "Recharge", 229)
                .with_mana_gain(101)
                .with_duration(5),
        );

        (book, ids)
    }

    /// Register a spell definition.
    ///
    /// Panics if a spell with the same ID already exists.
    pub fn register(&mut self, spell: SpellDefinition) {
        if self.spells.contains_key(&spell.id) {
            panic!("Spell with ID {:?} already registered", spell.id);
        }
        self.order.push(spell.id);
        self.spells.insert(spell.id, spell);
    }

    /// Get a spell definition by ID.
    #[must_use]
    pub fn get(&self, id: SpellId) -> Option<&SpellDefinition> {
        self.spells.get(&id)
    }

    /// Get a spell definition by ID, panicking if not found.
    ///
    /// An unknown spell ID is a programming error, not a recoverable
    /// game outcome.
    #[must_use]
    pub fn get_unchecked(&self, id: SpellId) -> &SpellDefinition {
        self.spells.get(&id).expect("Spell not found in book")
    }

    /// Check if a spell ID is registered.
    #[must_use]
    pub fn contains(&self, id: SpellId) -> bool {
        self.spells.contains_key(&id)
    }

    /// Get the number of registered spells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Check if the book is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterate over definitions in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &SpellDefinition> {
        self.order.iter().map(|id| &self.spells[id])
    }

    /// Iterate over spell IDs in registration order.
    pub fn spell_ids(&self) -> impl Iterator<Item = SpellId> + '_ {
        self.order.iter().copied()
    }
}
