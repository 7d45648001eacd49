//! Combat state: the value threaded through every transition.
//!
//! ## CombatState
//!
//! One snapshot of the duel:
//! - Wizard and boss stats
//! - Active timed effects (at most one instance per spell)
//! - Cast history for cost accounting
//!
//! Every engine transition consumes a state and produces a new one.
//! Each search branch owns its own copy; branches never share mutable
//! memory. The cast history uses `im::Vector` so that per-branch
//! clones are O(1).

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::spells::{SpellBook, SpellId};

use super::combatant::Combatant;
use super::effects::ActiveEffect;

/// Inline capacity for active effects. The standard catalog has three
/// timed spells, so spills to the heap are rare.
pub(crate) const EFFECT_CAPACITY: usize = 4;

/// Full state of a duel between two snapshots.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatState {
    /// The caster.
    pub wizard: Combatant,

    /// The adversary.
    pub boss: Combatant,

    /// Currently active timed effects, in registration order.
    pub active_effects: SmallVec<[ActiveEffect; EFFECT_CAPACITY]>,

    /// Every spell cast so far, in order. O(1) clone per search branch.
    pub cast_history: Vector<SpellId>,
}

impl CombatState {
    /// Create the initial state of a duel.
    #[must_use]
    pub fn new(wizard: Combatant, boss: Combatant) -> Self {
        Self {
            wizard,
            boss,
            active_effects: SmallVec::new(),
            cast_history: Vector::new(),
        }
    }

    /// Get the active effect for a spell, if any.
    #[must_use]
    pub fn effect(&self, spell: SpellId) -> Option<&ActiveEffect> {
        self.active_effects.iter().find(|e| e.spell == spell)
    }

    /// Check whether a spell's timed effect is currently active.
    #[must_use]
    pub fn is_effect_active(&self, spell: SpellId) -> bool {
        self.effect(spell).is_some()
    }

    /// Append a cast to the history.
    pub fn record_cast(&mut self, spell: SpellId) {
        self.cast_history.push_back(spell);
    }

    /// Number of spells cast so far.
    #[must_use]
    pub fn cast_count(&self) -> usize {
        self.cast_history.len()
    }

    /// Total mana spent over the cast history.
    ///
    /// Panics on an unrecognized spell ID (a programming error).
    #[must_use]
    pub fn mana_spent(&self, book: &SpellBook) -> i64 {
        self.cast_history
            .iter()
            .map(|&id| book.get_unchecked(id).cost)
            .sum()
    }
}
