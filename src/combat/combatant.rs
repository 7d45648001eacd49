//! Combatant stat records.
//!
//! Both sides of the duel share one stat record. The wizard uses
//! `mana` and `armor` (rebuilt each tick from active shield effects);
//! the boss uses `damage`. All state values are `i64`.

use serde::{Deserialize, Serialize};

/// Stats for one side of the duel.
///
/// Hit points may transiently go non-positive before the engine's
/// termination check runs; `is_defeated` is that check.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Combatant {
    /// Remaining hit points.
    pub hit_points: i64,

    /// Base attack damage (boss only).
    pub damage: i64,

    /// Current armor, recomputed from scratch every tick (wizard only).
    pub armor: i64,

    /// Mana pool (wizard only). Never negative: affordability is a
    /// precondition of every cast.
    pub mana: i64,
}

impl Combatant {
    /// Create a wizard with the given hit points and mana.
    #[must_use]
    pub const fn wizard(hit_points: i64, mana: i64) -> Self {
        Self {
            hit_points,
            damage: 0,
            armor: 0,
            mana,
        }
    }

    /// Create a boss with the given hit points and attack damage.
    #[must_use]
    pub const fn boss(hit_points: i64, damage: i64) -> Self {
        Self {
            hit_points,
            damage,
            armor: 0,
            mana: 0,
        }
    }

    /// Check if this combatant is at or below zero hit points.
    #[must_use]
    pub const fn is_defeated(&self) -> bool {
        self.hit_points <= 0
    }
}
