//! Spell definitions - static spell data.
//!
//! `SpellDefinition` holds the immutable properties of a spell.
//! For example, Poison costs 173 mana and deals 3 damage per tick
//! for 6 ticks - these are part of the definition.
//!
//! Runtime bookkeeping (how many ticks remain on an active effect)
//! is stored separately in `ActiveEffect`.

use serde::{Deserialize, Serialize};

/// Unique identifier for a spell definition.
///
/// This identifies the spell itself (e.g., "Magic Missile"),
/// not a particular active effect instance in a duel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpellId(pub u32);

impl SpellId {
    /// Create a new spell ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for SpellId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Spell({})", self.0)
    }
}

/// Static spell definition.
///
/// All magnitudes are `i64` for consistency with combatant state values.
///
/// ## Instant vs. timed
///
/// A spell with `duration == 0` resolves immediately when cast:
/// `damage` hits the boss and `heal` restores the wizard on the spot.
///
/// A spell with `duration > 0` registers a timed effect instead. While
/// the effect is active, every tick applies `damage` to the boss, adds
/// `mana_gain` to the wizard, and contributes `armor` to the wizard's
/// rebuilt armor total. `heal` is instant-only and has no per-tick
/// meaning.
///
/// ## Example
///
/// ```
/// use wizard_duel::spells::{SpellDefinition, SpellId};
///
/// let poison = SpellDefinition::new(SpellId::new(3), "Poison", 173)
///     .with_damage(3)
///     .with_duration(6);
///
/// assert!(poison.is_timed());
/// assert_eq!(poison.cost, 173);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpellDefinition {
    /// Unique identifier for this spell.
    pub id: SpellId,

    /// Spell name (for display/debugging).
    pub name: String,

    /// Mana cost, deducted immediately when cast.
    pub cost: i64,

    /// Damage to the boss: instant when `duration == 0`, per tick otherwise.
    pub damage: i64,

    /// Hit points restored to the wizard. Instant spells only.
    pub heal: i64,

    /// Armor contributed to the wizard each tick while active.
    pub armor: i64,

    /// Mana granted to the wizard each tick while active.
    pub mana_gain: i64,

    /// Number of ticks the effect lasts. Zero means instant.
    pub duration: u32,
}

impl SpellDefinition {
    /// Create a new spell definition with no effects beyond its cost.
    #[must_use]
    pub fn new(id: SpellId, name: impl Into<String>, cost: i64) -> Self {
        Self {
            id,
            name: name.into(),
            cost,
            damage: 0,
            heal: 0,
            armor: 0,
            mana_gain: 0,
            duration: 0,
        }
    }

    /// Set the damage magnitude.
    #[must_use]
    pub fn with_damage(mut self, damage: i64) -> Self {
        self.damage = damage;
        self
    }

    /// Set the instant heal magnitude.
    #[must_use]
    pub fn with_heal(mut self, heal: i64) -> Self {
        self.heal = heal;
        self
    }

    /// Set the per-tick armor contribution.
    #[must_use]
    pub fn with_armor(mut self, armor: i64) -> Self {
        self.armor = armor;
        self
    }

    /// Set the per-tick mana gain.
    #[must_use]
    pub fn with_mana_gain(mut self, mana_gain: i64) -> Self {
        self.mana_gain = mana_gain;
        self
    }

    /// Set the effect duration in ticks.
    #[must_use]
    pub fn with_duration(mut self, duration: u32) -> Self {
        self.duration = duration;
        self
    }

    /// Check if this spell resolves immediately when cast.
    #[must_use]
    pub fn is_instant(&self) -> bool {
        self.duration == 0
    }

    /// Check if this spell registers a timed effect when cast.
    #[must_use]
    pub fn is_timed(&self) -> bool {
        self.duration > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spell_id() {
        let id = SpellId::new(3);

        assert_eq!(id.raw(), 3);
        assert_eq!(id, SpellId(3));
        assert_eq!(id.to_string(), "Spell(3)");
    }

    #[test]
    fn test_instant_spell() {
        let missile = SpellDefinition::new(SpellId::new(0), "Magic Missile", 53)
            .with_damage(4);

        assert!(missile.is_instant());
        assert!(!missile.is_timed());
        assert_eq!(missile.damage, 4);
        assert_eq!(missile.heal, 0);
    }

    #[test]
    fn test_timed_spell() {
        let recharge = SpellDefinition::new(SpellId::new(4), "Recharge", 229)
            .with_mana_gain(101)
            .with_duration(5);

        assert!(recharge.is_timed());
        assert_eq!(recharge.mana_gain, 101);
        assert_eq!(recharge.duration, 5);
    }

    #[test]
    fn test_spell_serialization() {
        let shield = SpellDefinition::new(SpellId::new(2), "Shield", 113)
            .with_armor(7)
            .with_duration(6);

        let json = serde_json::to_string(&shield).unwrap();
        let deserialized: SpellDefinition = serde_json::from_str(&json).unwrap();

        assert_eq!(shield, deserialized);
    }
}
