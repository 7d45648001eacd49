//! Effect ledger - advancing active timed effects by one tick.
//!
//! A tick is one full application of every active effect. The engine
//! applies one tick at the start of the wizard's turn and one at the
//! start of the boss's turn; both are identical.

use serde::{Deserialize, Serialize};

use crate::spells::{SpellBook, SpellId};

use super::state::CombatState;

/// A timed effect currently in play.
///
/// Created when a timed spell is cast, with `remaining` set to the
/// spell's duration. Decremented once per tick and removed exactly
/// when the counter reaches zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveEffect {
    /// The spell this effect belongs to.
    pub spell: SpellId,

    /// Ticks left, including the current one.
    pub remaining: u32,
}

/// Apply one tick of every active effect to the state.
///
/// In order: wizard armor is reset to zero, then each active effect
/// applies its per-tick damage to the boss, its mana gain to the
/// wizard, and its armor contribution to the rebuilt total. An effect
/// on its final tick still contributes before being dropped. Effects
/// do not interact within a tick, so their order does not matter.
///
/// The caller is responsible for checking boss death afterwards; a
/// tick never ends the duel by itself.
///
/// Panics on an unrecognized spell ID (a programming error).
pub fn apply_tick(state: &mut CombatState, book: &SpellBook) {
    let CombatState {
        wizard,
        boss,
        active_effects,
        ..
    } = state;

    wizard.armor = 0;
    for effect in active_effects.iter_mut() {
        let spell = book.get_unchecked(effect.spell);
        boss.hit_points -= spell.damage;
        wizard.mana += spell.mana_gain;
        wizard.armor += spell.armor;
        effect.remaining -= 1;
    }

    active_effects.retain(|effect| effect.remaining > 0);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::Combatant;

    fn state_with_all_effects() -> (SpellBook, CombatState) {
        let (book, ids) = SpellBook::standard();
        let mut state = CombatState::new(Combatant::wizard(10, 250), Combatant::boss(13, 8));
        state.active_effects.push(ActiveEffect {
            spell: ids.shield,
            remaining: 6,
        });
        state.active_effects.push(ActiveEffect {
            spell: ids.poison,
            remaining: 6,
        });
        state.active_effects.push(ActiveEffect {
            spell: ids.recharge,
            remaining: 5,
        });
        (book, state)
    }

    #[test]
    fn test_tick_with_no_effects_is_a_no_op() {
        let (book, _) = SpellBook::standard();
        let mut state = CombatState::new(Combatant::wizard(10, 250), Combatant::boss(13, 8));

        let before = state.clone();
        apply_tick(&mut state, &book);

        assert_eq!(state, before);
        assert_eq!(state.wizard.armor, 0);
    }

    #[test]
    fn test_tick_applies_every_contribution() {
        let (book, mut state) = state_with_all_effects();

        apply_tick(&mut state, &book);

        assert_eq!(state.boss.hit_points, 10); // poison
        assert_eq!(state.wizard.mana, 351); // recharge
        assert_eq!(state.wizard.armor, 7); // shield
        assert_eq!(state.wizard.hit_points, 10); // untouched
    }

    #[test]
    fn test_tick_decrements_every_counter_by_one() {
        let (book, mut state) = state_with_all_effects();

        apply_tick(&mut state, &book);

        let remaining: Vec<u32> = state.active_effects.iter().map(|e| e.remaining).collect();
        assert_eq!(remaining, vec![5, 5, 4]);
    }

    #[test]
    fn test_effect_dropped_exactly_at_zero() {
        let (book, ids) = SpellBook::standard();
        let mut state = CombatState::new(Combatant::wizard(10, 250), Combatant::boss(13, 8));
        state.active_effects.push(ActiveEffect {
            spell: ids.poison,
            remaining: 2,
        });

        apply_tick(&mut state, &book);
        assert!(state.is_effect_active(ids.poison));
        assert_eq!(state.effect(ids.poison).unwrap().remaining, 1);
        assert_eq!(state.boss.hit_points, 10);

        apply_tick(&mut state, &book);
        assert!(!state.is_effect_active(ids.poison));
        // Final tick still dealt its damage before the drop.
        assert_eq!(state.boss.hit_points, 7);
    }

    #[test]
    fn test_armor_rebuilt_not_accumulated() {
        let (book, ids) = SpellBook::standard();
        let mut state = CombatState::new(Combatant::wizard(10, 250), Combatant::boss(13, 8));
        state.active_effects.push(ActiveEffect {
            spell: ids.shield,
            remaining: 6,
        });

        apply_tick(&mut state, &book);
        apply_tick(&mut state, &book);
        apply_tick(&mut state, &book);

        assert_eq!(state.wizard.armor, 7);
    }

    #[test]
    fn test_armor_reset_when_shield_gone() {
        let (book, ids) = SpellBook::standard();
        let mut state = CombatState::new(Combatant::wizard(10, 250), Combatant::boss(13, 8));
        state.wizard.armor = 7;
        state.active_effects.push(ActiveEffect {
            spell: ids.poison,
            remaining: 3,
        });

        apply_tick(&mut state, &book);

        assert_eq!(state.wizard.armor, 0);
    }
}
