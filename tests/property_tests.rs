//! Property tests for the effect ledger and the turn engine.

use proptest::prelude::*;

use wizard_duel::{
    apply_tick, ActiveEffect, Combatant, CombatState, RoundOutcome, SpellBook, TurnEngine,
    TurnStart,
};

proptest! {
    // A tick over an empty ledger touches no stat and leaves armor at
    // zero, whatever the combatants look like.
    #[test]
    fn tick_with_no_effects_changes_nothing(
        hit_points in 1..200i64,
        mana in 0..2000i64,
        boss_hit_points in 1..200i64,
        boss_damage in 1..30i64,
    ) {
        let (book, _) = SpellBook::standard();
        let mut state = CombatState::new(
            Combatant::wizard(hit_points, mana),
            Combatant::boss(boss_hit_points, boss_damage),
        );
        let before = state.clone();

        apply_tick(&mut state, &book);

        prop_assert_eq!(&state, &before);
        prop_assert_eq!(state.wizard.armor, 0);
    }

    // An effect counts down by exactly one per tick and disappears on
    // the tick its counter reaches zero, contributing on every tick
    // including the last.
    #[test]
    fn effect_expires_after_exactly_its_duration(duration in 1u32..10) {
        let (book, spells) = SpellBook::standard();
        let mut state = CombatState::new(Combatant::wizard(50, 500), Combatant::boss(1000, 9));
        state.active_effects.push(ActiveEffect {
            spell: spells.poison,
            remaining: duration,
        });

        for tick in 1..=duration {
            apply_tick(&mut state, &book);

            if tick < duration {
                let effect = state.effect(spells.poison).unwrap();
                prop_assert_eq!(effect.remaining, duration - tick);
            } else {
                prop_assert!(!state.is_effect_active(spells.poison));
            }
        }

        // Every tick dealt damage, the final one included.
        prop_assert_eq!(state.boss.hit_points, 1000 - 3 * i64::from(duration));
    }

    // The castable set never offers a spell the wizard cannot pay for,
    // nor one whose effect is still running.
    #[test]
    fn castable_spells_are_affordable_and_inactive(
        mana in 0..400i64,
        shield_left in 1u32..6,
        recharge_left in 1u32..5,
    ) {
        let (book, spells) = SpellBook::standard();
        let engine = TurnEngine::new(book);

        let mut state = CombatState::new(Combatant::wizard(50, mana), Combatant::boss(100, 9));
        state.active_effects.push(ActiveEffect {
            spell: spells.shield,
            remaining: shield_left,
        });
        state.active_effects.push(ActiveEffect {
            spell: spells.recharge,
            remaining: recharge_left,
        });

        for id in engine.castable_spells(&state) {
            let spell = engine.book().get_unchecked(id);
            prop_assert!(spell.cost <= state.wizard.mana);
            prop_assert!(!state.is_effect_active(id));
        }
    }

    // Across a full round, every cast deducts exactly its cost (plus
    // any recharge income on the boss tick) and mana never goes
    // negative.
    #[test]
    fn casting_deducts_exactly_the_cost(mana in 0..700i64) {
        let (book, spells) = SpellBook::standard();
        let engine = TurnEngine::new(book);
        let state = CombatState::new(Combatant::wizard(50, mana), Combatant::boss(100, 1));

        let decision = match engine.begin_wizard_turn(state) {
            TurnStart::Decision(decision) => decision,
            other => panic!("Expected a decision, got {:?}", other),
        };

        for id in engine.castable_spells(&decision) {
            let cost = engine.book().get_unchecked(id).cost;
            let income = if id == spells.recharge { 101 } else { 0 };

            match engine.finish_round(decision.clone(), id) {
                RoundOutcome::Continue(next) | RoundOutcome::Won(next) => {
                    prop_assert_eq!(next.wizard.mana, decision.wizard.mana - cost + income);
                    prop_assert!(next.wizard.mana >= 0);
                }
                RoundOutcome::Lost => {}
            }
        }
    }
}
