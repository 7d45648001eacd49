//! Turn engine: the duel state machine.
//!
//! The duel alternates full rounds. Each round is two plies:
//!
//! 1. **Wizard turn**: optional handicap self-damage, one effect tick,
//!    then a mandatory spell cast.
//! 2. **Boss turn**: one effect tick, then the boss attack.
//!
//! The engine exposes the wizard turn in two halves so the search can
//! branch at the decision point (after the tick, when mana gained this
//! turn is already available):
//!
//! - `begin_wizard_turn`: handicap + tick, yielding a decision state
//!   or a terminal outcome.
//! - `finish_round`: cast resolution plus the full boss turn.
//!
//! `play_round` composes both for callers that already know the spell.

use serde::{Deserialize, Serialize};

use crate::spells::{SpellBook, SpellId};

use super::combatant::Combatant;
use super::effects::{apply_tick, ActiveEffect};
use super::state::CombatState;

/// Outcome of the first half of a wizard turn (handicap + tick).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnStart {
    /// The wizard must now choose a castable spell.
    Decision(CombatState),
    /// The boss died on the tick; no spell is cast or charged.
    Won(CombatState),
    /// The handicap killed the wizard before anything else happened.
    Lost,
}

/// Outcome of a full round (or of its remaining half).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundOutcome {
    /// Both combatants stand; the next wizard turn may begin.
    Continue(CombatState),
    /// The boss is dead.
    Won(CombatState),
    /// The wizard is dead.
    Lost,
}

/// The duel state machine.
///
/// Owns the spell book and the per-turn handicap. All transition
/// methods consume a state and produce a new one; no state is ever
/// shared between callers.
///
/// ## Example
///
/// ```
/// use wizard_duel::{DuelBuilder, RoundOutcome};
///
/// let (engine, state) = DuelBuilder::new().wizard(10, 250).boss(13, 8).build();
/// let spells = engine.book().spell_ids().collect::<Vec<_>>();
///
/// // Cast the first castable spell for one full round.
/// match engine.play_round(&state, spells[0]) {
///     RoundOutcome::Continue(next) => assert_eq!(next.cast_count(), 1),
///     _ => unreachable!("neither side dies in round one"),
/// }
/// ```
#[derive(Clone, Debug)]
pub struct TurnEngine {
    book: SpellBook,
    handicap: i64,
}

impl TurnEngine {
    /// Create an engine with no handicap.
    #[must_use]
    pub fn new(book: SpellBook) -> Self {
        assert!(!book.is_empty(), "Spell book must not be empty");
        Self { book, handicap: 0 }
    }

    /// Set the per-turn self-damage applied at the start of every
    /// wizard turn (hard mode uses 1).
    #[must_use]
    pub fn with_handicap(mut self, handicap: i64) -> Self {
        assert!(handicap >= 0, "Handicap must be non-negative");
        self.handicap = handicap;
        self
    }

    /// Get the spell book.
    #[must_use]
    pub fn book(&self) -> &SpellBook {
        &self.book
    }

    /// Get the per-turn handicap.
    #[must_use]
    pub fn handicap(&self) -> i64 {
        self.handicap
    }

    /// Enumerate castable spells at a decision point, in book order.
    ///
    /// A spell is castable if its cost does not exceed current mana
    /// and its timed effect is not still active. The decision state is
    /// post-tick, so an effect on its expiry tick has already been
    /// dropped - recasting on the exact tick it ends is legal.
    #[must_use]
    pub fn castable_spells(&self, state: &CombatState) -> Vec<SpellId> {
        self.book
            .iter()
            .filter(|spell| spell.cost <= state.wizard.mana)
            .filter(|spell| !state.is_effect_active(spell.id))
            .map(|spell| spell.id)
            .collect()
    }

    /// Run the first half of a wizard turn: handicap, then one tick.
    ///
    /// A handicap death short-circuits everything: no tick runs and no
    /// spell is cast. A boss death on the tick wins without charging
    /// the wizard for an uncast spell.
    #[must_use]
    pub fn begin_wizard_turn(&self, mut state: CombatState) -> TurnStart {
        state.wizard.hit_points -= self.handicap;
        if state.wizard.is_defeated() {
            return TurnStart::Lost;
        }

        apply_tick(&mut state, &self.book);
        if state.boss.is_defeated() {
            return TurnStart::Won(state);
        }

        TurnStart::Decision(state)
    }

    /// Resolve a cast on a decision state, then play the boss turn.
    ///
    /// The spell must be castable; callers choose from
    /// `castable_spells`. Cost is deducted up front. Instant spells
    /// apply damage and heal immediately; timed spells register their
    /// effect (replacing an expired-and-recast instance if one is
    /// somehow still present, preserving the one-instance invariant).
    #[must_use]
    pub fn finish_round(&self, mut state: CombatState, spell: SpellId) -> RoundOutcome {
        let def = self.book.get_unchecked(spell);
        debug_assert!(
            def.cost <= state.wizard.mana,
            "Cast of {} is unaffordable",
            def.name
        );

        state.wizard.mana -= def.cost;
        state.record_cast(spell);

        if def.is_instant() {
            state.boss.hit_points -= def.damage;
            state.wizard.hit_points += def.heal;
            if state.boss.is_defeated() {
                return RoundOutcome::Won(state);
            }
        } else if let Some(active) = state.active_effects.iter_mut().find(|e| e.spell == spell) {
            active.remaining = def.duration;
        } else {
            state.active_effects.push(ActiveEffect {
                spell,
                remaining: def.duration,
            });
        }

        self.boss_turn(state)
    }

    /// Play the boss turn: one tick, then the attack.
    ///
    /// The attack deals `max(boss.damage - wizard.armor, 1)` - armor
    /// never reduces it below one. A boss killed by the tick never
    /// attacks.
    #[must_use]
    pub fn boss_turn(&self, mut state: CombatState) -> RoundOutcome {
        apply_tick(&mut state, &self.book);
        if state.boss.is_defeated() {
            return RoundOutcome::Won(state);
        }

        let attack = (state.boss.damage - state.wizard.armor).max(1);
        state.wizard.hit_points -= attack;
        if state.wizard.is_defeated() {
            return RoundOutcome::Lost;
        }

        RoundOutcome::Continue(state)
    }

    /// Play one full two-ply round for a chosen spell.
    #[must_use]
    pub fn play_round(&self, state: &CombatState, spell: SpellId) -> RoundOutcome {
        match self.begin_wizard_turn(state.clone()) {
            TurnStart::Lost => RoundOutcome::Lost,
            TurnStart::Won(state) => RoundOutcome::Won(state),
            TurnStart::Decision(state) => self.finish_round(state, spell),
        }
    }
}

/// Builder assembling a `TurnEngine` and initial `CombatState` from
/// plain scalar stats.
///
/// Uses the standard five-spell catalog; duels with a custom catalog
/// construct `TurnEngine::new` directly. Wizard stats default to the
/// classic 50 hit points and 500 mana; boss stats must be supplied.
///
/// ## Example
///
/// ```
/// use wizard_duel::DuelBuilder;
///
/// let (engine, state) = DuelBuilder::new()
///     .boss(58, 9)
///     .handicap(1)
///     .build();
///
/// assert_eq!(state.wizard.hit_points, 50);
/// assert_eq!(engine.handicap(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct DuelBuilder {
    wizard_hit_points: i64,
    wizard_mana: i64,
    boss_hit_points: i64,
    boss_damage: i64,
    handicap: i64,
}

impl Default for DuelBuilder {
    fn default() -> Self {
        Self {
            wizard_hit_points: 50,
            wizard_mana: 500,
            boss_hit_points: 0,
            boss_damage: 0,
            handicap: 0,
        }
    }
}

impl DuelBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the wizard's starting hit points and mana.
    #[must_use]
    pub fn wizard(mut self, hit_points: i64, mana: i64) -> Self {
        self.wizard_hit_points = hit_points;
        self.wizard_mana = mana;
        self
    }

    /// Set the boss's starting hit points and attack damage.
    #[must_use]
    pub fn boss(mut self, hit_points: i64, damage: i64) -> Self {
        self.boss_hit_points = hit_points;
        self.boss_damage = damage;
        self
    }

    /// Set the per-turn handicap (hard mode).
    #[must_use]
    pub fn handicap(mut self, handicap: i64) -> Self {
        self.handicap = handicap;
        self
    }

    /// Build the engine and initial state.
    ///
    /// Panics if boss stats were never supplied.
    #[must_use]
    pub fn build(self) -> (TurnEngine, CombatState) {
        assert!(self.boss_hit_points > 0, "Boss hit points must be set");

        let (book, _) = SpellBook::standard();
        let engine = TurnEngine::new(book).with_handicap(self.handicap);
        let state = CombatState::new(
            Combatant::wizard(self.wizard_hit_points, self.wizard_mana),
            Combatant::boss(self.boss_hit_points, self.boss_damage),
        );

        (engine, state)
    }
}
