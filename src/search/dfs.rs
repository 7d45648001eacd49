//! Least-mana strategy search.
//!
//! Bounded depth-first backtracking over the wizard's spell choices.
//! At each decision point the search branches over every castable
//! spell, advances a full two-ply round, and recurses. A branch that
//! loses, or runs out of casts, contributes nothing; every branch
//! that wins contributes its total mana cost. The minimum is taken
//! after full enumeration - there is no incumbent-best pruning, a
//! deliberate simplicity trade-off at this bounded depth.
//!
//! Every branch owns an independent clone of the state, so the search
//! is purely functional and deterministic.

use crate::combat::{CombatState, RoundOutcome, TurnEngine, TurnStart};

use super::config::SearchConfig;

/// Exhaustive search for the cheapest winning spell sequence.
///
/// ## Example
///
/// ```
/// use wizard_duel::{DuelBuilder, MinManaSearch};
///
/// let (engine, state) = DuelBuilder::new().wizard(10, 250).boss(13, 8).build();
/// let search = MinManaSearch::new(engine);
///
/// // Poison (173) then Magic Missile (53) is the cheapest win.
/// assert_eq!(search.minimum_cost(&state), Some(226));
/// ```
pub struct MinManaSearch {
    engine: TurnEngine,
    config: SearchConfig,
}

impl MinManaSearch {
    /// Create a search over the given engine with the default config.
    #[must_use]
    pub fn new(engine: TurnEngine) -> Self {
        Self {
            engine,
            config: SearchConfig::default(),
        }
    }

    /// Replace the search configuration.
    #[must_use]
    pub fn with_config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    /// Get the engine.
    #[must_use]
    pub fn engine(&self) -> &TurnEngine {
        &self.engine
    }

    /// Collect the total cost of every winning branch.
    ///
    /// "No castable spell" and "wizard dies" are ordinary losing
    /// outcomes; they simply contribute nothing. An empty result means
    /// no winning sequence exists within the cast limit.
    #[must_use]
    pub fn winning_costs(&self, state: &CombatState) -> Vec<i64> {
        let mut costs = Vec::new();
        self.explore(state, &mut costs);
        costs
    }

    /// The minimum total mana cost to win, if any branch wins.
    #[must_use]
    pub fn minimum_cost(&self, state: &CombatState) -> Option<i64> {
        self.winning_costs(state).into_iter().min()
    }

    /// Recurse from a state at the start of a wizard turn.
    fn explore(&self, state: &CombatState, costs: &mut Vec<i64>) {
        let book = self.engine.book();

        match self.engine.begin_wizard_turn(state.clone()) {
            TurnStart::Lost => {}
            TurnStart::Won(won) => costs.push(won.mana_spent(book)),
            TurnStart::Decision(decision) => {
                if decision.cast_count() >= self.config.max_casts {
                    return;
                }

                // An empty castable set falls through as a loss.
                for spell in self.engine.castable_spells(&decision) {
                    match self.engine.finish_round(decision.clone(), spell) {
                        RoundOutcome::Lost => {}
                        RoundOutcome::Won(won) => costs.push(won.mana_spent(book)),
                        RoundOutcome::Continue(next) => self.explore(&next, costs),
                    }
                }
            }
        }
    }
}
