//! Combat system: stat records, duel state, the effect ledger, and
//! the turn engine.
//!
//! ## Key Types
//!
//! - `Combatant`: hit points / damage / armor / mana stat record
//! - `CombatState`: one snapshot of the duel, cloned per search branch
//! - `ActiveEffect`: a timed effect with its remaining-duration counter
//! - `TurnEngine`: the alternating-turn state machine
//! - `DuelBuilder`: engine + initial state from plain scalar stats

pub mod combatant;
pub mod effects;
pub mod engine;
pub mod state;

pub use combatant::Combatant;
pub use effects::{apply_tick, ActiveEffect};
pub use engine::{DuelBuilder, RoundOutcome, TurnEngine, TurnStart};
pub use state::CombatState;
