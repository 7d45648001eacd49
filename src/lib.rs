//! # wizard-duel
//!
//! A turn-based spell combat simulator driven by an exhaustive
//! least-mana strategy search.
//!
//! ## Design Principles
//!
//! 1. **Value-Semantics State**: Every transition consumes a
//!    `CombatState` and produces a new one. Each search branch owns
//!    its own copy; nothing is ever shared or mutated in place across
//!    branches.
//!
//! 2. **Cheap Cloning**: The cast history uses `im` persistent data
//!    structures, so the one-clone-per-branch strategy stays O(1).
//!
//! 3. **Deterministic**: No randomness anywhere. Identical starting
//!    stats and catalog always produce identical results.
//!
//! ## Architecture
//!
//! - **Effect Ledger**: one tick applies every active timed effect
//!   (boss damage, wizard mana, rebuilt armor), then decrements and
//!   drops expired effects.
//!
//! - **Turn Engine**: the alternating-turn state machine. A round is
//!   two plies: handicap + tick + mandatory cast, then tick + boss
//!   attack. Win/loss detection happens inside the transitions.
//!
//! - **Strategy Search**: bounded depth-first backtracking over
//!   castable spells, collecting every winning total cost and taking
//!   the minimum after full enumeration.
//!
//! ## Example
//!
//! ```
//! use wizard_duel::{DuelBuilder, MinManaSearch};
//!
//! let (engine, state) = DuelBuilder::new().wizard(10, 250).boss(13, 8).build();
//! let search = MinManaSearch::new(engine);
//!
//! assert_eq!(search.minimum_cost(&state), Some(226));
//! ```
//!
//! ## Modules
//!
//! - `spells`: Spell definitions and the spell book
//! - `combat`: Combatants, duel state, effect ledger, turn engine
//! - `search`: Least-mana depth-first search

pub mod combat;
pub mod search;
pub mod spells;

// Re-export commonly used types
pub use crate::spells::{SpellBook, SpellDefinition, SpellId, StandardSpells};

pub use crate::combat::{
    apply_tick, ActiveEffect, Combatant, CombatState, DuelBuilder, RoundOutcome, TurnEngine,
    TurnStart,
};

pub use crate::search::{MinManaSearch, SearchConfig};
