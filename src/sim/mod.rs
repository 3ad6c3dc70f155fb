//! Deterministic game logic
//!
//! All gameplay rules live here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Fixed topping catalogs
//! - No rendering or platform dependencies
//!
//! A whole session is reproducible from its seed plus the action sequence.

pub mod order;
pub mod state;
pub mod tick;

pub use order::{ConeKind, Order, ScoopFlavor};
pub use state::{Assembly, CustomerSlot, GameState, SessionPhase};
pub use tick::{
    ServeOutcome, add_scoop, clear_assembly, restart, select_cone, start, submit_order,
    tick_second,
};
