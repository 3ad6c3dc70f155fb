//! Session state transitions
//!
//! Every mutation of [`GameState`] goes through the operations here, driven
//! by discrete player actions plus the once-per-second countdown tick. The
//! session moves NotStarted -> Active -> Ended, and only restart leaves
//! Ended. Gameplay actions outside Active are ignored.

use super::order::{ConeKind, Order, ScoopFlavor};
use super::state::{CustomerSlot, GameState, SessionPhase};
use crate::consts::*;

/// Result of submitting the current build against a customer slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServeOutcome {
    /// Nothing happened: session not active, build not servable, or bad index
    Ignored,
    /// Build matched the order; customer served and replaced
    Served,
    /// Build did not match; penalty applied, build kept
    Rejected,
}

/// Dismiss the start screen and begin the session
pub fn start(state: &mut GameState) {
    if state.phase != SessionPhase::NotStarted {
        return;
    }
    state.phase = SessionPhase::Active;
    log::info!("Session started (seed {})", state.seed);
}

/// Put a cone under the build. Selecting again overwrites, never stacks.
pub fn select_cone(state: &mut GameState, cone: ConeKind) {
    if state.phase != SessionPhase::Active {
        return;
    }
    state.assembly.cone = Some(cone);
}

/// Stack one scoop on top of the build
pub fn add_scoop(state: &mut GameState, flavor: ScoopFlavor) {
    if state.phase != SessionPhase::Active {
        return;
    }
    state.assembly.scoops.push(flavor);
}

/// Throw the in-progress build away
pub fn clear_assembly(state: &mut GameState) {
    if state.phase != SessionPhase::Active {
        return;
    }
    state.assembly.clear();
}

/// Serve the current build to the customer in `slot_index`.
///
/// A match pays out and rotates the queue: the served slot is removed, the
/// next free customer id is claimed, a fresh order is generated for it, and
/// the build is cleared. A mismatch costs coins (floored at zero) but leaves
/// both the build and the customer in place so the player can retarget.
pub fn submit_order(state: &mut GameState, slot_index: usize) -> ServeOutcome {
    if state.phase != SessionPhase::Active {
        return ServeOutcome::Ignored;
    }
    if !state.assembly.is_servable() {
        return ServeOutcome::Ignored;
    }
    let Some(slot) = state.slots.get(slot_index) else {
        return ServeOutcome::Ignored;
    };

    if state.assembly.matches(&slot.order) {
        state.coins += MATCH_REWARD;
        state.slots.remove(slot_index);
        let customer = state.claim_next_customer();
        let order = Order::generate(&mut state.rng);
        state.slots.push(CustomerSlot { customer, order });
        state.assembly.clear();
        ServeOutcome::Served
    } else {
        state.coins = state.coins.saturating_sub(MISMATCH_PENALTY);
        ServeOutcome::Rejected
    }
}

/// Advance the countdown by one second.
///
/// Returns true on the tick that ends the session, so the driver can cancel
/// the repeating timer and run end-of-session work exactly once. The clock is
/// pinned at zero; ticks outside Active are no-ops.
pub fn tick_second(state: &mut GameState) -> bool {
    if state.phase != SessionPhase::Active {
        return false;
    }
    state.clock = state.clock.saturating_sub(1);
    if state.clock == 0 {
        state.phase = SessionPhase::Ended;
        log::info!("Session over with {} coins", state.coins);
        return true;
    }
    false
}

/// Replace the whole session with a fresh one and go straight to Active.
/// High scores are not touched here; they live outside the sim.
pub fn restart(state: &mut GameState, seed: u64) {
    *state = GameState::new(seed);
    state.phase = SessionPhase::Active;
    log::info!("Session restarted (seed {seed})");
}
