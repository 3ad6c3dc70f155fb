//! Session state and core types
//!
//! Everything the presentation layer reads lives here. The presentation layer
//! never writes; all mutation goes through the operations in [`super::tick`].

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::order::{ConeKind, Order, ScoopFlavor};
use crate::consts::*;

/// Current phase of a play session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Start screen is up, clock not running
    NotStarted,
    /// Countdown running, player actions accepted
    Active,
    /// Clock hit zero, end screen is up
    Ended,
}

/// One visible customer position at the counter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerSlot {
    /// Customer id, unique among visible slots (cyclic space 1..=CUSTOMER_POOL)
    pub customer: u8,
    pub order: Order,
}

impl CustomerSlot {
    /// Asset file name for the customer art
    pub fn asset(&self) -> String {
        format!("customer{}.svg", self.customer)
    }
}

/// The player's in-progress build
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assembly {
    pub cone: Option<ConeKind>,
    /// Scoops in the order they were added, bottom to top
    pub scoops: Vec<ScoopFlavor>,
}

impl Assembly {
    /// A build can only be served once it has a cone and at least one scoop
    pub fn is_servable(&self) -> bool {
        self.cone.is_some() && !self.scoops.is_empty()
    }

    /// Whether the build matches `order` exactly: same cone, same flavors in
    /// the same order
    pub fn matches(&self, order: &Order) -> bool {
        self.cone == Some(order.cone) && self.scoops == order.scoops
    }

    pub fn clear(&mut self) {
        self.cone = None;
        self.scoops.clear();
    }
}

/// Wrap a customer id back to 1 past the end of the pool
pub(crate) fn wrap_customer(id: u8) -> u8 {
    if id > CUSTOMER_POOL { 1 } else { id }
}

/// Complete session state (deterministic given seed and action sequence)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub(crate) rng: Pcg32,
    pub phase: SessionPhase,
    /// Seconds remaining
    pub clock: u32,
    pub coins: u32,
    /// Visible customers, always exactly VISIBLE_CUSTOMERS entries
    pub slots: Vec<CustomerSlot>,
    pub assembly: Assembly,
    /// Where the cyclic scan for the next free customer id begins
    pub(crate) next_customer: u8,
}

impl GameState {
    /// Create a fresh session: full clock, no coins, customers 1..=3 at the
    /// counter with newly generated orders.
    pub fn new(seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let slots = (1..=VISIBLE_CUSTOMERS as u8)
            .map(|customer| CustomerSlot {
                customer,
                order: Order::generate(&mut rng),
            })
            .collect();
        Self {
            seed,
            rng,
            phase: SessionPhase::NotStarted,
            clock: SESSION_SECS,
            coins: 0,
            slots,
            assembly: Assembly::default(),
            next_customer: FIRST_QUEUED_CUSTOMER,
        }
    }

    /// Claim the next customer id not currently visible: scan cyclically from
    /// the cursor (wrapping CUSTOMER_POOL -> 1), then advance the cursor past
    /// the claimed id with the same wrap.
    pub(crate) fn claim_next_customer(&mut self) -> u8 {
        let mut id = self.next_customer;
        while self.slots.iter().any(|slot| slot.customer == id) {
            id = wrap_customer(id + 1);
        }
        self.next_customer = wrap_customer(id + 1);
        id
    }
}
