//! Topping catalogs and customer order generation

use rand::Rng;
use rand_pcg::Pcg32;

use crate::consts::MAX_ORDER_SCOOPS;

/// Cone variants, in counter display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConeKind {
    Light,
    Dark,
    LightCake,
    DarkCake,
}

impl ConeKind {
    /// The fixed catalog
    pub const ALL: [ConeKind; 4] = [
        ConeKind::Light,
        ConeKind::Dark,
        ConeKind::LightCake,
        ConeKind::DarkCake,
    ];

    /// Asset file name for this cone
    pub fn asset(&self) -> &'static str {
        match self {
            ConeKind::Light => "light-cone.png",
            ConeKind::Dark => "dark-cone.png",
            ConeKind::LightCake => "light-cake-cone.png",
            ConeKind::DarkCake => "dark-cake-cone.png",
        }
    }
}

/// Scoop flavors, in counter display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoopFlavor {
    Vanilla,
    Chocolate,
    Strawberry,
    Blueberry,
}

impl ScoopFlavor {
    /// The fixed catalog
    pub const ALL: [ScoopFlavor; 4] = [
        ScoopFlavor::Vanilla,
        ScoopFlavor::Chocolate,
        ScoopFlavor::Strawberry,
        ScoopFlavor::Blueberry,
    ];

    /// Asset file name for this scoop
    pub fn asset(&self) -> &'static str {
        match self {
            ScoopFlavor::Vanilla => "vanilla-scoop.png",
            ScoopFlavor::Chocolate => "chocolate-scoop.png",
            ScoopFlavor::Strawberry => "strawberry-scoop.png",
            ScoopFlavor::Blueberry => "blueberry-scoop.png",
        }
    }
}

/// A customer's requested ice cream. Immutable once generated; compared by
/// value against the player's build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub cone: ConeKind,
    /// Requested flavors, bottom to top; a build must match them in this order
    pub scoops: Vec<ScoopFlavor>,
}

impl Order {
    /// Generate a random order: uniform cone, 1-3 scoops drawn uniformly with
    /// replacement, kept in draw order.
    pub fn generate(rng: &mut Pcg32) -> Self {
        let cone = ConeKind::ALL[rng.random_range(0..ConeKind::ALL.len())];
        let scoop_count = rng.random_range(1..=MAX_ORDER_SCOOPS);
        let scoops = (0..scoop_count)
            .map(|_| ScoopFlavor::ALL[rng.random_range(0..ScoopFlavor::ALL.len())])
            .collect();
        Self { cone, scoops }
    }
}
