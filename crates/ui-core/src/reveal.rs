//! Staggered fade-in of dashboard cards as they scroll into view.
//!
//! Cards start hidden and shifted down; the first time a batch of them
//! intersects the viewport each one is revealed `index * stagger` ms after
//! the batch arrives, then never observed again.

/// Elements that fade in.
pub const REVEAL_TARGETS: &str = ".card, .stat-card";

/// Fraction of a card that must be visible before it is revealed.
pub const REVEAL_THRESHOLD: f64 = 0.05;

/// Inline styles applied before the card is observed.
pub const HIDDEN_STYLE: [(&str, &str); 3] = [
    ("opacity", "0"),
    ("transform", "translateY(16px)"),
    ("transition", "opacity 0.4s ease, transform 0.4s ease"),
];

/// Inline styles applied once the card's delay elapses.
pub const REVEALED_STYLE: [(&str, &str); 2] = [("opacity", "1"), ("transform", "translateY(0)")];

/// Delay for the entry at `index` in an observer batch. The index counts
/// every entry of the batch, intersecting or not.
pub fn reveal_delay(index: usize, stagger_ms: u32) -> u32 {
    u32::try_from(index)
        .unwrap_or(u32::MAX)
        .saturating_mul(stagger_ms)
}
