//! Append-only shopping cart
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::Clock;
use crate::catalog::ProductOption;
use crate::options::ItemOptions;

/// One added bundle. Immutable once created.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub unit_count: u8,
    /// Price in cents at the moment of addition
    pub price_cents: i64,
    #[serde(default)]
    pub sizes: BTreeMap<u8, String>,
    #[serde(default)]
    pub colours: BTreeMap<u8, String>,
    /// ISO-8601 UTC creation timestamp
    pub created_at: String,
}

/// Cart state for one page session. Lines are only ever appended, in
/// call order; identical additions are kept as separate lines.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create a new empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a line from the active option and its collected choices,
    /// stamp it with the clock, and append it. Returns the created
    /// line for immediate use.
    pub fn add_line(
        &mut self,
        option: &ProductOption,
        options: ItemOptions,
        clock: &impl Clock,
    ) -> CartLine {
        let line = CartLine {
            unit_count: option.unit_count,
            price_cents: option.price_cents,
            sizes: options.sizes,
            colours: options.colours,
            created_at: clock.now_iso(),
        };
        self.lines.push(line.clone());
        log::info!(
            "cart: added {}-unit line at {} cents ({} total)",
            line.unit_count,
            line.price_cents,
            self.lines.len()
        );
        log::debug!("cart contents: {:?}", self.lines);
        line
    }

    /// All lines in addition order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// The most recently added line.
    #[must_use]
    pub fn last(&self) -> Option<&CartLine> {
        self.lines.last()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if the cart is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of line prices in cents.
    #[must_use]
    pub fn total_cents(&self) -> i64 {
        self.lines.iter().map(|line| line.price_cents).sum()
    }
}
