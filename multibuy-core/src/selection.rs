//! Single-active bundle selection
use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, ProductOption};

/// Result of a selection attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum SelectOutcome {
    /// The option is now active (re-selecting the active option lands
    /// here too; repeating it is harmless).
    Applied { unit_count: u8, price_cents: i64 },
    /// Unknown key; the selection is untouched.
    Ignored,
}

/// At most one bundle option is active at a time. Both the option box
/// and its radio control render from this one value, so the two
/// representations cannot disagree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    active: Option<u8>,
}

impl Selection {
    /// A selection with nothing active.
    #[must_use]
    pub const fn none() -> Self {
        Self { active: None }
    }

    /// The initial selection for a catalog: its smallest bundle.
    #[must_use]
    pub fn default_for(catalog: &Catalog) -> Self {
        Self {
            active: catalog.default_option().map(|option| option.unit_count),
        }
    }

    /// Activate the option with the given unit-count key. Unknown keys
    /// leave the current selection in place.
    pub fn select(&mut self, catalog: &Catalog, unit_count: u8) -> SelectOutcome {
        match catalog.option(unit_count) {
            Some(option) => {
                self.active = Some(option.unit_count);
                SelectOutcome::Applied {
                    unit_count: option.unit_count,
                    price_cents: option.price_cents,
                }
            }
            None => {
                log::debug!("select ignored: no option with unit count {unit_count}");
                SelectOutcome::Ignored
            }
        }
    }

    /// Drop the active selection entirely.
    pub fn clear(&mut self) {
        self.active = None;
    }

    #[must_use]
    pub const fn active_unit(&self) -> Option<u8> {
        self.active
    }

    #[must_use]
    pub fn is_active(&self, unit_count: u8) -> bool {
        self.active == Some(unit_count)
    }

    /// The catalog entry behind the active key, if any.
    #[must_use]
    pub fn active_option<'a>(&self, catalog: &'a Catalog) -> Option<&'a ProductOption> {
        self.active.and_then(|unit_count| catalog.option(unit_count))
    }
}
