//! Per-item option collection at add-to-cart time
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The two chooser kinds a bundle item can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChoiceKind {
    Size,
    Colour,
}

impl ChoiceKind {
    /// Attribute value used to tag chooser controls in markup.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Size => "size",
            Self::Colour => "colour",
        }
    }
}

/// Snapshot of the choices made for each item of a bundle, keyed by
/// 1-based item index. Entries exist only for choosers that were
/// actually present; an absent chooser is omitted, never an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemOptions {
    #[serde(default)]
    pub sizes: BTreeMap<u8, String>,
    #[serde(default)]
    pub colours: BTreeMap<u8, String>,
}

impl ItemOptions {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty() && self.colours.is_empty()
    }
}

/// Read access to the current value of a chooser control. Returning
/// `None` means the chooser does not exist for that combination.
///
/// The web layer implements this over its rendered picker state; tests
/// implement it over plain maps.
pub trait ChoiceSource {
    fn choice_of(&self, kind: ChoiceKind, unit_count: u8, item: u8) -> Option<String>;
}

/// Collect the size and colour chosen for items `1..=unit_count`.
/// Pure read: values are copied as-is, with no validation, and the
/// result is rebuilt fresh on every call.
pub fn collect_options<S: ChoiceSource + ?Sized>(source: &S, unit_count: u8) -> ItemOptions {
    let mut options = ItemOptions::default();
    for item in 1..=unit_count {
        if let Some(size) = source.choice_of(ChoiceKind::Size, unit_count, item) {
            options.sizes.insert(item, size);
        }
        if let Some(colour) = source.choice_of(ChoiceKind::Colour, unit_count, item) {
            options.colours.insert(item, colour);
        }
    }
    options
}
