use std::collections::BTreeMap;

use multibuy_core::{Cart, Catalog, CatalogLoadError, ChoiceKind, ChoiceSource, Selection};

/// Picker interface state: the loaded catalog plus everything the
/// shopper has done with it this session.
#[derive(Debug, Clone, PartialEq)]
pub struct PickerState {
    pub catalog: Catalog,
    pub selection: Selection,
    /// Chooser values keyed by (unit count, item index, kind); a
    /// missing entry means the control still shows its first option.
    pub choices: BTreeMap<(u8, u8, ChoiceKind), String>,
    pub cart: Cart,
}

impl PickerState {
    #[must_use]
    pub fn from_catalog(catalog: Catalog) -> Self {
        let selection = Selection::default_for(&catalog);
        Self {
            catalog,
            selection,
            choices: BTreeMap::new(),
            cart: Cart::new(),
        }
    }

    /// State for page boot: the embedded catalog with the smallest
    /// bundle preselected. A broken embed degrades to an empty page
    /// instead of a crash.
    #[must_use]
    pub fn boot() -> Self {
        match load_catalog() {
            Ok(catalog) => Self::from_catalog(catalog),
            Err(e) => {
                log::error!("failed to load catalog data: {e}");
                #[cfg(target_arch = "wasm32")]
                crate::dom::console_error(&format!("Failed to load catalog data: {e}"));
                Self::from_catalog(Catalog::default())
            }
        }
    }

    pub fn set_choice(&mut self, unit_count: u8, item: u8, kind: ChoiceKind, value: String) {
        self.choices.insert((unit_count, item, kind), value);
    }

    /// The choices a chooser of this kind offers.
    #[must_use]
    pub fn offered(&self, kind: ChoiceKind) -> &[String] {
        match kind {
            ChoiceKind::Size => &self.catalog.sizes,
            ChoiceKind::Colour => &self.catalog.colours,
        }
    }
}

/// Chooser reads mirror the rendered markup: a control exists only for
/// items of a known bundle and only when the catalog offers choices of
/// that kind, and it reports its first option until the shopper picks
/// another.
impl ChoiceSource for PickerState {
    fn choice_of(&self, kind: ChoiceKind, unit_count: u8, item: u8) -> Option<String> {
        if item == 0 || item > unit_count || self.catalog.option(unit_count).is_none() {
            return None;
        }
        let first = self.offered(kind).first()?;
        Some(
            self.choices
                .get(&(unit_count, item, kind))
                .cloned()
                .unwrap_or_else(|| first.clone()),
        )
    }
}

/// Load catalog data from embedded JSON.
pub(super) fn load_catalog() -> Result<Catalog, CatalogLoadError> {
    Catalog::from_json(include_str!("../../../static/assets/data/catalog.json"))
}
