use multibuy_core::{CartLine, Clock, Severity, SystemClock, collect_options};
use yew::prelude::*;

use super::super::state::PickerState;
use crate::i18n::t;

/// Outcome of an add-to-cart press.
#[derive(Debug, Clone, PartialEq)]
pub enum AddToCartOutcome {
    Added {
        state: PickerState,
        line: CartLine,
    },
    /// Nothing active; the cart is untouched and a warning belongs on
    /// screen instead.
    NothingSelected,
}

/// Compute the next picker state for an add without UI side effects.
#[must_use]
pub fn add_to_cart_outcome(state: &PickerState, clock: &impl Clock) -> AddToCartOutcome {
    let Some(option) = state.selection.active_option(&state.catalog).cloned() else {
        return AddToCartOutcome::NothingSelected;
    };
    let options = collect_options(state, option.unit_count);
    let mut next = state.clone();
    let line = next.cart.add_line(&option, options, clock);
    AddToCartOutcome::Added { state: next, line }
}

pub fn handle_add_to_cart(
    state: &UseStateHandle<PickerState>,
    on_notice: &Callback<(Severity, String)>,
) {
    match add_to_cart_outcome(state, &SystemClock) {
        AddToCartOutcome::Added { state: next, line } => {
            #[cfg(target_arch = "wasm32")]
            log_cart_snapshot(&next.cart, &line);
            #[cfg(not(target_arch = "wasm32"))]
            let _ = line;
            state.set(next);
            on_notice.emit((Severity::Success, t("picker.alerts.added")));
        }
        AddToCartOutcome::NothingSelected => {
            on_notice.emit((Severity::Warning, t("picker.alerts.select_first")));
        }
    }
}

/// Devtools dump after each add: the full cart array first, then the
/// newest line.
#[cfg(target_arch = "wasm32")]
fn log_cart_snapshot(cart: &multibuy_core::Cart, line: &CartLine) {
    use wasm_bindgen::JsValue;

    let cart_js = serde_wasm_bindgen::to_value(cart.lines()).unwrap_or(JsValue::NULL);
    let line_js = serde_wasm_bindgen::to_value(line).unwrap_or(JsValue::NULL);
    web_sys::console::log_2(&JsValue::from_str("Cart Items Array:"), &cart_js);
    web_sys::console::log_2(&JsValue::from_str("Latest Cart Item:"), &line_js);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::product_picker::state::load_catalog;
    use multibuy_core::{Catalog, ChoiceKind};

    struct FixedClock;

    impl Clock for FixedClock {
        fn now_iso(&self) -> String {
            "2026-08-25T10:30:00.000Z".to_string()
        }
    }

    fn state() -> PickerState {
        PickerState::from_catalog(load_catalog().unwrap())
    }

    #[test]
    fn add_with_cleared_selection_reports_nothing_selected() {
        let mut state = state();
        state.selection.clear();
        let before = state.clone();
        let outcome = add_to_cart_outcome(&state, &FixedClock);
        assert_eq!(outcome, AddToCartOutcome::NothingSelected);
        assert_eq!(state, before, "a refused add must not touch state");
    }

    #[test]
    fn default_selection_adds_one_line_with_defaults() {
        let outcome = add_to_cart_outcome(&state(), &FixedClock);
        let AddToCartOutcome::Added { state: next, line } = outcome else {
            panic!("default selection should add");
        };
        assert_eq!(next.cart.len(), 1);
        assert_eq!(line.unit_count, 1);
        assert_eq!(line.price_cents, 1000);
        assert_eq!(line.sizes.get(&1).map(String::as_str), Some("S"));
        assert_eq!(line.colours.get(&1).map(String::as_str), Some("Black"));
        assert_eq!(line.created_at, "2026-08-25T10:30:00.000Z");
    }

    #[test]
    fn recorded_choices_land_in_the_cart_line() {
        let mut state = state();
        state.set_choice(1, 1, ChoiceKind::Size, "M".to_string());
        state.set_choice(1, 1, ChoiceKind::Colour, "Red".to_string());
        let AddToCartOutcome::Added { line, .. } = add_to_cart_outcome(&state, &FixedClock)
        else {
            panic!("selection should add");
        };
        assert_eq!(line.sizes.get(&1).map(String::as_str), Some("M"));
        assert_eq!(line.colours.get(&1).map(String::as_str), Some("Red"));
    }

    #[test]
    fn missing_chooser_kinds_stay_out_of_the_line() {
        let catalog = Catalog::new(
            load_catalog().unwrap().options().to_vec(),
            vec!["S".into(), "M".into()],
            vec![],
        )
        .unwrap();
        let state = PickerState::from_catalog(catalog);
        let AddToCartOutcome::Added { line, .. } = add_to_cart_outcome(&state, &FixedClock)
        else {
            panic!("selection should add");
        };
        assert_eq!(line.sizes.len(), 1);
        assert!(line.colours.is_empty());
    }

    #[test]
    fn each_add_appends_another_line() {
        let base = state();
        let AddToCartOutcome::Added { state: once, .. } = add_to_cart_outcome(&base, &FixedClock)
        else {
            panic!("first add");
        };
        let AddToCartOutcome::Added { state: twice, .. } = add_to_cart_outcome(&once, &FixedClock)
        else {
            panic!("second add");
        };
        assert_eq!(twice.cart.len(), 2);
    }
}
