//! Product bundle picker - option boxes, per-item choosers, and add-to-cart.
//!
//! One state value renders both the boxes and their radio controls, so
//! the two representations cannot fall out of sync.

mod handlers;
mod state;
mod view;

pub use handlers::{
    AddToCartOutcome, ChoiceChange, SelectUnitOutcome, add_to_cart_outcome, select_unit_outcome,
};
pub use state::PickerState;

use multibuy_core::Severity;
use yew::prelude::*;

use self::handlers::{handle_add_to_cart, handle_choice_change, handle_select_unit};
use self::view::{option_box::render_option_box, summary::render_summary};
use crate::i18n;

/// How long the add button stays visually depressed after a press.
pub const PRESS_FEEDBACK_MS: i32 = 150;

#[derive(Properties, PartialEq)]
pub struct ProductPickerProps {
    pub state: UseStateHandle<PickerState>,
    /// Raised for every shopper-facing message; the page turns these
    /// into transient notices.
    pub on_notice: Callback<(Severity, String)>,
}

#[function_component(ProductPicker)]
pub fn product_picker(props: &ProductPickerProps) -> Html {
    let state = props.state.clone();
    let pressed = use_state(|| false);

    let on_select = {
        let state = state.clone();
        Callback::from(move |unit_count: u8| handle_select_unit(&state, unit_count))
    };

    let on_choice = {
        let state = state.clone();
        Callback::from(move |change: ChoiceChange| handle_choice_change(&state, change))
    };

    let on_add = {
        let state = state.clone();
        let on_notice = props.on_notice.clone();
        let pressed = pressed.clone();
        Callback::from(move |_e: MouseEvent| {
            press_feedback(&pressed);
            handle_add_to_cart(&state, &on_notice);
        })
    };

    if state.catalog.is_empty() {
        return html! {
            <div class="product-picker">
                <p class="picker-empty">{ i18n::t("picker.empty") }</p>
            </div>
        };
    }

    html! {
        <div class="product-picker">
            <h2 class="picker-title">{ i18n::t("picker.title") }</h2>
            <div class="product-boxes" role="radiogroup" aria-label={i18n::t("picker.title")}>
                { for state
                    .catalog
                    .options()
                    .iter()
                    .map(|option| render_option_box(&state, option, &on_select, &on_choice)) }
            </div>
            { render_summary(&state, *pressed, &on_add) }
        </div>
    }
}

/// Briefly depress the add button after a press.
fn press_feedback(pressed: &UseStateHandle<bool>) {
    pressed.set(true);
    #[cfg(target_arch = "wasm32")]
    {
        let pressed = pressed.clone();
        let _ = crate::dom::schedule_timeout(PRESS_FEEDBACK_MS, move || pressed.set(false));
    }
}
