use std::collections::BTreeMap;

use yew::prelude::*;

use super::super::state::PickerState;
use crate::i18n;

/// Running total, the add trigger, and the cart count line.
pub fn render_summary(
    state: &UseStateHandle<PickerState>,
    pressed: bool,
    on_add: &Callback<MouseEvent>,
) -> Html {
    let total_cents = state
        .selection
        .active_option(&state.catalog)
        .map_or(0, |option| option.price_cents);
    let cart_len = state.cart.len().to_string();
    let cart_line = i18n::tr("picker.cart_count", Some(&{
        let mut vars = BTreeMap::new();
        vars.insert("count", cart_len.as_str());
        vars
    }));

    html! {
        <div class="picker-summary">
            <div class="total-row">
                <span class="total-label">{ i18n::t("picker.total") }</span>
                <span id="total-amount" aria-live="polite">
                    { i18n::fmt_currency(total_cents) }
                </span>
            </div>
            <button
                type="button"
                class={classes!("add-to-cart-btn", pressed.then_some("pressed"))}
                onclick={on_add.clone()}
            >
                { i18n::t("picker.add") }
            </button>
            <p class="cart-count" data-cart-count={cart_len}>{ cart_line }</p>
        </div>
    }
}
