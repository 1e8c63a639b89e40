use serde::Serialize;

use crate::components::product_picker::PickerState;

/// Snapshot returned by `window.__multibuyTest.state()`.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct BridgeState {
    pub selected: Option<u8>,
    pub total_cents: i64,
    pub cart_len: usize,
}

/// What the page currently shows, reduced to the fields a driver
/// asserts on.
pub(super) fn snapshot(picker: &PickerState) -> BridgeState {
    let total_cents = picker
        .selection
        .active_option(&picker.catalog)
        .map_or(0, |option| option.price_cents);
    BridgeState {
        selected: picker.selection.active_unit(),
        total_cents,
        cart_len: picker.cart.len(),
    }
}
