use multibuy_core::SelectOutcome;
use yew::prelude::*;

use super::super::state::PickerState;

/// Outcome of applying a box or radio selection to picker state.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectUnitOutcome {
    Updated {
        state: PickerState,
        price_cents: i64,
    },
    Ignored,
}

/// Compute the next picker state for a selection without UI side
/// effects. Unknown keys leave everything untouched.
#[must_use]
pub fn select_unit_outcome(state: &PickerState, unit_count: u8) -> SelectUnitOutcome {
    let mut next = state.clone();
    match next.selection.select(&next.catalog, unit_count) {
        SelectOutcome::Applied { price_cents, .. } => SelectUnitOutcome::Updated {
            state: next,
            price_cents,
        },
        SelectOutcome::Ignored => SelectUnitOutcome::Ignored,
    }
}

pub fn handle_select_unit(state: &UseStateHandle<PickerState>, unit_count: u8) {
    match select_unit_outcome(state, unit_count) {
        SelectUnitOutcome::Updated { state: next, .. } => state.set(next),
        SelectUnitOutcome::Ignored => {}
    }
}
