use multibuy_core::ChoiceKind;
use yew::prelude::*;

use super::super::state::PickerState;

/// A chooser change bubbling up from one item row.
#[derive(Debug, Clone, PartialEq)]
pub struct ChoiceChange {
    pub unit_count: u8,
    pub item: u8,
    pub kind: ChoiceKind,
    pub value: String,
}

/// Record a chooser value. The choice belongs to its owning box, so
/// switching bundles and back keeps it.
pub fn handle_choice_change(state: &UseStateHandle<PickerState>, change: ChoiceChange) {
    let mut next = (**state).clone();
    next.set_choice(change.unit_count, change.item, change.kind, change.value);
    state.set(next);
}
