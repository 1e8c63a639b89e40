use std::cell::RefCell;
use std::rc::Rc;

use multibuy_core::Notice;
use yew::prelude::*;

use crate::components::product_picker::PickerState;

/// Handles for everything the page tracks across renders.
#[derive(Clone)]
pub struct AppState {
    pub picker: UseStateHandle<PickerState>,
    /// The one notice currently on the page, if any.
    pub notice: UseStateHandle<Option<Notice>>,
    pub notice_seq: Rc<RefCell<u64>>,
    pub current_language: UseStateHandle<String>,
}

#[hook]
pub fn use_app_state() -> AppState {
    AppState {
        picker: use_state(PickerState::boot),
        notice: use_state(|| None::<Notice>),
        notice_seq: use_mut_ref(|| 0_u64),
        current_language: use_state(crate::i18n::current_lang),
    }
}

impl AppState {
    /// Allocate the id for the next notice. Ids only grow, so a timer
    /// fired for an already superseded notice can be told apart from
    /// the current one.
    pub fn next_notice_id(&self) -> u64 {
        let mut seq = self.notice_seq.borrow_mut();
        *seq += 1;
        *seq
    }
}
