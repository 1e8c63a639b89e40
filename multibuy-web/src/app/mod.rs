//! Page shell wiring the header, the product picker, and the notice area
//! to one shared [`AppState`].

pub mod state;
mod test_bridge;

use multibuy_core::{Notice, Severity};
use yew::prelude::*;

use crate::a11y;
use crate::components::header::Header;
use crate::components::notice_host::NoticeHost;
use crate::components::product_picker::ProductPicker;

pub use state::{AppState, use_app_state};

#[function_component(App)]
pub fn app() -> Html {
    let app_state = use_app_state();
    test_bridge::use_test_bridge(&app_state);

    let on_notice = {
        let state = app_state.clone();
        Callback::from(move |(severity, message): (Severity, String)| {
            let id = state.next_notice_id();
            #[cfg(target_arch = "wasm32")]
            a11y::set_status(&message);
            state.notice.set(Some(Notice::new(id, message, severity)));
        })
    };

    // A dismissal that raced a superseding notice carries the old id
    // and is dropped here.
    let on_dismissed = {
        let state = app_state.clone();
        Callback::from(move |id: u64| {
            if state.notice.as_ref().is_some_and(|notice| notice.id == id) {
                state.notice.set(None);
            }
        })
    };

    let on_lang_change = {
        let state = app_state.clone();
        Callback::from(move |lang: String| state.current_language.set(lang))
    };

    let notice = (*app_state.notice).clone();

    html! {
        <>
            <style>{ a11y::visible_focus_css() }</style>
            <div class="container">
                <Header
                    current_lang={(*app_state.current_language).clone()}
                    on_lang_change={on_lang_change}
                />
                <ProductPicker state={app_state.picker.clone()} on_notice={on_notice} />
                <span id="picker-status" class="sr-only" aria-live="polite"></span>
                <NoticeHost notice={notice} on_dismissed={on_dismissed} />
            </div>
        </>
    }
}
