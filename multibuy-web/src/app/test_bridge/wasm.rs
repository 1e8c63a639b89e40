use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use yew::prelude::*;

use super::shared;
use crate::app::state::AppState;
use crate::components::product_picker::{SelectUnitOutcome, select_unit_outcome};

struct BridgeBindings {
    _state: Closure<dyn FnMut() -> JsValue>,
    _select: Closure<dyn FnMut(JsValue)>,
    _clear_selection: Closure<dyn FnMut()>,
    _last_line: Closure<dyn FnMut() -> JsValue>,
}

impl BridgeBindings {
    fn keep(&self) {
        let _ = (
            &self._state,
            &self._select,
            &self._clear_selection,
            &self._last_line,
        );
    }
}

fn test_mode_enabled() -> bool {
    web_sys::window()
        .and_then(|win| win.location().search().ok())
        .map(|search| search.contains("test=1"))
        .unwrap_or(false)
}

fn apply_select(state: &AppState, unit_count: u8) {
    if let SelectUnitOutcome::Updated { state: next, .. } =
        select_unit_outcome(&state.picker, unit_count)
    {
        state.picker.set(next);
    }
}

fn apply_clear(state: &AppState) {
    let mut next = (*state.picker).clone();
    next.selection.clear();
    state.picker.set(next);
}

// State handles captured when the bridge is installed go stale after
// the next render; every closure reads through `latest` instead, which
// the hook refreshes on each render.
fn build_bridge(latest: &Rc<RefCell<AppState>>) -> BridgeBindings {
    let state_latest = latest.clone();
    let state_fn = Closure::wrap(Box::new(move || {
        let state = state_latest.borrow().clone();
        serde_wasm_bindgen::to_value(&shared::snapshot(&state.picker)).unwrap_or(JsValue::NULL)
    }) as Box<dyn FnMut() -> JsValue>);

    let select_latest = latest.clone();
    let select = Closure::wrap(Box::new(move |value: JsValue| {
        if let Some(unit) = value.as_f64().map(|v| v as u8) {
            let state = select_latest.borrow().clone();
            apply_select(&state, unit);
        }
    }) as Box<dyn FnMut(JsValue)>);

    let clear_latest = latest.clone();
    let clear_selection = Closure::wrap(Box::new(move || {
        let state = clear_latest.borrow().clone();
        apply_clear(&state);
    }) as Box<dyn FnMut()>);

    let line_latest = latest.clone();
    let last_line = Closure::wrap(Box::new(move || {
        let state = line_latest.borrow().clone();
        serde_wasm_bindgen::to_value(&state.picker.cart.last()).unwrap_or(JsValue::NULL)
    }) as Box<dyn FnMut() -> JsValue>);

    BridgeBindings {
        _state: state_fn,
        _select: select,
        _clear_selection: clear_selection,
        _last_line: last_line,
    }
}

fn attach_bridge(bindings: &BridgeBindings) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let bridge = js_sys::Object::new();
    let _ = js_sys::Reflect::set(
        &bridge,
        &JsValue::from_str("state"),
        bindings._state.as_ref().unchecked_ref(),
    );
    let _ = js_sys::Reflect::set(
        &bridge,
        &JsValue::from_str("select"),
        bindings._select.as_ref().unchecked_ref(),
    );
    let _ = js_sys::Reflect::set(
        &bridge,
        &JsValue::from_str("clearSelection"),
        bindings._clear_selection.as_ref().unchecked_ref(),
    );
    let _ = js_sys::Reflect::set(
        &bridge,
        &JsValue::from_str("lastLine"),
        bindings._last_line.as_ref().unchecked_ref(),
    );
    let _ = js_sys::Reflect::set(&window, &JsValue::from_str("__multibuyTest"), &bridge);
}

#[hook]
pub fn use_test_bridge(app_state: &AppState) {
    let bridge_handle = use_mut_ref(|| None::<BridgeBindings>);
    let installed = use_mut_ref(|| false);
    let latest = use_mut_ref(|| app_state.clone());
    *latest.borrow_mut() = app_state.clone();

    use_effect_with((), move |()| {
        let cleanup = || {};
        if *installed.borrow() {
            return cleanup;
        }
        *installed.borrow_mut() = true;
        if test_mode_enabled() {
            let bindings = build_bridge(&latest);
            attach_bridge(&bindings);
            bindings.keep();
            *bridge_handle.borrow_mut() = Some(bindings);
        }
        cleanup
    });
}
