#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::rc::Rc;

use js_sys::Promise;
use multibuy_web::dom;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn sleep(ms: i32) -> JsFuture {
    JsFuture::from(Promise::new(&mut |resolve, _reject| {
        web_sys::window()
            .expect("window")
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
            .expect("set_timeout");
    }))
}

#[wasm_bindgen_test]
async fn scheduled_timeout_fires() {
    let fired = Rc::new(Cell::new(false));
    let flag = fired.clone();
    let handle = dom::schedule_timeout(5, move || flag.set(true));
    assert!(handle.is_some());
    let _ = sleep(30).await;
    assert!(fired.get());
}

#[wasm_bindgen_test]
async fn cancelled_timeout_never_fires() {
    let fired = Rc::new(Cell::new(false));
    let flag = fired.clone();
    let handle = dom::schedule_timeout(5, move || flag.set(true)).expect("timer should schedule");
    dom::cancel_timeout(handle);
    let _ = sleep(30).await;
    assert!(!fired.get());
}
