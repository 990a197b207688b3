#![cfg(target_arch = "wasm32")]

use page_zoom_wasm::infrastructure::dom::ScrollRestorer;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys::{HtmlElement, Window};

wasm_bindgen_test_configure!(run_in_browser);

fn window() -> Window {
    web_sys::window().unwrap()
}

/// Make the page tall enough to scroll; the returned spacer is removed by the caller.
fn tall_page() -> HtmlElement {
    let document = window().document().unwrap();
    let spacer = document
        .create_element("div")
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap();
    spacer.style().set_property("height", "5000px").unwrap();
    document.body().unwrap().append_child(&spacer).unwrap();
    spacer
}

/// Resolves on the animation frame after any callbacks already requested.
async fn next_frame() {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        window().request_animation_frame(&resolve).unwrap();
    });
    JsFuture::from(promise).await.unwrap();
}

#[wasm_bindgen_test]
async fn scroll_offset_is_restored_on_next_frame() {
    let spacer = tall_page();
    window().scroll_to_with_x_and_y(0.0, 200.0);

    let mut restorer = ScrollRestorer::new();
    restorer.schedule();
    assert!(restorer.is_pending());

    // What the browser does with an unsuppressed wheel event.
    window().scroll_to_with_x_and_y(0.0, 600.0);
    assert_eq!(window().scroll_y().unwrap(), 600.0);

    next_frame().await;
    assert_eq!(window().scroll_y().unwrap(), 200.0);

    window().scroll_to_with_x_and_y(0.0, 0.0);
    spacer.remove();
}

#[wasm_bindgen_test]
async fn cancelled_restore_leaves_scroll_alone() {
    let spacer = tall_page();
    window().scroll_to_with_x_and_y(0.0, 200.0);

    let mut restorer = ScrollRestorer::new();
    restorer.schedule();
    restorer.cancel();
    assert!(!restorer.is_pending());

    window().scroll_to_with_x_and_y(0.0, 600.0);
    next_frame().await;
    assert_eq!(window().scroll_y().unwrap(), 600.0);

    window().scroll_to_with_x_and_y(0.0, 0.0);
    spacer.remove();
}
