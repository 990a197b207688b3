#![cfg(not(target_arch = "wasm32"))]

use page_zoom_wasm::domain::viewport::{ContainerSize, ViewportTransform, ZoomConfig, ZoomState};

#[test]
fn identity_transform_css() {
    insta::assert_snapshot!(
        ViewportTransform::identity().css_transform(),
        @"translate(0px, 0px) scale(1)"
    );
}

#[test]
fn zoomed_transform_css() {
    insta::assert_snapshot!(
        ViewportTransform::new(1.9, -180.0, -135.0).css_transform(),
        @"translate(-180px, -135px) scale(1.9)"
    );
    insta::assert_snapshot!(
        ViewportTransform::new(2.5, -12.5, -0.25).css_transform(),
        @"translate(-12.5px, -0.25px) scale(2.5)"
    );
}

#[test]
fn default_transition_css() {
    insta::assert_snapshot!(ZoomConfig::default().transition_css(), @"transform 0.1s ease-out");
}

#[test]
fn set_zoom_level_renders_in_place() {
    let size = ContainerSize::new(400.0, 300.0);
    let mut state = ZoomState::new(ZoomConfig::default());
    state.set_transform(ViewportTransform::new(3.0, -700.0, -500.0), size);

    // Shrinking the scale only re-clamps the translation; no anchor is tracked.
    state.set_zoom_level(2.0, size);
    insta::assert_snapshot!(state.transform().css_transform(), @"translate(-400px, -300px) scale(2)");

    state.set_zoom_level(10.0, size);
    insta::assert_snapshot!(state.transform().css_transform(), @"translate(-400px, -300px) scale(3)");

    state.set_zoom_level(0.2, size);
    insta::assert_snapshot!(state.transform().css_transform(), @"translate(0px, 0px) scale(1)");
}
