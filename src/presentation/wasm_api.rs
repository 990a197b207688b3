use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::*;

use crate::application::ZoomController;
use crate::domain::viewport::ZoomOptions;

/// JavaScript face of the zoom controller.
///
/// ```js
/// const zoom = new ZoomController({ maxZoom: 4, containerSelector: '#gallery' });
/// if (zoom.init()) zoom.setZoomLevel(2);
/// ```
#[wasm_bindgen(js_name = ZoomController)]
pub struct ZoomControllerApi {
    controller: ZoomController,
}

#[wasm_bindgen(js_class = ZoomController)]
impl ZoomControllerApi {
    /// Options are optional; unknown keys are ignored.
    #[wasm_bindgen(constructor)]
    pub fn new(options: JsValue) -> Result<ZoomControllerApi, JsValue> {
        let options = parse_options(options)?;
        Ok(Self { controller: ZoomController::new(options) })
    }

    pub fn init(&mut self) -> bool {
        self.controller.init()
    }

    pub fn destroy(&mut self) {
        self.controller.destroy();
    }

    #[wasm_bindgen(js_name = getZoomLevel)]
    pub fn get_zoom_level(&self) -> f64 {
        self.controller.zoom_level()
    }

    #[wasm_bindgen(js_name = setZoomLevel)]
    pub fn set_zoom_level(&mut self, level: f64) {
        self.controller.set_zoom_level(level);
    }

    pub fn reset(&mut self) {
        self.controller.reset();
    }

    #[wasm_bindgen(js_name = zoomIn)]
    pub fn zoom_in(&mut self) {
        self.controller.zoom_in();
    }

    #[wasm_bindgen(js_name = zoomOut)]
    pub fn zoom_out(&mut self) {
        self.controller.zoom_out();
    }

    #[wasm_bindgen(js_name = isDragging)]
    pub fn is_dragging(&self) -> bool {
        self.controller.is_dragging()
    }

    /// Current CSS transform of the content node, `undefined` while inert
    #[wasm_bindgen(js_name = transformCss)]
    pub fn transform_css(&self) -> Option<String> {
        self.controller.transform().map(|t| t.css_transform())
    }
}

/// `undefined` and `null` mean "all defaults".
pub fn parse_options(value: JsValue) -> Result<ZoomOptions, JsValue> {
    if value.is_undefined() || value.is_null() {
        return Ok(ZoomOptions::default());
    }
    serde_wasm_bindgen::from_value(value)
        .map_err(|e| JsValue::from_str(&format!("Invalid zoom options: {}", e)))
}
