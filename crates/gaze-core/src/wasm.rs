//! Browser bindings
//!
//! The page runs the face landmark model and hands each frame's first face
//! over as a flat `[x0, y0, x1, y1, ...]` array; an empty array means no face.

use wasm_bindgen::prelude::*;

use crate::config::GazeConfig;
use crate::controller::GazeController;
use crate::landmarks::LandmarkFrame;

#[wasm_bindgen]
pub struct GazeTracker {
    inner: GazeController,
}

#[wasm_bindgen]
impl GazeTracker {
    /// Creates a tracker from a `GazeConfig` object; `undefined` uses the defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<GazeTracker, JsValue> {
        let config: GazeConfig = if config.is_undefined() || config.is_null() {
            GazeConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)?
        };
        let inner =
            GazeController::new(&config).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self { inner })
    }

    /// Number of landmarks each frame must carry for the configured eye layout.
    #[wasm_bindgen(js_name = "requiredLandmarks")]
    pub fn required_landmarks(&self) -> usize {
        self.inner.layout().required_landmarks()
    }

    /// Processes one frame; `timestamp` is in seconds. Returns a `FrameOutput` object.
    pub fn process(&mut self, landmarks: &[f64], timestamp: f64) -> JsValue {
        let frame = (!landmarks.is_empty()).then(|| LandmarkFrame::from_flat(landmarks));
        let output = self.inner.process(frame.as_ref(), timestamp);
        serde_wasm_bindgen::to_value(&output).unwrap_or(JsValue::NULL)
    }

    #[wasm_bindgen(js_name = "getCursorX")]
    pub fn cursor_x(&self) -> i32 {
        self.inner.cursor().x
    }

    #[wasm_bindgen(js_name = "getCursorY")]
    pub fn cursor_y(&self) -> i32 {
        self.inner.cursor().y
    }

    /// Target regions as an array of `TargetRegion` objects, for drawing.
    #[wasm_bindgen(js_name = "getTargets")]
    pub fn targets(&self) -> JsValue {
        serde_wasm_bindgen::to_value(self.inner.targets().regions()).unwrap_or(JsValue::NULL)
    }
}
