//! Skyline handles for JavaScript
//!
//! Opaque classes wrapping [`Skyline`] and [`SkylinePair`] values. Boxes and
//! segments cross the boundary as plain objects (`{x: {lo, hi}, y: {lo, hi}}`
//! and `{start: {x, y}, end: {x, y}}`); axes are `0`/`1`, directions `-1`/`1`.

use wasm_bindgen::prelude::*;

use crate::api::helpers::*;
use crate::diagnostics::skylines::analyze_skyline;
use crate::errors::GeometryError;
use crate::geometry::{BoundingBox, Direction, Interval, Segment};
use crate::skyline::{Skyline, SkylinePair};
use crate::{wasm_log, wasm_warn};

fn require_opposite(a: &Skyline, b: &Skyline) -> Result<(), JsValue> {
    if a.direction() == b.direction() {
        let err = GeometryError::DirectionMismatch {
            left: a.direction(),
            right: b.direction(),
        };
        return Err(validation_error(err.to_string()));
    }
    Ok(())
}

#[wasm_bindgen]
pub struct SkylineHandle {
    inner: Skyline,
}

#[wasm_bindgen]
impl SkylineHandle {
    /// Build from an array of boxes
    #[wasm_bindgen(constructor)]
    pub fn new(boxes_js: JsValue, horizon_axis: u8, direction: i8) -> Result<SkylineHandle, JsValue> {
        let boxes: Vec<BoundingBox> = deserialize(boxes_js, "Invalid boxes")?;
        let axis = axis_from_u8(horizon_axis).map_err(validation_error)?;
        let dir = direction_from_i8(direction).map_err(validation_error)?;
        wasm_log!("SkylineHandle::new: {} boxes, {:?}", boxes.len(), dir);

        Ok(Self {
            inner: Skyline::from_boxes(&boxes, axis, dir),
        })
    }

    #[wasm_bindgen(js_name = fromSegments)]
    pub fn from_segments(
        segments_js: JsValue,
        horizon_axis: u8,
        direction: i8,
    ) -> Result<SkylineHandle, JsValue> {
        let segments: Vec<Segment> = deserialize(segments_js, "Invalid segments")?;
        let axis = axis_from_u8(horizon_axis).map_err(validation_error)?;
        let dir = direction_from_i8(direction).map_err(validation_error)?;

        Ok(Self {
            inner: Skyline::from_segments(&segments, axis, dir),
        })
    }

    pub fn merge(&mut self, other: &SkylineHandle) -> Result<(), JsValue> {
        if self.inner.direction() != other.inner.direction() {
            return Err(validation_error("Cannot merge skylines of different directions"));
        }
        self.inner.merge(&other.inner);
        Ok(())
    }

    pub fn insert(&mut self, box_js: JsValue, horizon_axis: u8) -> Result<(), JsValue> {
        let b: BoundingBox = deserialize(box_js, "Invalid box")?;
        let axis = axis_from_u8(horizon_axis).map_err(validation_error)?;
        self.inner.insert(&b, axis).map_err(|e| {
            wasm_warn!("insert rejected: {}", e);
            JsValue::from_str(&e.to_string())
        })
    }

    pub fn raise(&mut self, amount: f64) {
        self.inner.raise(amount);
    }

    pub fn shift(&mut self, amount: f64) {
        self.inner.shift(amount);
    }

    pub fn padded(&self, horizon_padding: f64) -> SkylineHandle {
        Self {
            inner: self.inner.padded(horizon_padding),
        }
    }

    pub fn distance(&self, other: &SkylineHandle, horizon_padding: f64) -> Result<f64, JsValue> {
        require_opposite(&self.inner, &other.inner)?;
        Ok(self.inner.distance(&other.inner, horizon_padding))
    }

    #[wasm_bindgen(js_name = touchingPoint)]
    pub fn touching_point(&self, other: &SkylineHandle, horizon_padding: f64) -> Result<f64, JsValue> {
        require_opposite(&self.inner, &other.inner)?;
        Ok(self.inner.touching_point(&other.inner, horizon_padding))
    }

    pub fn height(&self, x: f64) -> f64 {
        self.inner.height(x)
    }

    #[wasm_bindgen(js_name = maxHeight)]
    pub fn max_height(&self) -> f64 {
        self.inner.max_height()
    }

    #[wasm_bindgen(js_name = maxHeightPosition)]
    pub fn max_height_position(&self) -> f64 {
        self.inner.max_height_position()
    }

    #[wasm_bindgen(js_name = setMinimumHeight)]
    pub fn set_minimum_height(&mut self, h: f64) {
        self.inner.set_minimum_height(h);
    }

    #[wasm_bindgen(js_name = isEmpty)]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn left(&self) -> f64 {
        self.inner.left()
    }

    pub fn right(&self) -> f64 {
        self.inner.right()
    }

    #[wasm_bindgen(js_name = smallestShift)]
    pub fn smallest_shift(
        &self,
        other: &SkylineHandle,
        direction: i8,
        horizon_padding: f64,
        vertical_padding: f64,
    ) -> Result<f64, JsValue> {
        require_opposite(&self.inner, &other.inner)?;
        let dir = direction_from_i8(direction).map_err(validation_error)?;
        Ok(self
            .inner
            .smallest_shift(&other.inner, dir, horizon_padding, vertical_padding))
    }

    #[wasm_bindgen(js_name = areaBetween)]
    pub fn area_between(
        &self,
        other: &SkylineHandle,
        lo: f64,
        hi: f64,
        left_height: f64,
        right_height: f64,
        ratio: f64,
    ) -> Result<f64, JsValue> {
        require_opposite(&self.inner, &other.inner)?;
        Ok(self.inner.weighted_area_between(
            &other.inner,
            Interval::new(lo, hi),
            (left_height, right_height),
            ratio,
        ))
    }

    /// Building end points flattened as `[x0, y0, x1, y1, ...]`
    pub fn points(&self, horizon_axis: u8) -> Result<js_sys::Float64Array, JsValue> {
        let axis = axis_from_u8(horizon_axis).map_err(validation_error)?;
        let flat: Vec<f64> = self
            .inner
            .to_points(axis)
            .iter()
            .flat_map(|p| [p.x, p.y])
            .collect();
        Ok(js_sys::Float64Array::from(&flat[..]))
    }

    pub fn diagnostics(&self) -> Result<JsValue, JsValue> {
        serialize(&analyze_skyline(&self.inner), "Failed to serialize diagnostics")
    }
}

impl SkylineHandle {
    pub fn skyline(&self) -> &Skyline {
        &self.inner
    }
}

impl From<Skyline> for SkylineHandle {
    fn from(inner: Skyline) -> Self {
        Self { inner }
    }
}

#[wasm_bindgen]
pub struct SkylinePairHandle {
    inner: SkylinePair,
}

#[wasm_bindgen]
impl SkylinePairHandle {
    #[wasm_bindgen(constructor)]
    pub fn new(boxes_js: JsValue, horizon_padding: f64, horizon_axis: u8) -> Result<SkylinePairHandle, JsValue> {
        let boxes: Vec<BoundingBox> = deserialize(boxes_js, "Invalid boxes")?;
        let axis = axis_from_u8(horizon_axis).map_err(validation_error)?;
        wasm_log!("SkylinePairHandle::new: {} boxes", boxes.len());

        Ok(Self {
            inner: SkylinePair::from_boxes(&boxes, horizon_padding, axis),
        })
    }

    pub fn merge(&mut self, other: &SkylinePairHandle) {
        self.inner.merge(&other.inner);
    }

    pub fn raise(&mut self, amount: f64) {
        self.inner.raise(amount);
    }

    pub fn shift(&mut self, amount: f64) {
        self.inner.shift(amount);
    }

    pub fn padded(&self, horizon_padding: f64) -> SkylinePairHandle {
        Self {
            inner: self.inner.padded(horizon_padding),
        }
    }

    #[wasm_bindgen(js_name = isEmpty)]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    #[wasm_bindgen(js_name = smallestShift)]
    pub fn smallest_shift(
        &self,
        other: &SkylinePairHandle,
        direction: i8,
        horizon_padding: f64,
        vertical_padding: f64,
    ) -> Result<f64, JsValue> {
        let dir = direction_from_i8(direction).map_err(validation_error)?;
        Ok(self
            .inner
            .smallest_shift(&other.inner, dir, horizon_padding, vertical_padding))
    }

    pub fn up(&self) -> SkylineHandle {
        SkylineHandle::from(self.inner[Direction::Up].clone())
    }

    pub fn down(&self) -> SkylineHandle {
        SkylineHandle::from(self.inner[Direction::Down].clone())
    }
}

impl SkylinePairHandle {
    pub fn pair(&self) -> &SkylinePair {
        &self.inner
    }
}
