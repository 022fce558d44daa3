//! Line breaking API
//!
//! `breakLines` takes an array of column objects (see [`Column`]), an
//! optional partial config and a line width, and returns a [`BreakResult`].

use wasm_bindgen::prelude::*;

use crate::api::helpers::*;
use crate::api::types::BreakResult;
use crate::breaking::{BreakingConfig, Column, ConstrainedBreaking, LineBreaking, SpringSpacer};
use crate::diagnostics::columns::analyze_columns;
use crate::diagnostics::{DiagnosticMark, Diagnostics};
use crate::errors::BreakingError;
use crate::{wasm_info, wasm_warn};

/// Break columns into lines, natively
///
/// With `system_count` the breaking uses exactly that many lines; without it
/// the line count with the fewest demerits wins.
pub fn break_columns(
    columns: &[Column],
    config: BreakingConfig,
    line_width: f64,
    system_count: Option<usize>,
) -> Result<(LineBreaking, Vec<DiagnosticMark>), BreakingError> {
    let mut diagnostics = Diagnostics::new();
    diagnostics.extend(analyze_columns(columns, line_width));
    for mark in &diagnostics.marks {
        mark.log();
    }
    if diagnostics.has_errors() {
        log::warn!(
            "Breaking {} columns with invalid input; lines through bad columns are infeasible",
            columns.len()
        );
    }

    let spacer = SpringSpacer::new(columns, line_width);
    let mut breaking = ConstrainedBreaking::new(&spacer, config);
    let solution = match system_count {
        Some(systems) => breaking.solve(0, 1, systems)?,
        None => breaking.best_solution(0, 1)?,
    };
    Ok((solution, diagnostics.marks))
}

fn config_from_js(config_js: JsValue) -> Result<BreakingConfig, JsValue> {
    if config_js.is_undefined() || config_js.is_null() {
        return Ok(BreakingConfig::default());
    }
    deserialize(config_js, "Invalid breaking config")
}

#[wasm_bindgen(js_name = breakLines)]
pub fn break_lines(
    columns_js: JsValue,
    config_js: JsValue,
    line_width: f64,
    system_count: Option<usize>,
) -> Result<JsValue, JsValue> {
    validate_line_width(line_width).map_err(validation_error)?;
    let columns: Vec<Column> = deserialize(columns_js, "Invalid columns")?;
    let config = config_from_js(config_js)?;
    wasm_info!(
        "breakLines: {} columns, width {}, systems {:?}",
        columns.len(),
        line_width,
        system_count
    );

    let (solution, marks) = break_columns(&columns, config, line_width, system_count)
        .map_err(|e| {
            wasm_warn!("breakLines failed: {}", e);
            JsValue::from_str(&e.to_string())
        })?;

    wasm_info!(
        "breakLines: {} lines, demerits {}",
        solution.system_count(),
        solution.demerits
    );
    serialize(&BreakResult::new(&solution, marks), "Failed to serialize break result")
}

/// Same as `breakLines`, over JSON strings
#[wasm_bindgen(js_name = breakLinesJson)]
pub fn break_lines_json(
    columns_json: &str,
    config_json: &str,
    line_width: f64,
    system_count: Option<usize>,
) -> Result<String, JsValue> {
    validate_line_width(line_width).map_err(validation_error)?;
    let columns: Vec<Column> = serde_json::from_str(columns_json)
        .map_err(|e| validation_error(format!("Invalid columns: {}", e)))?;
    let config = if config_json.trim().is_empty() {
        BreakingConfig::default()
    } else {
        BreakingConfig::from_json(config_json).map_err(|e| validation_error(e.to_string()))?
    };

    let (solution, marks) = break_columns(&columns, config, line_width, system_count)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    serde_json::to_string(&BreakResult::new(&solution, marks))
        .map_err(|e| validation_error(format!("Failed to serialize break result: {}", e)))
}

/// Fewest and most lines any feasible breaking uses, as `[min, max]`
#[wasm_bindgen(js_name = systemCountRange)]
pub fn system_count_range(
    columns_js: JsValue,
    config_js: JsValue,
    line_width: f64,
) -> Result<js_sys::Uint32Array, JsValue> {
    validate_line_width(line_width).map_err(validation_error)?;
    let columns: Vec<Column> = deserialize(columns_js, "Invalid columns")?;
    let config = config_from_js(config_js)?;

    let spacer = SpringSpacer::new(&columns, line_width);
    let breaking = ConstrainedBreaking::new(&spacer, config);
    match (breaking.min_system_count(0, 1), breaking.max_system_count(0, 1)) {
        (Some(min), Some(max)) => Ok(js_sys::Uint32Array::from(&[min as u32, max as u32][..])),
        _ => Err(validation_error("No feasible line breaking")),
    }
}
