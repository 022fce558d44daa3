//! Engraver WASM API
//!
//! The JavaScript-facing surface of the engraving core.
//!
//! # Module Structure
//!
//! - `helpers`: Shared utilities for serialization, validation, error handling, and logging
//! - `types`: Result shapes handed back to JavaScript
//! - `skyline`: `SkylineHandle` and `SkylinePairHandle` classes
//! - `breaking`: `breakLines` and friends

pub mod helpers;
pub mod types;
pub mod skyline;
pub mod breaking;

pub use skyline::{SkylineHandle, SkylinePairHandle};
pub use breaking::{break_columns, break_lines, break_lines_json, system_count_range};
pub use types::{BreakResult, LineSummary};
