//! Engraver WASM Module
//!
//! Layout core for music engraving: skylines describing the vertical
//! silhouette of placed objects, and a line breaker splitting a column
//! sequence into lines of even density.

pub mod api;
pub mod breaking;
pub mod diagnostics;
pub mod errors;
pub mod geometry;
pub mod skyline;

// Re-export commonly used types
pub use breaking::{BreakingConfig, Column, ConstrainedBreaking, LineBreaking, SpringSpacer};
pub use errors::{BreakingError, ConfigError, GeometryError};
pub use geometry::{Axis, BoundingBox, Direction, Interval, Offset, Segment};
pub use skyline::{Skyline, SkylinePair};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    // Fails only when a logger is already installed.
    #[cfg(feature = "console_log")]
    let _ = console_log::init_with_level(log::Level::Debug);

    log::info!("Engraver WASM module initialized");
}
