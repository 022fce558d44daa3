//! Line breaking
//!
//! - `line_shape`, `line_details`: what the breaker knows about one line
//! - `spacer`: the span-cost provider seam and a spring-based provider
//! - `constrained`: the dynamic program choosing breakpoints
//! - `matrix`, `config`: supporting table and settings

pub mod config;
pub mod constrained;
pub mod line_details;
pub mod line_shape;
pub mod matrix;
pub mod spacer;

pub use config::BreakingConfig;
pub use constrained::{combine_demerits, BreakNode, ConstrainedBreaking, LineBreaking};
pub use line_details::{compress_lines, BreakPermission, LineDetails};
pub use line_shape::LineShape;
pub use matrix::Matrix;
pub use spacer::{Breakpoint, Column, SpanCost, SpanCostProvider, SpringSpacer};
