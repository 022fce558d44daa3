//! Skyline engine
//!
//! Piecewise-linear silhouettes used to keep layout objects from colliding.
//!
//! - `building`: one linear piece and the tolerance `EPS`
//! - `skyline`: construction, merge, distance and height queries
//! - `shift`: horizontal clearance and overlap area
//! - `pair`: the up and down silhouettes of one object

pub mod building;
pub mod pair;
mod shift;
#[allow(clippy::module_inception)]
pub mod skyline;

pub use building::{Building, EPS};
pub use pair::SkylinePair;
pub use skyline::Skyline;
