//! Mood trend charting.
//!
//! Turns a history snapshot into plot points and a polyline the frontend
//! draws as-is. The projection is pure: the same snapshot and config always
//! yield bit-identical coordinates.

mod projector;
mod types;

pub use projector::project_trend;
pub use types::*;
