//! gdp-chart: headless bar chart of quarterly GDP.
//!
//! The crate fetches the series once, maps it through two linear scales and
//! builds a backend-agnostic frame (bars, axes, caption, tooltip overlay).
//! Pointer events drive an explicit tooltip state machine, so hover
//! behavior is testable without a display surface.

pub mod api;
pub mod core;
pub mod error;
pub mod feed;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{ChartEngine, ChartEngineConfig};
pub use error::{ChartError, ChartResult};
