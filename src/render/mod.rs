mod frame;
mod null_renderer;
mod primitives;
mod svg_backend;

pub use frame::{AxisGroup, AxisOrientation, AxisTick, RenderFrame, TooltipOverlay};
pub use null_renderer::NullRenderer;
pub use primitives::{Color, LinePrimitive, RectPrimitive, TextHAlign, TextPrimitive};
pub use svg_backend::{BAR_CLASS, SVG_ROOT_CLASS, SvgRenderStats, SvgRenderer, TOOLTIP_ID};

use crate::error::ChartResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `RenderFrame` so
/// drawing code remains isolated from chart domain and interaction logic.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;
}
