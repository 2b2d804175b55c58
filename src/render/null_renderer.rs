use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer};

/// No-op renderer used by tests and headless engine usage.
///
/// It still validates frame content so tests can catch invalid geometry
/// without a real output surface.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_bar_count: usize,
    pub last_axis_count: usize,
    pub last_tick_line_count: usize,
    pub last_text_count: usize,
    pub last_tooltip_opacity: f64,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.last_bar_count = frame.bars.len();
        self.last_axis_count = frame.axes.len();
        self.last_tick_line_count = frame.axes.iter().map(|axis| axis.ticks.len()).sum();
        self.last_text_count = frame.texts.len();
        self.last_tooltip_opacity = frame.tooltip.opacity;
        Ok(())
    }
}
