use tracing::debug;

use crate::core::{Dataset, DateScale, Extrema, ValueScale, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::feed::DataSource;
use crate::interaction::TooltipState;
use crate::render::Renderer;

use super::ChartEngineConfig;

/// Main orchestration facade consumed by host applications.
///
/// `ChartEngine` owns the immutable dataset and both scales, the tooltip
/// state, and the renderer that receives built frames.
pub struct ChartEngine<R: Renderer> {
    pub(super) renderer: R,
    pub(super) config: ChartEngineConfig,
    pub(super) dataset: Dataset,
    pub(super) extrema: Extrema,
    pub(super) viewport: Viewport,
    pub(super) value_scale: ValueScale,
    pub(super) date_scale: DateScale,
    pub(super) tooltip: TooltipState,
}

impl<R: Renderer> ChartEngine<R> {
    /// Creates a fully initialized engine for a non-empty dataset.
    ///
    /// Canvas width is one bar stride per observation; height comes from
    /// config.
    pub fn new(renderer: R, config: ChartEngineConfig, dataset: Dataset) -> ChartResult<Self> {
        config.validate()?;
        let extrema = dataset.require_extrema()?;

        let width = config.bar_stride_px() * dataset.len() as f64;
        let height = config.graph_height_px;
        let viewport = Viewport::new(width.ceil() as u32, height.ceil() as u32);
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }

        let value_scale =
            ValueScale::from_extrema(extrema, height, config.padding_y_px, config.padding_y_px)?;
        let date_scale = DateScale::from_extrema(extrema, width, config.padding_x_px)?;
        debug!(
            bars = dataset.len(),
            width = viewport.width,
            height = viewport.height,
            "chart engine initialized"
        );

        Ok(Self {
            renderer,
            config,
            dataset,
            extrema,
            viewport,
            value_scale,
            date_scale,
            tooltip: TooltipState::default(),
        })
    }

    /// Loads the dataset once from `source`, then builds the engine.
    pub fn from_source<S: DataSource + ?Sized>(
        renderer: R,
        config: ChartEngineConfig,
        source: &S,
    ) -> ChartResult<Self> {
        let dataset = source.load(config.validation)?;
        Self::new(renderer, config, dataset)
    }

    #[must_use]
    pub fn config(&self) -> &ChartEngineConfig {
        &self.config
    }

    #[must_use]
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    #[must_use]
    pub fn extrema(&self) -> Extrema {
        self.extrema
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn value_scale(&self) -> ValueScale {
        self.value_scale
    }

    #[must_use]
    pub fn date_scale(&self) -> DateScale {
        self.date_scale
    }

    #[must_use]
    pub fn tooltip(&self) -> &TooltipState {
        &self.tooltip
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Renders the settled frame, with every transition run to completion.
    pub fn render(&mut self) -> ChartResult<()> {
        self.render_at(f64::INFINITY)
    }

    /// Renders the frame as it looks at `now_ms` on the event clock.
    pub fn render_at(&mut self, now_ms: f64) -> ChartResult<()> {
        let frame = self.build_render_frame_at(now_ms)?;
        self.renderer.render(&frame)
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
