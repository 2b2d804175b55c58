//! Pointer-driven tooltip state, independent of any display surface.
//!
//! Hosts translate their own pointer callbacks into [`PointerEvent`]s and
//! hand them to the engine, which drives [`TooltipState`] transitions.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TooltipPhase {
    Hidden,
    Visible,
}

/// Pointer event targeted at one bar.
///
/// `at_ms` is the host's event timestamp; transitions are sampled against
/// the same clock.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    Enter {
        bar_index: usize,
        page_x: f64,
        at_ms: f64,
    },
    Leave {
        bar_index: usize,
        at_ms: f64,
    },
}

impl PointerEvent {
    #[must_use]
    pub fn bar_index(self) -> usize {
        match self {
            Self::Enter { bar_index, .. } | Self::Leave { bar_index, .. } => bar_index,
        }
    }

    #[must_use]
    pub fn at_ms(self) -> f64 {
        match self {
            Self::Enter { at_ms, .. } | Self::Leave { at_ms, .. } => at_ms,
        }
    }
}

/// Text shown by the tooltip for one hovered observation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TooltipContent {
    pub date: NaiveDate,
    /// Feed-format date exposed as an inspectable attribute.
    pub data_date: String,
    pub date_text: String,
    pub amount_text: String,
}

/// Opacity fade between two levels, eased with cubic in-out.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OpacityTransition {
    pub from: f64,
    pub to: f64,
    pub start_ms: f64,
    pub duration_ms: f64,
}

impl OpacityTransition {
    #[must_use]
    pub fn settled(opacity: f64) -> Self {
        Self {
            from: opacity,
            to: opacity,
            start_ms: 0.0,
            duration_ms: 0.0,
        }
    }

    #[must_use]
    pub fn value_at(self, now_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 || !now_ms.is_finite() {
            return self.to;
        }
        let progress = ((now_ms - self.start_ms) / self.duration_ms).clamp(0.0, 1.0);
        self.from + (self.to - self.from) * ease_cubic_in_out(progress)
    }

    #[must_use]
    pub fn is_finished_at(self, now_ms: f64) -> bool {
        self.duration_ms <= 0.0 || now_ms >= self.start_ms + self.duration_ms
    }
}

/// Cubic ease-in-out over `t` in `[0, 1]`.
#[must_use]
pub fn ease_cubic_in_out(t: f64) -> f64 {
    let t = t * 2.0;
    if t <= 1.0 {
        t * t * t / 2.0
    } else {
        let t = t - 2.0;
        (t * t * t + 2.0) / 2.0
    }
}

/// Tooltip overlay state plus the set of highlighted bars.
///
/// The last event wins for both displayed text and target opacity; a new
/// transition always starts from the opacity sampled at the event time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipState {
    phase: TooltipPhase,
    content: Option<TooltipContent>,
    left_px: f64,
    top_px: f64,
    opacity: OpacityTransition,
    highlighted: SmallVec<[usize; 2]>,
}

impl Default for TooltipState {
    fn default() -> Self {
        Self {
            phase: TooltipPhase::Hidden,
            content: None,
            left_px: 0.0,
            top_px: 0.0,
            opacity: OpacityTransition::settled(0.0),
            highlighted: SmallVec::new(),
        }
    }
}

impl TooltipState {
    #[must_use]
    pub fn phase(&self) -> TooltipPhase {
        self.phase
    }

    #[must_use]
    pub fn content(&self) -> Option<&TooltipContent> {
        self.content.as_ref()
    }

    #[must_use]
    pub fn position(&self) -> (f64, f64) {
        (self.left_px, self.top_px)
    }

    #[must_use]
    pub fn opacity_transition(&self) -> OpacityTransition {
        self.opacity
    }

    #[must_use]
    pub fn opacity_at(&self, now_ms: f64) -> f64 {
        self.opacity.value_at(now_ms)
    }

    #[must_use]
    pub fn is_highlighted(&self, bar_index: usize) -> bool {
        self.highlighted.contains(&bar_index)
    }

    #[must_use]
    pub fn highlighted_bars(&self) -> &[usize] {
        &self.highlighted
    }

    /// HIDDEN/VISIBLE -> VISIBLE: replaces text, moves the overlay and
    /// fades it in.
    pub fn on_pointer_enter(
        &mut self,
        bar_index: usize,
        content: TooltipContent,
        position: (f64, f64),
        at_ms: f64,
        duration_ms: f64,
    ) {
        trace!(bar_index, at_ms, "tooltip enter");
        if !self.highlighted.contains(&bar_index) {
            self.highlighted.push(bar_index);
        }
        self.content = Some(content);
        self.left_px = position.0;
        self.top_px = position.1;
        self.phase = TooltipPhase::Visible;
        self.start_fade(1.0, at_ms, duration_ms);
    }

    /// VISIBLE/HIDDEN -> HIDDEN: fades out, keeping the last text in place.
    pub fn on_pointer_leave(&mut self, bar_index: usize, at_ms: f64, duration_ms: f64) {
        trace!(bar_index, at_ms, "tooltip leave");
        self.highlighted.retain(|index| *index != bar_index);
        self.phase = TooltipPhase::Hidden;
        self.start_fade(0.0, at_ms, duration_ms);
    }

    fn start_fade(&mut self, target: f64, at_ms: f64, duration_ms: f64) {
        let current = self.opacity.value_at(at_ms);
        self.opacity = OpacityTransition {
            from: current,
            to: target,
            start_ms: at_ms,
            duration_ms: duration_ms.max(0.0),
        };
    }
}
