//! Bar chart state: what is on screen and how it is moving

use std::time::{Duration, Instant};

use bubbleviz_core::{Highlight, HighlightKind, Renderer, Transition};
use iced::Color;

use crate::theme::{BAR_COLOR, CHART_BACKGROUND, COMPARE_COLOR, SWAP_COLOR};

/// Colors used to paint the chart
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarChartColors {
    pub bar: Color,
    pub compare: Color,
    pub swap: Color,
    pub background: Color,
}

impl Default for BarChartColors {
    fn default() -> Self {
        Self {
            bar: BAR_COLOR,
            compare: COMPARE_COLOR,
            swap: SWAP_COLOR,
            background: CHART_BACKGROUND,
        }
    }
}

/// One bar's height animation endpoints
#[derive(Debug, Clone, Copy, PartialEq)]
struct Bar {
    from: f32,
    to: f32,
}

impl Bar {
    fn settled(value: u32) -> Self {
        let v = value as f32;
        Self { from: v, to: v }
    }

    fn at(&self, progress: f32) -> f32 {
        self.from + (self.to - self.from) * progress
    }
}

#[derive(Debug, Clone, Copy)]
struct Animation {
    started: Instant,
    duration: Duration,
    progress: f32,
}

/// Displayed state of the bar chart
///
/// Updated through [`Renderer::draw`]; animated transitions are advanced by
/// the host calling [`advance`](Self::advance) on every animation frame.
#[derive(Debug, Clone)]
pub struct BarChartState {
    bars: Vec<Bar>,
    highlight: Option<Highlight>,
    /// Value drawn at full chart height
    max_value: u32,
    animation: Option<Animation>,
    colors: BarChartColors,
}

impl BarChartState {
    pub fn new(max_value: u32, colors: BarChartColors) -> Self {
        Self {
            bars: Vec::new(),
            highlight: None,
            max_value: max_value.max(1),
            animation: None,
            colors,
        }
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn max_value(&self) -> u32 {
        self.max_value
    }

    pub fn colors(&self) -> &BarChartColors {
        &self.colors
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Heights as currently displayed, in dataset units
    pub fn heights(&self) -> impl Iterator<Item = f32> + '_ {
        let progress = self.animation.map_or(1.0, |a| a.progress);
        self.bars.iter().map(move |bar| bar.at(progress))
    }

    /// Fill color for bar `index`
    pub fn color_of(&self, index: usize) -> Color {
        match self.highlight {
            Some(h) if h.contains(index) => match h.kind {
                HighlightKind::Compare => self.colors.compare,
                HighlightKind::Swap => self.colors.swap,
            },
            _ => self.colors.bar,
        }
    }

    /// Move the running animation to `now`, settling it once complete
    pub fn advance(&mut self, now: Instant) {
        let Some(animation) = self.animation.as_mut() else {
            return;
        };

        let elapsed = now.saturating_duration_since(animation.started);
        let t = if animation.duration.is_zero() {
            1.0
        } else {
            (elapsed.as_secs_f32() / animation.duration.as_secs_f32()).clamp(0.0, 1.0)
        };
        animation.progress = ease_in_out(t);

        if t >= 1.0 {
            self.settle();
        }
    }

    fn settle(&mut self) {
        for bar in &mut self.bars {
            bar.from = bar.to;
        }
        self.animation = None;
    }
}

impl Renderer for BarChartState {
    fn draw(&mut self, values: &[u32], highlight: Option<Highlight>, transition: Transition) {
        self.highlight = highlight;

        // A different length means a brand new dataset; nothing to morph from
        if values.len() != self.bars.len() {
            if self.animation.is_some() {
                log::debug!(
                    "bar chart: dataset length {} -> {}, dropping running animation",
                    self.bars.len(),
                    values.len()
                );
            }
            self.bars = values.iter().copied().map(Bar::settled).collect();
            self.animation = None;
            return;
        }

        match transition {
            Transition::Instant => {
                self.bars = values.iter().copied().map(Bar::settled).collect();
                self.animation = None;
            }
            Transition::Animated(duration) => {
                let progress = self.animation.map_or(1.0, |a| a.progress);
                for (bar, &value) in self.bars.iter_mut().zip(values) {
                    bar.from = bar.at(progress);
                    bar.to = value as f32;
                }
                self.animation = Some(Animation {
                    started: Instant::now(),
                    duration,
                    progress: 0.0,
                });
            }
        }
    }
}

/// Cubic ease-in-out, matching the default d3 transition curve
fn ease_in_out(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let u = 2.0 * t - 2.0;
        0.5 * u * u * u + 1.0
    }
}
