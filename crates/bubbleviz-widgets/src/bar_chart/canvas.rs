//! Canvas Program for bar chart rendering
//!
//! Display only: the chart takes no input, so only `draw` is implemented.

use iced::widget::canvas::{Frame, Geometry, Program};
use iced::{mouse, Point, Rectangle, Size, Theme};

use super::state::BarChartState;

/// Horizontal gap between neighbouring bars in pixels
pub const BAR_GAP: f32 = 2.0;

/// Headroom above the tallest possible bar in pixels
const TOP_MARGIN: f32 = 8.0;

/// Canvas program painting a [`BarChartState`]
pub struct BarChartCanvas<'a> {
    pub state: &'a BarChartState,
}

impl<'a, Message> Program<Message> for BarChartCanvas<'a> {
    type State = ();

    fn draw(
        &self,
        _interaction: &Self::State,
        renderer: &iced::Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let colors = self.state.colors();

        frame.fill_rectangle(Point::ORIGIN, bounds.size(), colors.background);

        if self.state.is_empty() {
            return vec![frame.into_geometry()];
        }

        let slot = bounds.width / self.state.len() as f32;
        // Very narrow slots get no gap so the bars stay visible
        let gap = if slot > BAR_GAP * 2.0 { BAR_GAP } else { 0.0 };
        let usable_height = (bounds.height - TOP_MARGIN).max(0.0);
        let scale = usable_height / self.state.max_value() as f32;

        for (index, value) in self.state.heights().enumerate() {
            let height = (value * scale).clamp(0.0, usable_height);
            frame.fill_rectangle(
                Point::new(index as f32 * slot, bounds.height - height),
                Size::new(slot - gap, height),
                self.state.color_of(index),
            );
        }

        vec![frame.into_geometry()]
    }
}
