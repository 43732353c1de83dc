//! Bar chart view function

use iced::widget::Canvas;
use iced::{Element, Length};

use super::canvas::BarChartCanvas;
use super::state::BarChartState;

/// Create the bar chart element, filling the space it is given
///
/// # Example
///
/// ```ignore
/// fn view(&self) -> Element<Message> {
///     column![bar_chart(&self.chart), self.view_controls()].into()
/// }
/// ```
pub fn bar_chart<'a, Message>(state: &'a BarChartState) -> Element<'a, Message>
where
    Message: 'a,
{
    Canvas::new(BarChartCanvas { state })
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
