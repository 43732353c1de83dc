//! Bar chart - one bar per dataset element
//!
//! - `state`: displayed heights, highlight and height animation
//! - `canvas`: the canvas `Program` that paints the bars
//! - `view`: `bar_chart()` builds the element

mod canvas;
mod state;
mod view;

pub use canvas::{BarChartCanvas, BAR_GAP};
pub use state::{BarChartColors, BarChartState};
pub use view::bar_chart;
