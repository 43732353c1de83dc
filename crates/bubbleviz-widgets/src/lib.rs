//! Shared UI widgets for the bubbleviz visualizer
//!
//! Follows the iced 0.14 layout used across the workspace:
//!
//! - **State structs**: pure data (`BarChartState`)
//! - **View functions**: take state, return `Element<Message>`
//! - **Canvas Programs**: custom drawing only, no app logic
//!
//! `BarChartState` implements [`bubbleviz_core::Renderer`], so the playback
//! controller draws straight into it.

pub mod bar_chart;
pub mod button_styles;
pub mod theme;

pub use bar_chart::{bar_chart, BarChartColors, BarChartState, BAR_GAP};
pub use theme::{BAR_COLOR, CHART_BACKGROUND, COMPARE_COLOR, SWAP_COLOR};
