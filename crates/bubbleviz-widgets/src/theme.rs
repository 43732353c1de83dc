//! Shared color constants for the bar chart and controls
//!
//! The player can override these through its `theme.yaml`.

use iced::Color;

/// Resting bar color (#A8DBA8)
pub const BAR_COLOR: Color = Color::from_rgb(0.659, 0.859, 0.659);

/// Bars about to be compared (orange, #FFA500)
pub const COMPARE_COLOR: Color = Color::from_rgb(1.0, 0.647, 0.0);

/// Bars that were just swapped (orange, #FFA500)
pub const SWAP_COLOR: Color = COMPARE_COLOR;

/// Canvas background
pub const CHART_BACKGROUND: Color = Color::from_rgb(0.1, 0.1, 0.12);

/// Play button color while autoplay is on
pub const PLAYING_COLOR: Color = Color::from_rgb(0.3, 0.6, 0.9);
