//! Theme configuration for the bubbleviz player
//!
//! Chart colors are configurable through YAML in the config directory.
//! Default location: ~/.config/bubbleviz/theme.yaml

use std::path::PathBuf;
use std::sync::OnceLock;

use bubbleviz_core::config::{config_dir, load_config};
use bubbleviz_widgets::BarChartColors;
use iced::Color;
use serde::{Deserialize, Serialize};

/// Global theme instance (initialized once at startup)
static THEME: OnceLock<ThemeConfig> = OnceLock::new();

/// Root theme configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub chart: ChartColors,
}

/// Bar chart colors as hex strings (e.g. "#A8DBA8")
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartColors {
    /// Resting bars
    pub bar: String,
    /// Pair about to be compared
    pub compare: String,
    /// Pair that was just swapped
    pub swap: String,
    pub background: String,
}

impl Default for ChartColors {
    fn default() -> Self {
        Self {
            bar: "#A8DBA8".to_string(),
            compare: "#FFA500".to_string(),
            swap: "#FFA500".to_string(),
            background: "#1A1A1F".to_string(),
        }
    }
}

impl ChartColors {
    /// Parse into widget colors, falling back per entry on bad hex
    pub fn to_chart_colors(&self) -> BarChartColors {
        let fallback = BarChartColors::default();
        BarChartColors {
            bar: parse_hex_color(&self.bar).unwrap_or(fallback.bar),
            compare: parse_hex_color(&self.compare).unwrap_or(fallback.compare),
            swap: parse_hex_color(&self.swap).unwrap_or(fallback.swap),
            background: parse_hex_color(&self.background).unwrap_or(fallback.background),
        }
    }
}

/// Parse "#RRGGBB" or "RRGGBB"
fn parse_hex_color(hex: &str) -> Option<Color> {
    let digits = hex.trim().trim_start_matches('#');
    if digits.len() != 6 || !digits.is_ascii() {
        log::warn!("Invalid hex color '{}', using default", hex);
        return None;
    }

    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).ok();
    match (channel(0..2), channel(2..4), channel(4..6)) {
        (Some(r), Some(g), Some(b)) => Some(Color::from_rgb8(r, g, b)),
        _ => {
            log::warn!("Invalid hex color '{}', using default", hex);
            None
        }
    }
}

/// Get the default theme file path
///
/// Returns: ~/.config/bubbleviz/theme.yaml
pub fn default_theme_path() -> PathBuf {
    config_dir().join("theme.yaml")
}

/// Initialize the global theme from the theme file (call once at startup)
pub fn init_theme() {
    let config: ThemeConfig = load_config(&default_theme_path());
    if THEME.set(config).is_err() {
        log::warn!("Theme already initialized");
    }
}

/// Chart colors from theme.yaml, or defaults if not initialized
pub fn chart_colors() -> BarChartColors {
    THEME
        .get()
        .map(|t| t.chart.to_chart_colors())
        .unwrap_or_default()
}
