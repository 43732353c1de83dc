//! Configuration for bubbleviz applications
//!
//! - Generic YAML config loading/saving
//! - Standard config paths
//! - The visualizer settings themselves (dataset shape, playback speed)
//!
//! # Usage
//!
//! ```ignore
//! use bubbleviz_core::config::{default_config_path, load_config, save_config, VisualizerConfig};
//!
//! let path = default_config_path();
//! let config: VisualizerConfig = load_config(&path);
//! save_config(&config, &path)?;
//! ```

mod io;
mod paths;
mod settings;

pub use io::{load_config, save_config};
pub use paths::{config_dir, default_config_path};
pub use settings::{DatasetConfig, PlaybackConfig, VisualizerConfig};
