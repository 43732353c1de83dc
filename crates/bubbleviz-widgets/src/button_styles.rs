//! Raised/pressed button styling for the transport controls
//!
//! - Momentary buttons (Next, Reset): raised, pressed in while held
//! - The Play/Pause toggle: stays pressed in while autoplay is on

use iced::widget::button::{Status, Style};
use iced::{Background, Border, Color, Shadow, Vector};

use crate::theme::PLAYING_COLOR;

/// Default button background color
pub const DEFAULT_BG: Color = Color::from_rgb(0.25, 0.25, 0.25);

const SHADOW_OFFSET: Vector = Vector::new(2.0, 2.0);
const SHADOW_BLUR: f32 = 3.0;

fn lighten(color: Color, amount: f32) -> Color {
    Color::from_rgb(
        (color.r + amount).min(1.0),
        (color.g + amount).min(1.0),
        (color.b + amount).min(1.0),
    )
}

fn darken(color: Color, factor: f32) -> Color {
    Color::from_rgb(
        (color.r * (1.0 - factor)).max(0.0),
        (color.g * (1.0 - factor)).max(0.0),
        (color.b * (1.0 - factor)).max(0.0),
    )
}

fn raised(base: Color) -> Style {
    Style {
        background: Some(Background::Color(base)),
        text_color: Color::WHITE,
        border: Border {
            color: lighten(base, 0.1),
            width: 1.0,
            radius: 4.0.into(),
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.4),
            offset: SHADOW_OFFSET,
            blur_radius: SHADOW_BLUR,
        },
        snap: false,
    }
}

fn pressed(base: Color) -> Style {
    Style {
        background: Some(Background::Color(darken(base, 0.15))),
        text_color: Color::WHITE,
        border: Border {
            color: darken(base, 0.2),
            width: 1.0,
            radius: 4.0.into(),
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.2),
            offset: Vector::new(0.5, 0.5),
            blur_radius: 1.0,
        },
        snap: false,
    }
}

fn disabled() -> Style {
    Style {
        background: Some(Background::Color(Color::from_rgb(0.2, 0.2, 0.2))),
        text_color: Color::from_rgb(0.5, 0.5, 0.5),
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: 4.0.into(),
        },
        shadow: Shadow::default(),
        snap: false,
    }
}

/// Style for momentary controls
///
/// Use with `.style(|_theme, status| control_style(status))`
pub fn control_style(status: Status) -> Style {
    match status {
        Status::Active => raised(DEFAULT_BG),
        Status::Hovered => raised(lighten(DEFAULT_BG, 0.08)),
        Status::Pressed => pressed(DEFAULT_BG),
        Status::Disabled => disabled(),
    }
}

/// Style for the Play/Pause toggle
///
/// Use with `.style(move |_theme, status| play_toggle_style(status, is_playing))`
pub fn play_toggle_style(status: Status, is_playing: bool) -> Style {
    if !is_playing {
        return control_style(status);
    }
    match status {
        Status::Active => pressed(PLAYING_COLOR),
        Status::Hovered => pressed(lighten(PLAYING_COLOR, 0.08)),
        Status::Pressed => pressed(darken(PLAYING_COLOR, 0.1)),
        Status::Disabled => disabled(),
    }
}
