use crate::weather::Condition;
use iced::{theme::Palette, widget::text::Shaping, Color, Theme};

/// Accent used for buttons and chart strokes
pub const ACCENT: Color = Color::from_rgb(0.533, 0.518, 0.847);

/// Weather and header glyphs need font fallback to render
pub const GLYPH_SHAPING: Shaping = Shaping::Advanced;

const LIGHT_TEXT: Color = Color::WHITE;
const DARK_TEXT: Color = Color::from_rgb(0.067, 0.094, 0.153);

// How much of the condition colour survives in dark mode
const DARK_MODE_FACTOR: f32 = 0.35;

fn condition_background(condition: Condition) -> Color {
    match condition {
        Condition::Sunny => Color::from_rgb8(0xfd, 0xe0, 0x47),
        Condition::Cloudy => Color::from_rgb8(0x9c, 0xa3, 0xaf),
        Condition::Rainy => Color::from_rgb8(0x60, 0xa5, 0xfa),
        Condition::Thunder => Color::from_rgb8(0x7e, 0x22, 0xce),
        Condition::Snowy => Color::from_rgb8(0xbf, 0xdb, 0xfe),
    }
}

/// Colour of the weather glyph for a condition
pub fn icon_color(condition: Condition) -> Color {
    match condition {
        Condition::Sunny => Color::from_rgb8(0xea, 0xb3, 0x08),
        Condition::Cloudy => Color::from_rgb8(0x9c, 0xa3, 0xaf),
        Condition::Rainy => Color::from_rgb8(0x60, 0xa5, 0xfa),
        Condition::Thunder => Color::from_rgb8(0xc0, 0x84, 0xfc),
        Condition::Snowy => Color::from_rgb8(0x93, 0xc5, 0xfd),
    }
}

fn darken(color: Color, factor: f32) -> Color {
    Color::from_rgb(color.r * factor, color.g * factor, color.b * factor)
}

pub fn palette(condition: Condition, dark_mode: bool) -> Palette {
    let background = condition_background(condition);
    let (background, text) = if dark_mode {
        (darken(background, DARK_MODE_FACTOR), LIGHT_TEXT)
    } else {
        (background, DARK_TEXT)
    };

    Palette {
        background,
        text,
        primary: ACCENT,
        ..Palette::LIGHT
    }
}

/// Window theme: background follows the condition, text follows dark mode
pub fn dashboard_theme(condition: Condition, dark_mode: bool) -> Theme {
    let mode = if dark_mode { "Dark" } else { "Light" };
    Theme::custom(
        format!("{} {}", condition.name(), mode),
        palette(condition, dark_mode),
    )
}

/// Muted text colour for secondary labels, readable on both backgrounds
pub fn muted_text(dark_mode: bool) -> Color {
    if dark_mode {
        Color::from_rgb(0.75, 0.75, 0.75)
    } else {
        Color::from_rgb(0.3, 0.3, 0.3)
    }
}
