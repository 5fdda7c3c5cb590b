//! Theme and appearance module for Barn.
//!
//! Contains the color palette, layout constants, and color utilities.

use iced::Color;
use std::sync::LazyLock;

// Layout constants
pub const CORNER_RADIUS: f32 = 8.0;
pub const CORNER_RADIUS_SMALL: f32 = 6.0;
pub const CORNER_RADIUS_LARGE: f32 = 12.0;
pub const SPACING: u16 = 8;
pub const SPACING_LARGE: u16 = 16;
pub const PADDING: u16 = 12;
pub const PADDING_LARGE: u16 = 20;

/// Color palette for the application theme
#[derive(Debug, Clone)]
pub struct Palette {
    // Backgrounds
    pub background: Color,
    pub surface: Color,
    pub card: Color,
    pub card_hover: Color,

    // Text
    pub text: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    // Borders
    pub border: Color,

    // Accent colors
    pub accent: Color,
    pub accent_dark: Color,

    // Priority badge colors
    pub priority_high: Color,
    pub priority_medium: Color,
    pub priority_low: Color,

    // Market trend colors
    pub trend_up: Color,
    pub trend_down: Color,

    // Error/warning text
    pub danger: Color,

    // Loading placeholder base
    pub skeleton: Color,
}

/// Light theme palette (paper background, farm-green accent)
pub static LIGHT: LazyLock<Palette> = LazyLock::new(|| Palette {
    // Backgrounds - gray scale
    background: Color::from_rgb(0.953, 0.957, 0.965), // gray-100 #f3f4f6
    surface: Color::WHITE,
    card: Color::from_rgb(0.976, 0.980, 0.984), // gray-50 #f9fafb
    card_hover: Color::from_rgb(0.898, 0.906, 0.922), // gray-200 #e5e7eb

    // Text - gray scale
    text: Color::from_rgb(0.122, 0.161, 0.216), // gray-800 #1f2937
    text_secondary: Color::from_rgb(0.294, 0.333, 0.388), // gray-600 #4b5563
    text_muted: Color::from_rgb(0.612, 0.639, 0.686), // gray-400 #9ca3af

    // Borders
    border: Color::from_rgb(0.898, 0.906, 0.922), // gray-200

    // Accent - farm green
    accent: Color::from_rgb(0.298, 0.686, 0.314), // green-500 #4caf50
    accent_dark: Color::from_rgb(0.180, 0.490, 0.196), // green-800 #2e7d32

    // Priority badges
    priority_high: Color::from_rgb(0.726, 0.110, 0.110), // red-700 #b91c1c
    priority_medium: Color::from_rgb(0.631, 0.384, 0.027), // yellow-700 #a16207
    priority_low: Color::from_rgb(0.114, 0.306, 0.847), // blue-700 #1d4ed8

    // Market trends
    trend_up: Color::from_rgb(0.129, 0.533, 0.333),   // green-600
    trend_down: Color::from_rgb(0.863, 0.149, 0.149), // red-600

    // Danger
    danger: Color::from_rgb(0.863, 0.149, 0.149), // red-600

    // Skeleton pulse base
    skeleton: Color::from_rgb(0.898, 0.906, 0.922), // gray-200
});

// Color utility functions

/// Create a new color with the specified alpha value
pub fn with_alpha(color: Color, alpha: f32) -> Color {
    Color { a: alpha, ..color }
}

/// Get the current palette (currently always light theme)
pub fn palette() -> &'static Palette {
    &LIGHT
}
