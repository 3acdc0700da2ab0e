//! Design System Theme Constants
//!
//! Centralized theme definitions for the uploader window.
//! All colors, spacing, and sizing should be defined here.
//!
//! # Color Philosophy
//! - Dark theme with deep grays (not pure black)
//! - Indigo primary accent for actions
//! - Semantic colors for toast severities (success/error/info)
//!
//! # Usage
//! ```ignore
//! use crate::ui::theme;
//!
//! let bg = theme::color::SURFACE;
//! let padding = theme::spacing::MD;
//! ```

use iced::Color;

// =============================================================================
// COLORS
// =============================================================================

pub mod color {
    use super::*;

    // -------------------------------------------------------------------------
    // Backgrounds (darkest to lightest)
    // -------------------------------------------------------------------------

    /// Main app background - deepest gray
    /// Hex: #121215
    pub const BASE: Color = Color::from_rgb(
        0x12 as f32 / 255.0,
        0x12 as f32 / 255.0,
        0x15 as f32 / 255.0,
    );

    /// Cards, panels, raised surfaces
    /// Hex: #1a1a1f
    pub const SURFACE: Color = Color::from_rgb(
        0x1a as f32 / 255.0,
        0x1a as f32 / 255.0,
        0x1f as f32 / 255.0,
    );

    /// Toasts and other floating surfaces
    /// Hex: #232328
    pub const SURFACE_ELEVATED: Color = Color::from_rgb(
        0x23 as f32 / 255.0,
        0x23 as f32 / 255.0,
        0x28 as f32 / 255.0,
    );

    /// Hover states
    /// Hex: #2a2a30
    pub const SURFACE_HOVER: Color = Color::from_rgb(
        0x2a as f32 / 255.0,
        0x2a as f32 / 255.0,
        0x30 as f32 / 255.0,
    );

    // -------------------------------------------------------------------------
    // Borders & Dividers
    // -------------------------------------------------------------------------

    /// Subtle separation, barely visible
    /// Hex: #2a2a30
    pub const BORDER_SUBTLE: Color = SURFACE_HOVER;

    /// Standard borders
    /// Hex: #3a3a42
    pub const BORDER: Color = Color::from_rgb(
        0x3a as f32 / 255.0,
        0x3a as f32 / 255.0,
        0x42 as f32 / 255.0,
    );

    /// Emphasized borders, drop target outline
    /// Hex: #4a4a52
    pub const BORDER_STRONG: Color = Color::from_rgb(
        0x4a as f32 / 255.0,
        0x4a as f32 / 255.0,
        0x52 as f32 / 255.0,
    );

    // -------------------------------------------------------------------------
    // Text
    // -------------------------------------------------------------------------

    /// Primary text - headings, important content
    /// Hex: #f4f4f5
    pub const TEXT_PRIMARY: Color = Color::from_rgb(
        0xf4 as f32 / 255.0,
        0xf4 as f32 / 255.0,
        0xf5 as f32 / 255.0,
    );

    /// Secondary text - body, descriptions
    /// Hex: #a1a1aa
    pub const TEXT_SECONDARY: Color = Color::from_rgb(
        0xa1 as f32 / 255.0,
        0xa1 as f32 / 255.0,
        0xaa as f32 / 255.0,
    );

    /// Muted text - hints, disabled
    /// Hex: #71717a
    pub const TEXT_MUTED: Color = Color::from_rgb(
        0x71 as f32 / 255.0,
        0x71 as f32 / 255.0,
        0x7a as f32 / 255.0,
    );

    // -------------------------------------------------------------------------
    // Primary Accent (Indigo)
    // -------------------------------------------------------------------------

    /// Primary action color, also the info toast accent
    /// Hex: #6366f1
    pub const PRIMARY: Color = Color::from_rgb(
        0x63 as f32 / 255.0,
        0x66 as f32 / 255.0,
        0xf1 as f32 / 255.0,
    );

    /// Primary hover state
    /// Hex: #818cf8
    pub const PRIMARY_HOVER: Color = Color::from_rgb(
        0x81 as f32 / 255.0,
        0x8c as f32 / 255.0,
        0xf8 as f32 / 255.0,
    );

    /// Primary pressed/muted state
    /// Hex: #4f46e5
    pub const PRIMARY_PRESSED: Color = Color::from_rgb(
        0x4f as f32 / 255.0,
        0x46 as f32 / 255.0,
        0xe5 as f32 / 255.0,
    );

    // -------------------------------------------------------------------------
    // Semantic Status Colors
    // -------------------------------------------------------------------------

    /// Success - upload processed
    /// Hex: #22c55e
    pub const SUCCESS: Color = Color::from_rgb(
        0x22 as f32 / 255.0,
        0xc5 as f32 / 255.0,
        0x5e as f32 / 255.0,
    );

    /// Error - server or network failure
    /// Hex: #ef4444
    pub const ERROR: Color = Color::from_rgb(
        0xef as f32 / 255.0,
        0x44 as f32 / 255.0,
        0x44 as f32 / 255.0,
    );

    // -------------------------------------------------------------------------
    // Helpers
    // -------------------------------------------------------------------------

    /// Scale a color's alpha (for fading toasts)
    pub const fn with_alpha(color: Color, alpha: f32) -> Color {
        Color {
            r: color.r,
            g: color.g,
            b: color.b,
            a: color.a * alpha,
        }
    }
}

// =============================================================================
// SPACING
// =============================================================================

pub mod spacing {
    /// Tightest spacing - icon gaps, inline elements
    pub const XS: u16 = 4;

    /// Small spacing - component padding, small gaps
    pub const SM: u16 = 8;

    /// Medium spacing - between related items
    pub const MD: u16 = 12;

    /// Large spacing - section padding
    pub const LG: u16 = 16;

    /// Extra large - window padding
    pub const XL: u16 = 24;
}

// =============================================================================
// TYPOGRAPHY
// =============================================================================

pub mod typography {
    /// Window title
    pub const SIZE_TITLE: u16 = 24;

    /// Card heading
    pub const SIZE_HEADING: u16 = 18;

    /// Body text, buttons
    pub const SIZE_BODY: u16 = 14;

    /// Hints, secondary info
    pub const SIZE_SMALL: u16 = 12;
}

// =============================================================================
// BORDER RADIUS
// =============================================================================

pub mod radius {
    /// Buttons, inputs
    pub const SM: f32 = 4.0;

    /// Cards, toasts
    pub const MD: f32 = 8.0;
}

// =============================================================================
// ANIMATION TIMING (in milliseconds)
// =============================================================================

pub mod timing {
    /// Toast fade in/out
    pub const SLOW: u64 = 300;
}

// =============================================================================
// CONTAINER STYLE HELPERS
// =============================================================================

use iced::Border;
use iced::widget::container;

/// Create a standard container style with the given background color
pub fn container_style(bg: Color) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(bg)),
        border: Border::default(),
        ..Default::default()
    }
}

/// Card style - surface background with subtle border and radius
pub fn card_style() -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(color::SURFACE)),
        border: Border {
            color: color::BORDER_SUBTLE,
            width: 1.0,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}

/// Drop zone - dashed look approximated with a stronger border
pub fn drop_zone_style(active: bool) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(color::BASE)),
        border: Border {
            color: if active {
                color::BORDER_STRONG
            } else {
                color::BORDER
            },
            width: 1.0,
            radius: radius::SM.into(),
        },
        ..Default::default()
    }
}

// =============================================================================
// BUTTON STYLE HELPERS
// =============================================================================

use iced::Theme;
use iced::widget::button;

/// Primary button - filled with accent color
pub fn button_primary(_theme: &Theme, status: button::Status) -> button::Style {
    let (bg, text) = match status {
        button::Status::Active => (color::PRIMARY, color::TEXT_PRIMARY),
        button::Status::Hovered => (color::PRIMARY_HOVER, color::TEXT_PRIMARY),
        button::Status::Pressed => (color::PRIMARY_PRESSED, color::TEXT_PRIMARY),
        button::Status::Disabled => (color::SURFACE_HOVER, color::TEXT_MUTED),
    };

    button::Style {
        background: Some(iced::Background::Color(bg)),
        text_color: text,
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Secondary button - outlined
pub fn button_secondary(_theme: &Theme, status: button::Status) -> button::Style {
    let (bg, border, text) = match status {
        button::Status::Active => (color::SURFACE, color::BORDER, color::TEXT_SECONDARY),
        button::Status::Hovered => (color::SURFACE_HOVER, color::BORDER, color::TEXT_PRIMARY),
        button::Status::Pressed => (
            color::SURFACE_ELEVATED,
            color::BORDER_STRONG,
            color::TEXT_PRIMARY,
        ),
        button::Status::Disabled => (color::SURFACE, color::BORDER_SUBTLE, color::TEXT_MUTED),
    };

    button::Style {
        background: Some(iced::Background::Color(bg)),
        text_color: text,
        border: Border {
            color: border,
            width: 1.0,
            radius: radius::SM.into(),
        },
        ..Default::default()
    }
}

/// Ghost button - minimal, for toast close buttons
pub fn button_ghost(_theme: &Theme, status: button::Status) -> button::Style {
    let (bg, text) = match status {
        button::Status::Active => (Color::TRANSPARENT, color::TEXT_MUTED),
        button::Status::Hovered => (color::SURFACE_HOVER, color::TEXT_SECONDARY),
        button::Status::Pressed => (color::SURFACE_ELEVATED, color::TEXT_PRIMARY),
        button::Status::Disabled => (Color::TRANSPARENT, color::TEXT_MUTED),
    };

    button::Style {
        background: Some(iced::Background::Color(bg)),
        text_color: text,
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}
