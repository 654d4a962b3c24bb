/// UI building blocks
///
/// Pure presentation: these modules consume filter and countdown output and
/// raise `Message`s, nothing else. Shared palette and widget styles live
/// here so every section draws from the same dark theme.

pub mod card;
pub mod modal;
pub mod sections;

use iced::widget::{button, container};
use iced::{border, Color, Theme};

/// Deep purple page background
pub const BACKGROUND: Color = Color::from_rgb(0.059, 0.020, 0.125);
/// Raised surface color for cards and the modal
pub const SURFACE: Color = Color::from_rgb(0.102, 0.043, 0.180);
/// Violet campaign accent
pub const ACCENT: Color = Color::from_rgb(0.545, 0.361, 0.965);
/// Primary text
pub const TEXT: Color = Color::from_rgb(0.953, 0.957, 0.965);
/// Secondary text
pub const MUTED: Color = Color::from_rgb(0.612, 0.639, 0.686);

pub fn surface(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(SURFACE.into()),
        border: border::rounded(12.0),
        ..container::Style::default()
    }
}

/// Small translucent pill, used for country badges and honoree tags
pub fn badge(_theme: &Theme) -> container::Style {
    container::Style {
        text_color: Some(TEXT),
        background: Some(Color::from_rgba(0.0, 0.0, 0.0, 0.6).into()),
        border: border::rounded(6.0),
        ..container::Style::default()
    }
}

/// Solid accent call-to-action button
pub fn accent_button(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => {
            Color::from_rgb(0.486, 0.302, 0.910)
        }
        _ => ACCENT,
    };
    button::Style {
        background: Some(background.into()),
        text_color: Color::WHITE,
        border: border::rounded(24.0),
        ..button::Style::default()
    }
}

/// Translucent secondary button (nav links, profile links)
pub fn ghost_button(_theme: &Theme, status: button::Status) -> button::Style {
    let alpha = match status {
        button::Status::Hovered | button::Status::Pressed => 0.2,
        _ => 0.08,
    };
    button::Style {
        background: Some(Color::from_rgba(1.0, 1.0, 1.0, alpha).into()),
        text_color: TEXT,
        border: border::rounded(18.0),
        ..button::Style::default()
    }
}

/// Facet toggle chip; selected chips fill with the accent color
pub fn chip(selected: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme, status| {
        if selected {
            button::Style {
                border: border::rounded(14.0),
                ..accent_button(theme, status)
            }
        } else {
            button::Style {
                border: border::rounded(14.0),
                ..ghost_button(theme, status)
            }
        }
    }
}

/// Borderless text-like button for inline links
pub fn link_button(_theme: &Theme, status: button::Status) -> button::Style {
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => TEXT,
        _ => MUTED,
    };
    button::Style {
        background: None,
        text_color,
        ..button::Style::default()
    }
}
