//! Shared control primitives and the `data-ui-*` token helpers.

use leptos::ev::MouseEvent;
use leptos::*;

use crate::{Icon, IconData, IconSize};

mod controls;

pub use controls::Button;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
/// Shared button variants.
pub enum ButtonVariant {
    /// Standard filled action button.
    #[default]
    Primary,
    /// Outlined secondary action (e.g. "Back").
    Secondary,
    /// Borderless button for list rows and icon triggers.
    Quiet,
}

impl ButtonVariant {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Quiet => "quiet",
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
/// Shared button sizing tokens.
pub enum ButtonSize {
    /// Dense button.
    Sm,
    /// Default button.
    #[default]
    Md,
}

impl ButtonSize {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
/// Shared button shape tokens.
pub enum ButtonShape {
    /// Rounded rectangle.
    #[default]
    Standard,
    /// Circular icon-only button.
    Circle,
}

impl ButtonShape {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Circle => "circle",
        }
    }
}

pub(crate) fn merge_layout_class(base: &'static str, layout_class: Option<&'static str>) -> String {
    match layout_class {
        Some(layout_class) if !layout_class.is_empty() => format!("{base} {layout_class}"),
        _ => base.to_string(),
    }
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}
