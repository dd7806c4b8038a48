//! Shared control, overlay, navigation, and data-display primitives.

use leptos::ev::{FocusEvent, MouseEvent};
use leptos::*;

use crate::widget::ButtonElement;

mod controls;
mod data_display;
mod navigation;
mod overlays;

pub use controls::{Button, WidgetButton};
pub use data_display::{EmptyState, Tag};
pub use navigation::{DisclosurePanel, NavItem, Tab, TabList};
pub use overlays::{MenuItem, MenuSeparator, MenuSurface, ModalFrame, Toast, Tooltip};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
/// Visual button variants from the dashboard button contract.
pub enum ButtonVariant {
    /// Solid filled button.
    #[default]
    Fill,
    /// Bordered button with transparent fill.
    Outline,
    /// Text-only button without chrome.
    TextOnly,
}

impl ButtonVariant {
    /// Every accepted variant, in declaration order.
    pub const ALL: [Self; 3] = [Self::Fill, Self::Outline, Self::TextOnly];

    /// Marker token used by `data-btn-variant` and configuration objects.
    pub fn token(self) -> &'static str {
        match self {
            Self::Fill => "fill",
            Self::Outline => "outline",
            Self::TextOnly => "text-only",
        }
    }

    /// CSS class carried by the rendered button element.
    pub fn class(self) -> &'static str {
        match self {
            Self::Fill => "btn-fill",
            Self::Outline => "btn-outline",
            Self::TextOnly => "btn-text-only",
        }
    }

    /// Parses a marker token; returns `None` for unknown input.
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|variant| variant.token() == raw)
    }

    /// Parses a marker token, falling back to [`ButtonVariant::Fill`] with a warning.
    pub fn coerce(raw: &str) -> Self {
        Self::parse(raw).unwrap_or_else(|| {
            logging::warn!("Invalid variant \"{raw}\". Falling back to \"fill\".");
            Self::default()
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
/// Button sizing tokens.
pub enum ButtonSize {
    /// Dense button.
    Small,
    /// Default form button.
    Medium,
    /// Large call-to-action button.
    #[default]
    Large,
}

impl ButtonSize {
    /// Every accepted size, in declaration order.
    pub const ALL: [Self; 3] = [Self::Small, Self::Medium, Self::Large];

    /// Marker token used by `data-btn-size` and configuration objects.
    pub fn token(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }

    /// CSS class carried by the rendered button element.
    pub fn class(self) -> &'static str {
        match self {
            Self::Small => "btn-small",
            Self::Medium => "btn-medium",
            Self::Large => "btn-large",
        }
    }

    /// Parses a marker token; returns `None` for unknown input.
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|size| size.token() == raw)
    }

    /// Parses a marker token, falling back to [`ButtonSize::Large`] with a warning.
    pub fn coerce(raw: &str) -> Self {
        Self::parse(raw).unwrap_or_else(|| {
            logging::warn!("Invalid size \"{raw}\". Falling back to \"large\".");
            Self::default()
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Toast tones, mirrored by the `.notification.<tone>` stylesheet rules.
pub enum ToastTone {
    /// Neutral information.
    #[default]
    Info,
    /// Completed action.
    Success,
    /// Failed validation or action.
    Error,
}

impl ToastTone {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// Builds the `btn` class list: base, one variant class, one size class, then the custom class.
pub fn button_class_list(
    variant: ButtonVariant,
    size: ButtonSize,
    class_name: Option<&str>,
) -> Vec<String> {
    let mut classes = vec![
        "btn".to_string(),
        variant.class().to_string(),
        size.class().to_string(),
    ];
    if let Some(class_name) = class_name.filter(|class_name| !class_name.trim().is_empty()) {
        classes.push(class_name.trim().to_string());
    }
    classes
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

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn variant_tokens_round_trip_through_parse() {
        for variant in ButtonVariant::ALL {
            assert_eq!(ButtonVariant::parse(variant.token()), Some(variant));
        }
        assert_eq!(ButtonVariant::parse("ghost"), None);
    }

    #[test]
    fn unknown_tokens_coerce_to_defaults() {
        assert_eq!(ButtonVariant::coerce("neon"), ButtonVariant::Fill);
        assert_eq!(ButtonSize::coerce("xl"), ButtonSize::Large);
        assert_eq!(ButtonSize::coerce("small"), ButtonSize::Small);
    }

    #[test]
    fn class_list_carries_one_variant_and_one_size() {
        assert_eq!(
            button_class_list(ButtonVariant::TextOnly, ButtonSize::Medium, Some(" row-action ")),
            vec!["btn", "btn-text-only", "btn-medium", "row-action"]
        );
        assert_eq!(
            button_class_list(ButtonVariant::Outline, ButtonSize::Small, Some("")),
            vec!["btn", "btn-outline", "btn-small"]
        );
    }

    #[test]
    fn layout_class_merges_only_when_present() {
        assert_eq!(merge_layout_class("ui-tab", Some("deal-tab")), "ui-tab deal-tab");
        assert_eq!(merge_layout_class("ui-tab", Some("")), "ui-tab");
        assert_eq!(merge_layout_class("ui-tab", None), "ui-tab");
    }
}
