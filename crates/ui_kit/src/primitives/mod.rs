//! Styled primitives, their key enums, and the recipes that style them.

use leptos::ev::MouseEvent;
use leptos::*;

use crate::variant::{NoKey, Recipe, StyleKey};

mod controls;
mod data_display;
mod navigation;
mod overlays;

pub use controls::{Button, Input};
pub use data_display::{Alert, Card};
pub use navigation::{indexed_links, NavLink, Navbar};
pub use overlays::Modal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Button visual treatments.
pub enum ButtonVariant {
    /// Emphasized call to action.
    Primary,
    /// Neutral action.
    Secondary,
    /// Destructive action.
    Destructive,
}

impl Default for ButtonVariant {
    fn default() -> Self {
        Self::Primary
    }
}

impl StyleKey for ButtonVariant {
    const ALL: &'static [Self] = &[Self::Primary, Self::Secondary, Self::Destructive];
    const DEFAULT: Option<Self> = Some(Self::Primary);

    fn key(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Destructive => "destructive",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Button sizing tokens.
pub enum ButtonSize {
    /// Dense button.
    Sm,
    /// Default button.
    Md,
    /// Large button.
    Lg,
}

impl Default for ButtonSize {
    fn default() -> Self {
        Self::Md
    }
}

impl StyleKey for ButtonSize {
    const ALL: &'static [Self] = &[Self::Sm, Self::Md, Self::Lg];
    const DEFAULT: Option<Self> = Some(Self::Md);

    fn key(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Alert severities.
pub enum AlertVariant {
    /// Neutral information.
    Info,
    /// Completed action.
    Success,
    /// Needs attention.
    Warning,
    /// Failed action.
    Error,
}

impl Default for AlertVariant {
    fn default() -> Self {
        Self::Info
    }
}

impl StyleKey for AlertVariant {
    const ALL: &'static [Self] = &[Self::Info, Self::Success, Self::Warning, Self::Error];
    const DEFAULT: Option<Self> = Some(Self::Info);

    fn key(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

/// Button styling table.
pub const BUTTON: Recipe<ButtonVariant, ButtonSize> = Recipe::new(
    "inline-flex items-center justify-center font-medium rounded-md focus:outline-none focus:ring-2 focus:ring-offset-2",
    &[
        (
            ButtonVariant::Primary,
            "bg-blue-600 text-white hover:bg-blue-700 focus:ring-blue-500",
        ),
        (
            ButtonVariant::Secondary,
            "bg-gray-200 text-gray-800 hover:bg-gray-300 focus:ring-gray-500",
        ),
        (
            ButtonVariant::Destructive,
            "bg-red-600 text-white hover:bg-red-700 focus:ring-red-500",
        ),
    ],
    &[
        (ButtonSize::Sm, "px-2 py-1 text-sm"),
        (ButtonSize::Md, "px-4 py-2 text-base"),
        (ButtonSize::Lg, "px-6 py-3 text-lg"),
    ],
);

/// Input styling table.
pub const INPUT: Recipe<NoKey> = Recipe::base_only(
    "block w-full rounded-md border-gray-300 shadow-sm focus:border-blue-500 focus:ring-blue-500",
);

/// Card styling table.
pub const CARD: Recipe<NoKey> = Recipe::base_only("bg-white shadow rounded-lg p-6");

/// Alert styling table.
pub const ALERT: Recipe<AlertVariant> = Recipe::with_variants(
    "p-4 rounded-md",
    &[
        (AlertVariant::Info, "bg-blue-100 text-blue-700"),
        (AlertVariant::Success, "bg-green-100 text-green-700"),
        (AlertVariant::Warning, "bg-yellow-100 text-yellow-700"),
        (AlertVariant::Error, "bg-red-100 text-red-700"),
    ],
);

pub(crate) fn emit_click(handler: Option<&Callback<MouseEvent>>, ev: MouseEvent) {
    if let Some(handler) = handler {
        handler.call(ev);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn every_button_variant_and_size_resolves_in_order() {
        for &variant in ButtonVariant::ALL {
            for &size in ButtonSize::ALL {
                let class = BUTTON.resolve(Some(variant), Some(size), Some("custom"));
                let variant_token = BUTTON.variant_token(variant).expect("variant token");
                let size_token = BUTTON.size_token(size).expect("size token");
                assert_eq!(
                    class,
                    format!("{} {variant_token} {size_token} custom", BUTTON.base())
                );
            }
        }
    }

    #[test]
    fn button_defaults_to_primary_md() {
        assert_eq!(
            BUTTON.resolve(None, None, None),
            BUTTON.resolve(Some(ButtonVariant::Primary), Some(ButtonSize::Md), None)
        );
    }

    #[test]
    fn unknown_button_keys_degrade_to_remaining_tokens() {
        let class = BUTTON.resolve_keys(Some("ghost"), Some("lg"), None);
        assert_eq!(class, format!("{} px-6 py-3 text-lg", BUTTON.base()));

        let class = BUTTON.resolve_keys(Some("secondary"), Some("xl"), None);
        assert!(class.starts_with(BUTTON.base()));
        assert!(class.ends_with("focus:ring-gray-500"));
    }

    #[test]
    fn every_alert_variant_resolves_after_base() {
        for &variant in AlertVariant::ALL {
            let token = ALERT.variant_token(variant).expect("alert token");
            assert_eq!(ALERT.resolve(Some(variant), None, None), format!("p-4 rounded-md {token}"));
            assert_eq!(AlertVariant::from_key(variant.key()), Some(variant));
        }
        assert_eq!(ALERT.resolve_keys(Some("critical"), None, None), "p-4 rounded-md");
    }

    #[test]
    fn base_only_primitives_keep_override_last() {
        assert_eq!(CARD.resolve(None, None, Some("mt-4")), "bg-white shadow rounded-lg p-6 mt-4");
        assert!(INPUT.resolve(None, None, None).starts_with("block w-full"));
    }
}
