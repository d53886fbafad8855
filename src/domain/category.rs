//! Subscription categories and their fixed display metadata.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::common::Decoded;

/// Categorises subscriptions for grouping and reporting.
///
/// The set is closed; unknown raw values decode to [`SubscriptionCategory::Other`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum SubscriptionCategory {
    Media,
    Home,
    Health,
    Education,
    Productivity,
    Transport,
    Other,
}

impl SubscriptionCategory {
    pub const ALL: [SubscriptionCategory; 7] = [
        SubscriptionCategory::Media,
        SubscriptionCategory::Home,
        SubscriptionCategory::Health,
        SubscriptionCategory::Education,
        SubscriptionCategory::Productivity,
        SubscriptionCategory::Transport,
        SubscriptionCategory::Other,
    ];

    /// Canonical display name. Group ordering sorts on this, not on the
    /// variant declaration order.
    pub fn display_name(&self) -> &'static str {
        match self {
            SubscriptionCategory::Media => "Media",
            SubscriptionCategory::Home => "Home",
            SubscriptionCategory::Health => "Health",
            SubscriptionCategory::Education => "Education",
            SubscriptionCategory::Productivity => "Productivity",
            SubscriptionCategory::Transport => "Transport",
            SubscriptionCategory::Other => "Other",
        }
    }

    /// Icon identifier shown next to the category. Cosmetic only.
    pub fn symbol_name(&self) -> &'static str {
        match self {
            SubscriptionCategory::Media => "play.tv",
            SubscriptionCategory::Home => "house.fill",
            SubscriptionCategory::Health => "heart.fill",
            SubscriptionCategory::Education => "books.vertical.fill",
            SubscriptionCategory::Productivity => "briefcase.fill",
            SubscriptionCategory::Transport => "car.fill",
            SubscriptionCategory::Other => "questionmark.circle.fill",
        }
    }

    /// Default color associated with the category, as an RGB hex string.
    pub fn color_hex(&self) -> &'static str {
        match self {
            SubscriptionCategory::Media => "FF3B30",
            SubscriptionCategory::Home => "007AFF",
            SubscriptionCategory::Health => "FF2D55",
            SubscriptionCategory::Education => "AF52DE",
            SubscriptionCategory::Productivity => "FF9500",
            SubscriptionCategory::Transport => "34C759",
            SubscriptionCategory::Other => "8E8E93",
        }
    }

    /// Decodes a raw string, degrading to `Other` when unrecognized.
    pub fn decode(raw: &str) -> Decoded<SubscriptionCategory> {
        for category in SubscriptionCategory::ALL {
            if category.display_name() == raw {
                return Decoded::Recognized(category);
            }
        }
        Decoded::Defaulted(SubscriptionCategory::Other)
    }
}

impl fmt::Display for SubscriptionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_recognizes_canonical_names() {
        let decoded = SubscriptionCategory::decode("Transport");
        assert_eq!(decoded, Decoded::Recognized(SubscriptionCategory::Transport));
        assert!(!decoded.is_defaulted());
    }

    #[test]
    fn decode_defaults_unknown_values_to_other() {
        let decoded = SubscriptionCategory::decode("Gaming");
        assert_eq!(decoded.value(), SubscriptionCategory::Other);
        assert!(decoded.is_defaulted());
    }

    #[test]
    fn every_category_has_metadata() {
        for category in SubscriptionCategory::ALL {
            assert!(!category.display_name().is_empty());
            assert!(!category.symbol_name().is_empty());
            assert_eq!(category.color_hex().len(), 6);
        }
    }
}
