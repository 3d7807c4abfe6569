//! Shared class strings for the customer card and the gallery around it.

use crate::domain::{CardMode, SeverityTier};

// ============================================
// CARD STYLES
// ============================================

pub const CARD_BASE: &str = "rounded-lg border border-gray-200 bg-white p-4 shadow-sm";

pub const CARD_INTERACTIVE: &str = "cursor-pointer hover:border-gray-300 hover:shadow-md focus:outline-none focus:ring-2 focus:ring-blue-500 focus:ring-offset-2";

/// Container classes for a card. `extra` is appended after the defaults and never replaces them.
pub fn card_class(mode: CardMode, extra: Option<&str>) -> String {
    let mut class = String::from(CARD_BASE);
    if mode.is_interactive() {
        class.push(' ');
        class.push_str(CARD_INTERACTIVE);
    }
    if let Some(extra) = extra.map(str::trim).filter(|extra| !extra.is_empty()) {
        class.push(' ');
        class.push_str(extra);
    }
    class
}

pub fn badge_class(background: &str) -> String {
    format!("flex-shrink-0 rounded-md px-2.5 py-1 {background}")
}

// ============================================
// GALLERY STYLES
// ============================================

pub fn filter_button(active: bool) -> &'static str {
    if active {
        "rounded-lg border border-gray-200 bg-blue-600 px-3 py-1.5 text-sm font-semibold text-white"
    } else {
        "rounded-lg border border-gray-200 bg-white px-3 py-1.5 text-sm text-gray-600 hover:border-gray-300"
    }
}

pub fn tier_stat(tier: SeverityTier) -> String {
    format!("rounded-lg p-4 {} {}", tier.background(), tier.text())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_card_has_no_pointer_affordance() {
        let class = card_class(CardMode::Static, None);
        assert_eq!(class, CARD_BASE);
        assert!(!class.contains("cursor-pointer"));
    }

    #[test]
    fn interactive_card_adds_focus_ring() {
        let class = card_class(CardMode::Interactive, None);
        assert!(class.starts_with(CARD_BASE));
        assert!(class.contains("cursor-pointer"));
        assert!(class.contains("focus:ring-2"));
    }

    #[test]
    fn extra_classes_are_appended() {
        let class = card_class(CardMode::Interactive, Some(" ring-2 "));
        assert!(class.starts_with(CARD_BASE));
        assert!(class.ends_with(" ring-2"));

        assert_eq!(card_class(CardMode::Static, Some("")), CARD_BASE);
    }
}
