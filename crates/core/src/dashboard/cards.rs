use std::collections::BTreeSet;

/// Visible fraction at which a card is revealed.
pub const REVEAL_THRESHOLD: f64 = 0.1;
/// Class added to a revealed card.
pub const REVEAL_CLASS: &str = "fade-in";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CardElevation {
    #[default]
    Resting,
    Raised,
}

impl CardElevation {
    #[must_use]
    pub fn on_pointer(hovered: bool) -> Self {
        if hovered {
            CardElevation::Raised
        } else {
            CardElevation::Resting
        }
    }

    #[must_use]
    pub fn style(self) -> &'static str {
        match self {
            CardElevation::Resting => "transform: translateY(0); box-shadow: none;",
            CardElevation::Raised => {
                "transform: translateY(-5px); box-shadow: 0 10px 25px rgba(0,0,0,0.15);"
            }
        }
    }
}

/// Cards that have scrolled into view. Revealing is one-way.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RevealTracker {
    revealed: BTreeSet<String>,
}

impl RevealTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an intersection report. Returns true when this call revealed the card.
    pub fn observe(&mut self, card: &str, visible_ratio: f64) -> bool {
        if visible_ratio < REVEAL_THRESHOLD || self.revealed.contains(card) {
            return false;
        }
        self.revealed.insert(card.to_string())
    }

    #[must_use]
    pub fn is_revealed(&self, card: &str) -> bool {
        self.revealed.contains(card)
    }

    #[must_use]
    pub fn class_for(&self, card: &str) -> &'static str {
        if self.is_revealed(card) { REVEAL_CLASS } else { "" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveal_needs_ten_percent_and_sticks() {
        let mut tracker = RevealTracker::new();
        assert!(!tracker.observe("scores", 0.05));
        assert!(tracker.observe("scores", 0.1));
        assert!(!tracker.observe("scores", 0.9));
        tracker.observe("scores", 0.0);
        assert_eq!(tracker.class_for("scores"), "fade-in");
        assert_eq!(tracker.class_for("subjects"), "");
    }

    #[test]
    fn hover_raises_and_leave_resets() {
        assert!(CardElevation::on_pointer(true).style().contains("translateY(-5px)"));
        assert_eq!(CardElevation::on_pointer(false), CardElevation::Resting);
    }
}
