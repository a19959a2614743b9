use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::constants::TERM_SLOTS;

/// One search-term slot: the term text and the color its cubes take.
///
/// A slot whose term is empty or whitespace-only is inactive and skipped
/// by the placement phase.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TermSlot {
    pub term: String,
    pub color: Color,
}

impl TermSlot {
    pub fn new(term: &str, color: Color) -> Self {
        Self {
            term: term.to_string(),
            color,
        }
    }

    pub fn blank() -> Self {
        Self::new("", Color::WHITE)
    }

    pub fn is_active(&self) -> bool {
        !self.term.trim().is_empty()
    }

    /// Canonical form matched against the token stream: trimmed and
    /// lowercased, so a capitalized term still matches the folded tokens.
    pub fn normalized_term(&self) -> String {
        self.term.trim().to_lowercase()
    }
}

/// The fixed set of term slots configured for one visualization pass.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TermSet {
    pub slots: [TermSlot; TERM_SLOTS],
}

impl TermSet {
    pub fn new() -> Self {
        Self {
            slots: std::array::from_fn(|_| TermSlot::blank()),
        }
    }

    /// Active slots in slot order, numbered 1-based to match the UI fields.
    pub fn active(&self) -> impl Iterator<Item = (usize, &TermSlot)> {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_active())
            .map(|(i, slot)| (i + 1, slot))
    }
}

impl Default for TermSet {
    fn default() -> Self {
        Self::new()
    }
}
