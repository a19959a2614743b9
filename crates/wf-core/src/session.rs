use std::fmt;

use rand::Rng;

use crate::constants::CLUSTER_SIZE;
use crate::placement::{Placement, place_term};
use crate::term::TermSet;
use crate::tokenizer::tokenize;

/// Where a session sits in the text → terms → cubes flow.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// No token stream yet; waiting for source text.
    AwaitingText,
    /// Token stream held; term slots are editable.
    AwaitingTerms,
    /// Placements emitted; the session is finished.
    Visualized,
}

#[derive(Debug, PartialEq, Eq)]
pub enum SessionError {
    /// Terms were submitted before any source text.
    NoSourceText,
    /// The session already emitted its placements; start a new one.
    AlreadyVisualized,
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::NoSourceText => write!(f, "no source text submitted yet"),
            SessionError::AlreadyVisualized => {
                write!(f, "session already visualized; start a new session")
            }
        }
    }
}

impl std::error::Error for SessionError {}

/// Placements emitted for one active term slot.
#[derive(Clone, Debug)]
pub struct TermBatch {
    /// 1-based slot number, matching the UI field pairs.
    pub slot: usize,
    /// The normalized term that was matched.
    pub term: String,
    /// Number of exact occurrences found.
    pub matches: usize,
    pub placements: Vec<Placement>,
}

/// One analysis pass: source text in, placement batches out.
///
/// The session owns the token stream. It is rebuilt wholesale on every text
/// submission and read-only during the placement phase. A visualized
/// session is finished — analyzing different text means a new `Session`.
pub struct Session {
    phase: Phase,
    tokens: Vec<String>,
}

impl Session {
    pub fn new() -> Self {
        Self {
            phase: Phase::AwaitingText,
            tokens: Vec::new(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }

    /// Tokenize `text` and hold the stream for the placement phase.
    /// Resubmitting while terms are still editable replaces the previous
    /// stream outright. Returns the token count.
    pub fn submit_text(&mut self, text: &str) -> Result<usize, SessionError> {
        if self.phase == Phase::Visualized {
            return Err(SessionError::AlreadyVisualized);
        }
        self.tokens = tokenize(text);
        self.phase = Phase::AwaitingTerms;
        Ok(self.tokens.len())
    }

    /// Run the locator over every active slot in slot order and emit one
    /// batch per slot. Blank slots are skipped; a term with no occurrences
    /// produces an empty batch, not an error.
    pub fn submit_terms(
        &mut self,
        terms: &TermSet,
        rng: &mut impl Rng,
    ) -> Result<Vec<TermBatch>, SessionError> {
        match self.phase {
            Phase::AwaitingText => return Err(SessionError::NoSourceText),
            Phase::Visualized => return Err(SessionError::AlreadyVisualized),
            Phase::AwaitingTerms => {}
        }

        let mut batches = Vec::new();
        for (number, slot) in terms.active() {
            let term = slot.normalized_term();
            let placements = place_term(&self.tokens, &term, slot.color, rng);
            batches.push(TermBatch {
                slot: number,
                matches: placements.len() / CLUSTER_SIZE,
                term,
                placements,
            });
        }

        self.phase = Phase::Visualized;
        Ok(batches)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
