//! Typed analysis configuration: the source-text field plus three
//! (term, color) slot pairs, validated before anything reaches the core.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use wf_core::{Color, TermSet, TermSlot};

use crate::markdown;

/// Analysis file layout:
///
/// ```toml
/// source-text = "The quick brown fox..."   # or: source-file = "doc.md"
/// term1 = "fox"
/// color1 = "#aa00ff"
/// term2 = "dog"
/// color2 = "#00ffaa"
/// term3 = ""
/// ```
///
/// Blank terms leave the slot inactive; omitted colors default to white.
/// Unknown keys are rejected.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct AnalysisConfig {
    pub source_text: Option<String>,
    pub source_file: Option<PathBuf>,
    #[serde(default)]
    pub term1: String,
    pub color1: Option<Color>,
    #[serde(default)]
    pub term2: String,
    pub color2: Option<Color>,
    #[serde(default)]
    pub term3: String,
    pub color3: Option<Color>,
}

impl AnalysisConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("invalid config {}", path.display()))
    }

    /// Resolve the source text: inline text wins over a source file.
    pub fn resolve_source(&self) -> Result<String> {
        if let Some(text) = &self.source_text {
            return Ok(text.clone());
        }
        if let Some(path) = &self.source_file {
            return read_source_file(path);
        }
        bail!("config needs either source-text or source-file");
    }

    /// Build the term set from the three slot pairs.
    pub fn term_set(&self) -> TermSet {
        let mut set = TermSet::new();
        let pairs = [
            (&self.term1, self.color1),
            (&self.term2, self.color2),
            (&self.term3, self.color3),
        ];
        for (i, (term, color)) in pairs.into_iter().enumerate() {
            set.slots[i] = TermSlot::new(term, color.unwrap_or(Color::WHITE));
        }
        set
    }
}

/// Read source text from a file; `.md` sources are stripped of markup first.
pub fn read_source_file(path: &Path) -> Result<String> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let is_markdown = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("md"));
    if is_markdown {
        Ok(markdown::extract_text(&content))
    } else {
        Ok(content)
    }
}
