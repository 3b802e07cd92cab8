//! Transcript normalization: an ordered table of literal corrections for
//! phrases speech recognizers commonly get wrong.
//!
//! Rules run top to bottom and each one sees the output of the rules before
//! it, so a later rule may match text an earlier rule produced (for example
//! `"take me to"` becomes `"navigate"` before `"navigate safety"` is
//! rewritten). Reordering the table changes results.

use serde::{Deserialize, Serialize};

/// One literal replacement. Patterns are matched against lowercased text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorrectionRule {
    pub from: String,
    pub to: String,
}

impl CorrectionRule {
    pub fn new(from: &str, to: &str) -> Self {
        Self {
            from: from.to_lowercase(),
            to: to.to_lowercase(),
        }
    }
}

/// Ordered correction rules applied by [`CorrectionTable::normalize`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CorrectionTable {
    rules: Vec<CorrectionRule>,
}

const BUILTIN_RULES: &[(&str, &str)] = &[
    // Navigation phrasing collapses to a single verb.
    ("take me to the", "navigate"),
    ("take me to", "navigate"),
    ("go to the", "navigate"),
    ("go to", "navigate"),
    ("open up", "open"),
    // Filler.
    ("i would like to", ""),
    ("i want to", ""),
    ("can you", ""),
    ("please", ""),
    // Split or misheard words.
    ("pot hole", "pothole"),
    ("port hole", "pothole"),
    ("street light", "streetlight"),
    ("gar bage", "garbage"),
    ("drain age", "drainage"),
    ("heatmap", "heat map"),
    ("heat mat", "heat map"),
    ("hit map", "heat map"),
    ("skam", "scam"),
    ("skim", "scam"),
    ("scum", "scam"),
    ("fraught", "fraud"),
    ("schemas", "schemes"),
    ("skeems", "schemes"),
    ("electric city", "electricity"),
    ("build payment", "bill payment"),
    ("pay build", "pay bill"),
    ("s o s", "sos"),
    ("s.o.s", "sos"),
    ("save route", "safe route"),
    ("hindhi", "hindi"),
    ("canada", "kannada"),
    // Rewrites of the normalized navigation verb.
    ("navigate safety", "safety"),
    ("navigate home", "home"),
    ("navigate dashboard", "dashboard"),
];

impl CorrectionTable {
    pub fn new(rules: Vec<CorrectionRule>) -> Self {
        Self { rules }
    }

    /// The application's default correction table.
    pub fn builtin() -> Self {
        Self::new(
            BUILTIN_RULES
                .iter()
                .map(|(from, to)| CorrectionRule::new(from, to))
                .collect(),
        )
    }

    pub fn rules(&self) -> &[CorrectionRule] {
        &self.rules
    }

    /// Lowercase and trim, apply every rule in order, then collapse runs of
    /// whitespace to single spaces.
    ///
    /// Empty or whitespace-only input yields an empty string.
    pub fn normalize(&self, transcript: &str) -> String {
        let mut text = transcript.trim().to_lowercase();
        for rule in &self.rules {
            if rule.from.is_empty() {
                continue;
            }
            if text.contains(rule.from.as_str()) {
                text = text.replace(rule.from.as_str(), &rule.to);
            }
        }
        text.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}
