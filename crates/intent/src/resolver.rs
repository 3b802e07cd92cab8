//! Transcript → intent resolution.
//!
//! 1. Normalize the transcript with the correction table.
//! 2. Score every intent: each of its three fields (keywords, examples,
//!    description) contributes its best [`match_score`] when that score
//!    clears [`FIELD_MATCH_THRESHOLD`], and the contributions combine as a
//!    weighted product `Π scoreᶠ^weightᶠ`. Intents with no contributing
//!    field are not candidates.
//! 3. Convert the best score to `confidence = round((1 - score) * 100)` and
//!    commit only at or above the configured floor.

use civic_core::config::IntentConfig;
use serde::Serialize;
use tracing::debug;

use crate::catalog::{CatalogError, Intent, IntentCatalog};
use crate::fuzzy::match_score;
use crate::normalize::CorrectionTable;

/// A field's best entry must score at or below this to count at all.
pub const FIELD_MATCH_THRESHOLD: f64 = 0.6;

const KEYWORD_WEIGHT: f64 = 3.0;
const EXAMPLE_WEIGHT: f64 = 2.0;
const DESCRIPTION_WEIGHT: f64 = 1.0;
const TOTAL_WEIGHT: f64 = KEYWORD_WEIGHT + EXAMPLE_WEIGHT + DESCRIPTION_WEIGHT;

/// Which intent field produced the strongest match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchedField {
    Keywords,
    Examples,
    Description,
}

/// Thresholds for committing to a match and for listing suggestions.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolverConfig {
    /// Minimum confidence for [`IntentResolver::resolve_intent`] to commit.
    pub confidence_floor: u8,
    /// Suggestions must score strictly below this dissimilarity.
    pub suggestion_max_score: f64,
    /// Number of suggestions returned by [`IntentResolver::suggest`].
    pub suggestion_limit: usize,
    /// Query and field texts shorter than this are never matched.
    pub min_match_len: usize,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            confidence_floor: 65,
            suggestion_max_score: 0.6,
            suggestion_limit: 3,
            min_match_len: 3,
        }
    }
}

impl From<&IntentConfig> for ResolverConfig {
    fn from(cfg: &IntentConfig) -> Self {
        Self {
            confidence_floor: cfg.confidence_floor.min(100),
            suggestion_max_score: cfg.suggestion_max_score,
            suggestion_limit: cfg.suggestion_limit,
            min_match_len: cfg.min_match_len,
        }
    }
}

/// A catalog intent matched against a transcript.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult<'a> {
    pub intent: &'a Intent,
    /// 0-100, higher is better.
    pub confidence: u8,
    /// Raw dissimilarity in [0, 1], lower is better.
    pub score: f64,
    pub matched_field: MatchedField,
    /// Transcript after correction, kept for audit and debugging.
    pub normalized_transcript: String,
}

/// Outcome of [`IntentResolver::resolve`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Resolution<'a> {
    /// Confident match at or above the floor.
    Matched(MatchResult<'a>),
    /// Nothing cleared the floor but these are plausible; ask the user.
    Ambiguous { candidates: Vec<MatchResult<'a>> },
    /// Nothing plausible.
    NoMatch,
}

/// Lowercased char buffers for one intent, built once per resolver.
#[derive(Debug, Clone)]
struct PreparedIntent {
    keywords: Vec<Vec<char>>,
    examples: Vec<Vec<char>>,
    description: Vec<Vec<char>>,
}

impl PreparedIntent {
    fn new(intent: &Intent) -> Self {
        fn prep(texts: &[String]) -> Vec<Vec<char>> {
            texts
                .iter()
                .map(|t| t.trim().to_lowercase().chars().collect::<Vec<char>>())
                .filter(|t| !t.is_empty())
                .collect()
        }
        Self {
            keywords: prep(&intent.keywords),
            examples: prep(&intent.examples),
            description: prep(std::slice::from_ref(&intent.description)),
        }
    }

    fn fields(&self) -> [(MatchedField, f64, &[Vec<char>]); 3] {
        [
            (MatchedField::Keywords, KEYWORD_WEIGHT / TOTAL_WEIGHT, self.keywords.as_slice()),
            (MatchedField::Examples, EXAMPLE_WEIGHT / TOTAL_WEIGHT, self.examples.as_slice()),
            (MatchedField::Description, DESCRIPTION_WEIGHT / TOTAL_WEIGHT, self.description.as_slice()),
        ]
    }

    /// Weighted-product score over the fields that matched, with the field
    /// that matched best.
    fn score(&self, query: &[char], min_len: usize) -> Option<(f64, MatchedField)> {
        let mut total = 1.0;
        let mut best: Option<(f64, MatchedField)> = None;

        for (field, weight, texts) in self.fields() {
            let field_score = texts
                .iter()
                .filter_map(|t| match_score(query, t, min_len))
                .fold(None, |acc: Option<f64>, s| Some(acc.map_or(s, |a| a.min(s))));

            let Some(s) = field_score else { continue };
            if s > FIELD_MATCH_THRESHOLD {
                continue;
            }

            total *= s.max(f64::EPSILON).powf(weight);
            if best.map_or(true, |(b, _)| s < b) {
                best = Some((s, field));
            }
        }

        best.map(|(_, field)| (total.clamp(0.0, 1.0), field))
    }
}

#[derive(Debug, Clone, Copy)]
struct Candidate {
    index: usize,
    score: f64,
    field: MatchedField,
}

/// `round((1 - score) * 100)`, clamped to 0-100.
pub fn confidence_from_score(score: f64) -> u8 {
    ((1.0 - score.clamp(0.0, 1.0)) * 100.0).round() as u8
}

/// Resolves spoken transcripts against an owned, immutable intent catalog.
///
/// Holds no interior mutability; share it freely across threads.
#[derive(Debug, Clone)]
pub struct IntentResolver {
    catalog: IntentCatalog,
    corrections: CorrectionTable,
    config: ResolverConfig,
    prepared: Vec<PreparedIntent>,
}

impl IntentResolver {
    /// Resolver with the built-in correction table and default thresholds.
    pub fn new(catalog: IntentCatalog) -> Self {
        let prepared = catalog.intents().iter().map(PreparedIntent::new).collect();
        Self {
            catalog,
            corrections: CorrectionTable::builtin(),
            config: ResolverConfig::default(),
            prepared,
        }
    }

    /// Resolver over the catalog named by `cfg.catalog_path`, or the
    /// built-in catalog when none is configured.
    pub fn from_config(cfg: &IntentConfig) -> Result<Self, CatalogError> {
        let catalog = match &cfg.catalog_path {
            Some(path) => IntentCatalog::load_file(path)?,
            None => IntentCatalog::builtin(),
        };
        Ok(Self::new(catalog).with_config(ResolverConfig::from(cfg)))
    }

    pub fn with_corrections(mut self, corrections: CorrectionTable) -> Self {
        self.corrections = corrections;
        self
    }

    pub fn with_config(mut self, config: ResolverConfig) -> Self {
        self.config = config;
        self
    }

    pub fn catalog(&self) -> &IntentCatalog {
        &self.catalog
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Apply the correction table to a raw transcript.
    pub fn normalize(&self, transcript: &str) -> String {
        self.corrections.normalize(transcript)
    }

    /// Every intent with at least one matching field, best first. Ties keep
    /// catalog order.
    fn candidates(&self, normalized: &str) -> Vec<Candidate> {
        let query: Vec<char> = normalized.chars().collect();
        if query.len() < self.config.min_match_len.max(1) {
            return Vec::new();
        }

        let mut candidates: Vec<Candidate> = self
            .prepared
            .iter()
            .enumerate()
            .filter_map(|(index, p)| {
                p.score(&query, self.config.min_match_len)
                    .map(|(score, field)| Candidate { index, score, field })
            })
            .collect();
        candidates.sort_by(|a, b| a.score.total_cmp(&b.score));
        candidates
    }

    fn to_match(&self, candidate: Candidate, normalized: &str) -> MatchResult<'_> {
        MatchResult {
            intent: &self.catalog.intents()[candidate.index],
            confidence: confidence_from_score(candidate.score),
            score: candidate.score,
            matched_field: candidate.field,
            normalized_transcript: normalized.to_string(),
        }
    }

    /// Best intent for `transcript` if its confidence reaches the floor.
    pub fn resolve_intent(&self, transcript: &str) -> Option<MatchResult<'_>> {
        let normalized = self.normalize(transcript);
        let best = self.candidates(&normalized).into_iter().next();

        let Some(best) = best else {
            debug!(transcript = %normalized, "no intent candidates");
            return None;
        };

        let result = self.to_match(best, &normalized);
        debug!(
            transcript = %normalized,
            intent = %result.intent.id,
            confidence = result.confidence,
            "best intent candidate"
        );
        (result.confidence >= self.config.confidence_floor).then_some(result)
    }

    /// Up to `limit` plausible intents (score below the suggestion ceiling),
    /// best first, for disambiguation prompts.
    pub fn rank_candidates(&self, transcript: &str, limit: usize) -> Vec<MatchResult<'_>> {
        let normalized = self.normalize(transcript);
        self.candidates(&normalized)
            .into_iter()
            .filter(|c| c.score < self.config.suggestion_max_score)
            .take(limit)
            .map(|c| self.to_match(c, &normalized))
            .collect()
    }

    /// [`rank_candidates`](Self::rank_candidates) with the configured limit.
    pub fn suggest(&self, transcript: &str) -> Vec<MatchResult<'_>> {
        self.rank_candidates(transcript, self.config.suggestion_limit)
    }

    /// Commit to a match, fall back to suggestions, or report no match.
    pub fn resolve(&self, transcript: &str) -> Resolution<'_> {
        if let Some(matched) = self.resolve_intent(transcript) {
            return Resolution::Matched(matched);
        }
        let candidates = self.suggest(transcript);
        if candidates.is_empty() {
            Resolution::NoMatch
        } else {
            Resolution::Ambiguous { candidates }
        }
    }
}
