use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Load .env file (silently ignores if missing).
pub fn load_dotenv() {
    dotenvy::dotenv().ok();
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_opt(key: &str) -> Option<String> {
    env::var(key).ok().filter(|s| !s.is_empty())
}

/// Read a profiled env var: tries {PROFILE}_{KEY} first, falls back to {KEY}.
fn profiled_env_opt(profile: &str, key: &str) -> Option<String> {
    if !profile.is_empty() {
        let prefixed = format!("{}_{}", profile, key);
        if let Some(v) = env_opt(&prefixed) {
            return Some(v);
        }
    }
    env_opt(key)
}

fn profiled_env_parse<T: std::str::FromStr>(profile: &str, key: &str, default: T) -> T {
    profiled_env_opt(profile, key)
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

// ── Top-level config ──────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Active profile name (empty = default).
    pub profile: String,
    pub heatmap: HeatmapConfig,
    pub intent: IntentConfig,
}

impl Config {
    /// Build config from environment variables (call `load_dotenv()` first).
    /// Profile is read from `CIVIC_PROFILE`. When set (e.g. `STAGING`),
    /// every key is first looked up as `{PROFILE}_{KEY}`, falling back to `{KEY}`.
    pub fn from_env() -> Self {
        let profile = env_or("CIVIC_PROFILE", "").to_uppercase();
        Self::for_profile(&profile)
    }

    /// Build config for a specific named profile (empty string = default).
    pub fn for_profile(profile: &str) -> Self {
        let p = profile.to_uppercase();
        let p = p.as_str();
        Self {
            profile: p.to_string(),
            heatmap: HeatmapConfig::from_env_profiled(p),
            intent: IntentConfig::from_env_profiled(p),
        }
    }

    pub fn profile_label(&self) -> &str {
        if self.profile.is_empty() { "default" } else { &self.profile }
    }

    /// Print a summary for startup logs.
    pub fn log_summary(&self) {
        tracing::info!("Config loaded (profile: {}):", self.profile_label());
        tracing::info!(
            "  heatmap:  cluster_radius={}m, duplicate_radius={}m, high_priority>{} (top {})",
            self.heatmap.cluster_radius_m,
            self.heatmap.duplicate_radius_m,
            self.heatmap.high_priority_intensity,
            self.heatmap.high_priority_limit
        );
        tracing::info!(
            "  intent:   floor={}, suggest<{} (top {}), catalog={}",
            self.intent.confidence_floor,
            self.intent.suggestion_max_score,
            self.intent.suggestion_limit,
            self.intent
                .catalog_path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "(builtin)".to_string())
        );
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            profile: String::new(),
            heatmap: HeatmapConfig::default(),
            intent: IntentConfig::default(),
        }
    }
}

// ── Heat map ──────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeatmapConfig {
    /// Reports of one category within this distance of a seed join its cluster.
    pub cluster_radius_m: f64,
    /// Same-category reports within this distance count as duplicates.
    pub duplicate_radius_m: f64,
    /// Clusters strictly above this intensity are high priority.
    pub high_priority_intensity: f64,
    /// Maximum number of high-priority areas reported in stats.
    pub high_priority_limit: usize,
}

impl Default for HeatmapConfig {
    fn default() -> Self {
        Self {
            cluster_radius_m: 20.0,
            duplicate_radius_m: 10.0,
            high_priority_intensity: 0.7,
            high_priority_limit: 5,
        }
    }
}

impl HeatmapConfig {
    fn from_env_profiled(p: &str) -> Self {
        let d = Self::default();
        Self {
            cluster_radius_m: positive_or(
                profiled_env_parse(p, "CLUSTER_RADIUS_M", d.cluster_radius_m),
                d.cluster_radius_m,
            ),
            duplicate_radius_m: positive_or(
                profiled_env_parse(p, "DUPLICATE_RADIUS_M", d.duplicate_radius_m),
                d.duplicate_radius_m,
            ),
            high_priority_intensity: profiled_env_parse(
                p,
                "HIGH_PRIORITY_INTENSITY",
                d.high_priority_intensity,
            ),
            high_priority_limit: profiled_env_parse(p, "HIGH_PRIORITY_LIMIT", d.high_priority_limit),
        }
    }
}

fn positive_or(value: f64, default: f64) -> f64 {
    if value.is_finite() && value > 0.0 { value } else { default }
}

// ── Intent resolution ─────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntentConfig {
    /// Minimum confidence (0-100) for a committed match.
    pub confidence_floor: u8,
    /// Suggestions must score strictly below this dissimilarity.
    pub suggestion_max_score: f64,
    /// Default number of suggestions returned.
    pub suggestion_limit: usize,
    /// Shortest field text or query the matcher will consider.
    pub min_match_len: usize,
    /// Optional YAML catalog replacing the built-in one.
    pub catalog_path: Option<PathBuf>,
}

impl Default for IntentConfig {
    fn default() -> Self {
        Self {
            confidence_floor: 65,
            suggestion_max_score: 0.6,
            suggestion_limit: 3,
            min_match_len: 3,
            catalog_path: None,
        }
    }
}

impl IntentConfig {
    fn from_env_profiled(p: &str) -> Self {
        let d = Self::default();
        Self {
            confidence_floor: profiled_env_parse(p, "INTENT_CONFIDENCE_FLOOR", d.confidence_floor)
                .min(100),
            suggestion_max_score: profiled_env_parse(
                p,
                "INTENT_SUGGESTION_MAX_SCORE",
                d.suggestion_max_score,
            ),
            suggestion_limit: profiled_env_parse(p, "INTENT_SUGGESTION_LIMIT", d.suggestion_limit),
            min_match_len: profiled_env_parse(p, "INTENT_MIN_MATCH_LEN", d.min_match_len),
            catalog_path: profiled_env_opt(p, "INTENT_CATALOG_PATH").map(PathBuf::from),
        }
    }
}
