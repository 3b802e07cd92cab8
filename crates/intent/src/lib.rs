//! Voice intent resolution.
//!
//! This crate provides:
//! - An immutable intent catalog (built-in or YAML) with validation
//! - An ordered transcript correction table for common mis-transcriptions
//! - Approximate, location-independent matching over weighted intent fields
//! - Confidence gating, ranked suggestions and a tagged [`Resolution`]

pub mod catalog;
pub mod fuzzy;
pub mod normalize;
pub mod resolver;

pub use catalog::{CatalogError, Intent, IntentCatalog, IntentEffect};
pub use normalize::{CorrectionRule, CorrectionTable};
pub use resolver::{IntentResolver, MatchResult, MatchedField, Resolution, ResolverConfig};
