use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::error::{CatalogError, Result};

/// What happens when an intent is resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntentEffect {
    /// Navigate to an application route.
    Route(String),
    /// Trigger an in-app action by name.
    Action(String),
    /// Information only; the caller answers without navigating.
    Inform,
}

/// A catalog entry mapping spoken phrasing to an effect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "IntentRecord", into = "IntentRecord")]
pub struct Intent {
    pub id: String,
    pub effect: IntentEffect,
    /// Highest-weighted match text.
    pub keywords: Vec<String>,
    /// Example utterances, medium weight.
    pub examples: Vec<String>,
    /// Free-text description, lowest weight.
    pub description: String,
}

impl Intent {
    pub fn route(&self) -> Option<&str> {
        match &self.effect {
            IntentEffect::Route(r) => Some(r),
            _ => None,
        }
    }

    pub fn action(&self) -> Option<&str> {
        match &self.effect {
            IntentEffect::Action(a) => Some(a),
            _ => None,
        }
    }
}

/// On-disk shape: `route` and `action` are separate optional keys.
#[derive(Debug, Serialize, Deserialize)]
struct IntentRecord {
    id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    route: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    action: Option<String>,
    #[serde(default)]
    keywords: Vec<String>,
    #[serde(default)]
    examples: Vec<String>,
    #[serde(default)]
    description: String,
}

impl From<Intent> for IntentRecord {
    fn from(intent: Intent) -> Self {
        let (route, action) = match intent.effect {
            IntentEffect::Route(r) => (Some(r), None),
            IntentEffect::Action(a) => (None, Some(a)),
            IntentEffect::Inform => (None, None),
        };
        IntentRecord {
            id: intent.id,
            route,
            action,
            keywords: intent.keywords,
            examples: intent.examples,
            description: intent.description,
        }
    }
}

impl TryFrom<IntentRecord> for Intent {
    type Error = String;

    fn try_from(record: IntentRecord) -> std::result::Result<Self, Self::Error> {
        let effect = match (record.route, record.action) {
            (Some(_), Some(_)) => {
                return Err(format!("intent '{}' has both a route and an action", record.id))
            }
            (Some(route), None) => IntentEffect::Route(route),
            (None, Some(action)) => IntentEffect::Action(action),
            (None, None) => IntentEffect::Inform,
        };
        Ok(Intent {
            id: record.id,
            effect,
            keywords: record.keywords,
            examples: record.examples,
            description: record.description,
        })
    }
}

/// Validated, immutable list of intents in catalog order.
///
/// Catalog order breaks ties between equally good matches.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IntentCatalog {
    intents: Vec<Intent>,
}

impl IntentCatalog {
    /// Build a catalog, rejecting empty or duplicate ids, empty effect
    /// targets, and intents with nothing to match against.
    pub fn new(intents: Vec<Intent>) -> Result<Self> {
        let mut seen = HashSet::new();
        for intent in &intents {
            if intent.id.trim().is_empty() {
                return Err(CatalogError::Validation("intent id must not be empty".into()));
            }
            if !seen.insert(intent.id.as_str()) {
                return Err(CatalogError::Validation(format!(
                    "duplicate intent id '{}'",
                    intent.id
                )));
            }
            match &intent.effect {
                IntentEffect::Route(r) if !r.starts_with('/') => {
                    return Err(CatalogError::Validation(format!(
                        "intent '{}': route '{}' must start with '/'",
                        intent.id, r
                    )));
                }
                IntentEffect::Action(a) if a.trim().is_empty() => {
                    return Err(CatalogError::Validation(format!(
                        "intent '{}': action must not be empty",
                        intent.id
                    )));
                }
                _ => {}
            }
            let has_text = intent
                .keywords
                .iter()
                .chain(intent.examples.iter())
                .chain(std::iter::once(&intent.description))
                .any(|t| !t.trim().is_empty());
            if !has_text {
                return Err(CatalogError::Validation(format!(
                    "intent '{}' has no keywords, examples or description",
                    intent.id
                )));
            }
        }
        Ok(Self { intents })
    }

    pub fn intents(&self) -> &[Intent] {
        &self.intents
    }

    pub fn get(&self, id: &str) -> Option<&Intent> {
        self.intents.iter().find(|i| i.id == id)
    }

    pub fn len(&self) -> usize {
        self.intents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intents.is_empty()
    }
}
