//! Intent catalog: the fixed set of things a spoken command can trigger.
//!
//! The catalog is built once (from [`IntentCatalog::builtin`] or a YAML
//! file) and is read-only afterwards. Resolvers own their catalog, so tests
//! can inject fixtures without touching process-wide state.

mod builtin;
mod error;
mod loader;
mod types;

pub use self::error::{CatalogError, Result};
pub use self::types::{Intent, IntentCatalog, IntentEffect};
