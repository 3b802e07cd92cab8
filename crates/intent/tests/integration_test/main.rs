/// Integration tests for intent resolution covering normalization chains,
/// confidence gating, suggestions, fixture catalogs and concurrent use.

mod builtin_catalog;
mod fixture_catalog;
mod helpers;
