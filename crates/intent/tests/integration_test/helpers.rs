use civic_intent::{IntentCatalog, IntentResolver};

pub const FIXTURE_YAML: &str = r#"
intents:
  - id: water_tanker
    route: /water/tanker
    keywords: [water tanker]
  - id: pay_tax
    route: /tax
    keywords: [property tax]
    examples: ["pay my property tax"]
    description: Pay municipal property tax
  - id: helpline
    action: call_helpline
    keywords: [helpline]
"#;

pub fn builtin_resolver() -> IntentResolver {
    IntentResolver::new(IntentCatalog::builtin())
}

pub fn fixture_resolver() -> IntentResolver {
    IntentResolver::new(IntentCatalog::from_yaml_str(FIXTURE_YAML).expect("fixture catalog"))
}
