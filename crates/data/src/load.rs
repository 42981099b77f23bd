use anyhow::Context;
use icelatro_core::RulesConfig;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;
use tracing::debug;

pub const RULES_FILE: &str = "rules.json";

/// Reads and validates a rules file. Fields the file leaves out keep their
/// default values.
pub fn load_rules_config(path: &Path) -> anyhow::Result<RulesConfig> {
    let rules: RulesConfig = load_json(path)?;
    rules
        .validate()
        .with_context(|| format!("validate {}", path.display()))?;
    debug!(path = %path.display(), ?rules, "loaded rules");
    Ok(rules)
}

/// Loads `rules.json` from `dir`, or the default rules when the file is absent.
pub fn load_rules_config_or_default(dir: &Path) -> anyhow::Result<RulesConfig> {
    let path = dir.join(RULES_FILE);
    if !path.exists() {
        debug!(path = %path.display(), "no rules file, using defaults");
        return Ok(RulesConfig::default());
    }
    load_rules_config(&path)
}

fn load_json<T: DeserializeOwned>(path: impl AsRef<Path>) -> anyhow::Result<T> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let value = serde_json::from_str(&raw).with_context(|| format!("parse {}", path.display()))?;
    Ok(value)
}
