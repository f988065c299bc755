//! Script host configuration.

use crate::scripting::FailurePolicy;

/// Name of the global table the bindings are installed under.
pub const DEFAULT_NAMESPACE: &str = "engine";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptConfig {
    pub namespace: String,
    pub policy: FailurePolicy,
}

impl Default for ScriptConfig {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_string(),
            policy: FailurePolicy::Silent,
        }
    }
}

impl ScriptConfig {
    /// Defaults, overridden by `SCRIPT_NAMESPACE` and `SCRIPT_STRICT`.
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    pub fn from_vars(get: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(namespace) = get("SCRIPT_NAMESPACE").filter(|ns| !ns.trim().is_empty()) {
            config.namespace = namespace.trim().to_string();
        }
        if let Some(strict) = get("SCRIPT_STRICT") {
            if matches!(strict.trim(), "1" | "true" | "yes") {
                config.policy = FailurePolicy::Strict;
            }
        }
        config
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    pub fn with_policy(mut self, policy: FailurePolicy) -> Self {
        self.policy = policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_without_variables() {
        assert_eq!(ScriptConfig::from_vars(vars(&[])), ScriptConfig::default());
    }

    #[test]
    fn variables_override_defaults() {
        let config = ScriptConfig::from_vars(vars(&[("SCRIPT_NAMESPACE", " game "), ("SCRIPT_STRICT", "1")]));
        assert_eq!(config.namespace, "game");
        assert_eq!(config.policy, FailurePolicy::Strict);
    }

    #[test]
    fn blank_namespace_and_falsy_strict_are_ignored() {
        let config = ScriptConfig::from_vars(vars(&[("SCRIPT_NAMESPACE", "  "), ("SCRIPT_STRICT", "0")]));
        assert_eq!(config, ScriptConfig::default());
    }
}
