//! Configuration-driven wiring manifests
//!
//! A manifest describes names rather than instances: aliases that make one
//! registered instance reachable under additional names, and a list of
//! names a fully-registered container is required to provide. Code stays in
//! charge of constructing and registering the instances themselves.

use serde::{Deserialize, Serialize};

use crate::container::Container;
use crate::error::{WireError, WireResult};

/// One alias entry: `alias` resolves to whatever `target` resolves to
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AliasConfig {
    pub alias: String,
    pub target: String,
}

/// Declarative wiring manifest
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WiringConfig {
    /// Name aliases applied onto the container
    #[serde(default)]
    pub aliases: Vec<AliasConfig>,
    /// Names the container must provide after registration
    #[serde(default)]
    pub required: Vec<String>,
}

impl WiringConfig {
    /// Load a manifest from a TOML string
    pub fn from_toml(toml_str: &str) -> WireResult<Self> {
        toml::from_str(toml_str)
            .map_err(|e| WireError::Config(format!("failed to parse TOML: {e}")))
    }

    /// Load a manifest from a JSON string
    pub fn from_json(json_str: &str) -> WireResult<Self> {
        serde_json::from_str(json_str)
            .map_err(|e| WireError::Config(format!("failed to parse JSON: {e}")))
    }

    /// Register every alias on the container
    ///
    /// Each target must already be registered. Aliases become ordinary name
    /// registrations, with the usual overwrite policy.
    pub fn apply_to(&self, container: &mut Container) -> WireResult<()> {
        for entry in &self.aliases {
            let Some(handle) = container.get(&entry.target) else {
                return Err(WireError::Config(format!(
                    "alias {:?} points at unregistered name {:?}",
                    entry.alias, entry.target
                )));
            };
            container.add(handle, &entry.alias);
        }
        Ok(())
    }

    /// Check that every required name is provided
    pub fn verify(&self, container: &Container) -> WireResult<()> {
        for name in &self.required {
            if container.get(name).is_none() {
                return Err(WireError::Config(format!(
                    "required dependency {name:?} is not registered"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handle::{shared, Handle};

    #[test]
    fn parses_toml_and_applies_aliases() {
        let manifest = r#"
            required = ["Mailer"]

            [[aliases]]
            alias = "Mailer"
            target = "EmailGateway"
        "#;
        let config = WiringConfig::from_toml(manifest).unwrap();

        let mut container = Container::new();
        container.add(Handle::of(shared("smtp://mail".to_string())), "EmailGateway");
        config.apply_to(&mut container).unwrap();
        config.verify(&container).unwrap();

        let aliased = container.get("Mailer").unwrap();
        assert_eq!(aliased.type_name(), std::any::type_name::<String>());
    }

    #[test]
    fn verify_reports_missing_names() {
        let config = WiringConfig::from_json(r#"{ "required": ["Absent"] }"#).unwrap();
        let container = Container::new();
        assert!(matches!(config.verify(&container), Err(WireError::Config(_))));
    }

    #[test]
    fn alias_to_unregistered_target_fails() {
        let config = WiringConfig {
            aliases: vec![AliasConfig {
                alias: "Mailer".to_string(),
                target: "Absent".to_string(),
            }],
            required: Vec::new(),
        };
        let mut container = Container::new();
        assert!(matches!(
            config.apply_to(&mut container),
            Err(WireError::Config(_))
        ));
    }
}
