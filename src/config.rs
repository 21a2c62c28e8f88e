use serde::Deserialize;
use std::path::Path;

use crate::component::ComponentFamily;
use crate::version::error::ConfigError;

/// Operator-supplied version configuration.
///
/// Keys mirror the generation settings file:
/// `version`, `use_version_override`, and one `*_version` key per component family.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
pub struct VersionConfig {
    /// Version installed when no override applies
    #[serde(rename = "version")]
    pub default_version: String,
    /// Whether per-component overrides are honored
    #[serde(rename = "use_version_override", default)]
    pub override_enabled: bool,
    #[serde(flatten)]
    pub overrides: ComponentOverrides,
}

/// Per-component version overrides
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ComponentOverrides {
    pub pos_version: Option<String>,
    pub wdm_version: Option<String>,
    pub flow_service_version: Option<String>,
    pub lpa_service_version: Option<String>,
    pub storehub_service_version: Option<String>,
}

impl VersionConfig {
    pub fn new(default_version: &str) -> Self {
        Self {
            default_version: default_version.to_string(),
            ..Self::default()
        }
    }

    /// Parse a config from JSON text
    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Load a config from a JSON file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Returns the configured override for a family.
    ///
    /// Blank overrides count as unset.
    pub fn per_component_version(&self, family: ComponentFamily) -> Option<&str> {
        let value = match family {
            ComponentFamily::PointOfSale => &self.overrides.pos_version,
            ComponentFamily::WorkstationDeviceManager => &self.overrides.wdm_version,
            ComponentFamily::FlowService => &self.overrides.flow_service_version,
            ComponentFamily::LocalPosAgent => &self.overrides.lpa_service_version,
            ComponentFamily::StoreHub => &self.overrides.storehub_service_version,
        };
        value.as_deref().filter(|v| !v.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    #[test]
    fn version_config_from_partial_object_uses_defaults_for_missing_fields() {
        let result = serde_json::from_value::<VersionConfig>(json!({
            "version": "v1.0.0"
        }))
        .unwrap();

        assert_eq!(result, VersionConfig::new("v1.0.0"));
        assert!(!result.override_enabled);
    }

    #[test]
    fn version_config_from_full_object_parses_all_fields() {
        let result = serde_json::from_value::<VersionConfig>(json!({
            "version": "v1.0.0",
            "use_version_override": true,
            "pos_version": "v2.0.0",
            "wdm_version": "v2.1.0",
            "flow_service_version": "v2.2.0",
            "lpa_service_version": "v2.3.0",
            "storehub_service_version": "v2.4.0",
            "template": "ignored"
        }))
        .unwrap();

        assert_eq!(
            result,
            VersionConfig {
                default_version: "v1.0.0".to_string(),
                override_enabled: true,
                overrides: ComponentOverrides {
                    pos_version: Some("v2.0.0".to_string()),
                    wdm_version: Some("v2.1.0".to_string()),
                    flow_service_version: Some("v2.2.0".to_string()),
                    lpa_service_version: Some("v2.3.0".to_string()),
                    storehub_service_version: Some("v2.4.0".to_string()),
                },
            }
        );
    }

    #[test]
    fn version_config_requires_default_version() {
        let result = VersionConfig::from_json_str(r#"{"use_version_override": true}"#);

        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn per_component_version_treats_blank_override_as_unset() {
        let config = VersionConfig {
            overrides: ComponentOverrides {
                wdm_version: Some("  ".to_string()),
                pos_version: Some("v3.0.0".to_string()),
                ..ComponentOverrides::default()
            },
            ..VersionConfig::new("v1.0.0")
        };

        assert_eq!(
            config.per_component_version(ComponentFamily::WorkstationDeviceManager),
            None
        );
        assert_eq!(
            config.per_component_version(ComponentFamily::PointOfSale),
            Some("v3.0.0")
        );
        assert_eq!(config.per_component_version(ComponentFamily::StoreHub), None);
    }

    #[test]
    fn load_reads_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"version": "v1.0.0", "use_version_override": true, "wdm_version": "v2.0.0"}}"#
        )
        .unwrap();

        let config = VersionConfig::load(file.path()).unwrap();

        assert!(config.override_enabled);
        assert_eq!(config.overrides.wdm_version.as_deref(), Some("v2.0.0"));
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();

        let result = VersionConfig::load(&dir.path().join("missing.json"));

        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
