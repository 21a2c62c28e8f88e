//! Per-component version selection
//!
//! Picks the literal version string to install for a component:
//! 1. overrides disabled, or no system type -> default version
//! 2. known system type with an override set -> the override
//! 3. anything else -> default version

use tracing::debug;

use crate::component::system_type::ComponentFamily;
use crate::config::VersionConfig;

/// A single resolution request, built fresh for every generation run
#[derive(Debug, Clone, Copy)]
pub struct ComponentVersionRequest<'a> {
    /// System-type identifier declared by the component
    pub system_type: &'a str,
    pub config: &'a VersionConfig,
}

impl<'a> ComponentVersionRequest<'a> {
    pub fn new(system_type: &'a str, config: &'a VersionConfig) -> Self {
        Self {
            system_type,
            config,
        }
    }

    /// Resolve the version string for this request, see [`resolve`]
    pub fn resolve(&self) -> String {
        resolve(self.system_type, self.config)
    }
}

/// Resolve which version string a component should install.
///
/// Returned strings are the operator's literal values; nothing is parsed or normalized.
pub fn resolve(system_type: &str, config: &VersionConfig) -> String {
    if !config.override_enabled || system_type.is_empty() {
        return config.default_version.clone();
    }

    let Some(family) = ComponentFamily::from_system_type(system_type) else {
        debug!(
            "Unknown system type '{}', using default version {}",
            system_type, config.default_version
        );
        return config.default_version.clone();
    };

    match config.per_component_version(family) {
        Some(version) => {
            debug!(
                "Using {} override {} for '{}'",
                family.override_key(),
                version,
                system_type
            );
            version.to_string()
        }
        None => config.default_version.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ComponentOverrides;
    use rstest::rstest;

    fn config(override_enabled: bool) -> VersionConfig {
        VersionConfig {
            default_version: "v1.0.0".to_string(),
            override_enabled,
            overrides: ComponentOverrides {
                pos_version: Some("v2.0.0-pos".to_string()),
                wdm_version: Some("v2.0.0".to_string()),
                flow_service_version: Some("v2.0.0-flow".to_string()),
                lpa_service_version: Some("v2.0.0-lpa".to_string()),
                storehub_service_version: None,
            },
        }
    }

    #[rstest]
    #[case("CSE-wdm", "v2.0.0")]
    #[case("CSE-WDM", "v2.0.0")]
    #[case("CSE-pos", "v2.0.0-pos")]
    #[case("CSE-flow-service", "v2.0.0-flow")]
    #[case("CSE-lpa", "v2.0.0-lpa")]
    #[case("CSE-storehub", "v1.0.0")] // known family without an override
    #[case("CSE-unknown", "v1.0.0")]
    #[case("cse-wdm", "v1.0.0")] // case-sensitive
    #[case("", "v1.0.0")]
    fn resolve_with_overrides_enabled(#[case] system_type: &str, #[case] expected: &str) {
        assert_eq!(resolve(system_type, &config(true)), expected);
    }

    #[rstest]
    #[case("CSE-wdm")]
    #[case("CSE-pos")]
    #[case("CSE-unknown")]
    #[case("")]
    fn resolve_with_overrides_disabled_returns_default(#[case] system_type: &str) {
        assert_eq!(resolve(system_type, &config(false)), "v1.0.0");
    }

    #[test]
    fn resolve_returns_literal_override_string() {
        let config = VersionConfig {
            override_enabled: true,
            overrides: ComponentOverrides {
                wdm_version: Some("not-a-version".to_string()),
                ..ComponentOverrides::default()
            },
            ..VersionConfig::new("v1.0.0")
        };

        assert_eq!(resolve("CSE-wdm", &config), "not-a-version");
    }

    #[test]
    fn request_resolve_matches_free_function() {
        let config = config(true);
        let request = ComponentVersionRequest::new("CSE-wdm", &config);

        assert_eq!(request.resolve(), resolve("CSE-wdm", &config));
    }
}
