use crate::error::*;

use serde::*;

use std::collections::{BTreeMap};

/// The default namespace that the scene ABI is imported from
pub const DEFAULT_ABI_NAMESPACE: &str = "flo_scene";

///
/// The names of the exports that the lifecycle looks for in a guest module
///
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ScriptExportNames {
    /// Called once, before `on_start`, the first time the script is updated
    pub entry_point: String,

    /// Called once, the first time the script is updated
    pub on_start: String,

    /// Called every update
    pub on_update: String,

    /// Called when the element that owns the script is selected
    pub on_select: String,

    /// Called with `(descriptor, element_kind, event_kind, user_data)` for events the script registered for
    pub on_event: String,
}

///
/// Configures how scripts are linked and what they see of their environment
///
/// Can be loaded from RON, for example:
///
/// ```
/// # use flo_scene_script::*;
/// let config = ScriptConfig::from_ron(r#"(env: { "LEVEL": "debug" })"#).unwrap();
/// assert!(config.env.get("LEVEL") == Some(&"debug".to_string()));
/// ```
///
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ScriptConfig {
    /// The argument vector returned by `args_get`
    pub args: Vec<String>,

    /// The environment returned by `environ_get`
    pub env: BTreeMap<String, String>,

    /// The import namespace for the scene ABI functions
    pub abi_namespace: String,

    /// The exports that make up the script lifecycle
    pub exports: ScriptExportNames,
}

impl Default for ScriptExportNames {
    fn default() -> ScriptExportNames {
        ScriptExportNames {
            entry_point:    "_start".into(),
            on_start:       "on_start".into(),
            on_update:      "on_update".into(),
            on_select:      "on_select".into(),
            on_event:       "on_element_event".into(),
        }
    }
}

impl Default for ScriptConfig {
    fn default() -> ScriptConfig {
        ScriptConfig {
            args:           vec![],
            env:            BTreeMap::new(),
            abi_namespace:  DEFAULT_ABI_NAMESPACE.into(),
            exports:        ScriptExportNames::default(),
        }
    }
}

impl ScriptConfig {
    ///
    /// Reads a configuration from RON text. Any fields that are left out take their default values.
    ///
    pub fn from_ron(text: &str) -> Result<ScriptConfig, ScriptError> {
        Ok(ron::from_str(text)?)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn empty_config_is_default() {
        assert!(ScriptConfig::from_ron("()").unwrap() == ScriptConfig::default());
    }

    #[test]
    fn override_export_names() {
        let config = ScriptConfig::from_ron(r#"(abi_namespace: "scene", exports: (on_update: "tick"))"#).unwrap();

        assert!(config.abi_namespace == "scene");
        assert!(config.exports.on_update == "tick");
        assert!(config.exports.on_start == "on_start");
    }

    #[test]
    fn bad_config_is_an_error() {
        assert!(matches!(ScriptConfig::from_ron("(args: 3)"), Err(ScriptError::Config(_))));
    }
}
