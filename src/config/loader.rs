//! Configuration file discovery, merging and loading.
//!
//! Config files are layered; later layers override earlier ones:
//! 1. User global config (`~/.devready/config.yml`)
//! 2. Project config (`<workspace>/.devready/config.yml`)
//! 3. An explicit file passed with `--config`
//!
//! Layers are merged as raw YAML before being parsed into
//! [`DevreadyConfig`]: mappings merge key by key, lists and scalars are
//! replaced, and a `null` in a later layer deletes the key.

use crate::config::schema::DevreadyConfig;
use crate::error::{DevreadyError, Result};
use serde_yaml::Value;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_DIR: &str = ".devready";
const CONFIG_FILE: &str = "config.yml";

/// Paths to configuration files in merge order.
#[derive(Debug, Clone, Default)]
pub struct ConfigPaths {
    /// User's global config: ~/.devready/config.yml
    pub user_global: Option<PathBuf>,

    /// Project config: <workspace>/.devready/config.yml
    pub project: Option<PathBuf>,

    /// Explicit config file (must exist)
    pub explicit: Option<PathBuf>,
}

impl ConfigPaths {
    /// Discover config files for the given workspace.
    pub fn discover(workspace_root: Option<&Path>, explicit: Option<&Path>) -> Self {
        Self::discover_with_home(dirs::home_dir().as_deref(), workspace_root, explicit)
    }

    /// Discover config files with an explicit home directory.
    pub fn discover_with_home(
        home: Option<&Path>,
        workspace_root: Option<&Path>,
        explicit: Option<&Path>,
    ) -> Self {
        Self {
            user_global: home.and_then(existing_config_in),
            project: workspace_root.and_then(existing_config_in),
            explicit: explicit.map(Path::to_path_buf),
        }
    }

    /// All config paths in merge order.
    pub fn all(&self) -> Vec<&PathBuf> {
        [&self.user_global, &self.project, &self.explicit]
            .into_iter()
            .flatten()
            .collect()
    }
}

fn existing_config_in(dir: &Path) -> Option<PathBuf> {
    let path = dir.join(CONFIG_DIR).join(CONFIG_FILE);
    if path.is_file() {
        Some(path)
    } else {
        None
    }
}

/// Deep merge `overlay` onto `base`.
pub fn deep_merge(base: &Value, overlay: &Value) -> Value {
    match (base, overlay) {
        (Value::Mapping(base_map), Value::Mapping(overlay_map)) => {
            let mut merged = base_map.clone();
            for (key, value) in overlay_map {
                match (value.is_null(), base_map.get(key)) {
                    (true, _) => {
                        merged.remove(key);
                    }
                    (false, Some(existing)) => {
                        merged.insert(key.clone(), deep_merge(existing, value));
                    }
                    (false, None) => {
                        merged.insert(key.clone(), value.clone());
                    }
                }
            }
            Value::Mapping(merged)
        }
        (_, overlay) => overlay.clone(),
    }
}

/// Load a config file as raw YAML.
///
/// An empty file loads as an empty mapping.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist and
/// `ConfigParseError` if the YAML is invalid.
pub fn load_config_value(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            DevreadyError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            DevreadyError::Io(e)
        }
    })?;

    let value: Value =
        serde_yaml::from_str(&content).map_err(|e| DevreadyError::ConfigParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    Ok(match value {
        Value::Null => Value::Mapping(Default::default()),
        other => other,
    })
}

/// Load and merge every discovered config layer.
///
/// No config file at all yields the defaults.
pub fn load_config_from(paths: &ConfigPaths) -> Result<DevreadyConfig> {
    let mut merged = Value::Mapping(Default::default());
    let mut last_path = None;

    for path in paths.all() {
        let value = load_config_value(path)?;
        merged = deep_merge(&merged, &value);
        last_path = Some(path.clone());
    }

    serde_yaml::from_value(merged).map_err(|e| DevreadyError::ConfigParseError {
        path: last_path.unwrap_or_default(),
        message: e.to_string(),
    })
}

/// Discover, merge and parse the configuration for a workspace.
pub fn load_config(
    workspace_root: Option<&Path>,
    explicit: Option<&Path>,
) -> Result<DevreadyConfig> {
    let paths = ConfigPaths::discover(workspace_root, explicit);
    tracing::debug!(?paths, "Loading configuration");
    load_config_from(&paths)
}
