//! Resolved probe settings.
//!
//! [`ProbeConfig`] is what the verification engine is constructed with:
//! every installation-dependent path is resolved up front so the checks
//! never consult the environment themselves.

use std::path::{Path, PathBuf};

use crate::config::schema::{CommandsConfig, DevreadyConfig};

/// Environment variables consulted for the Android SDK root, in order.
const SDK_ROOT_VARS: &[&str] = &["ANDROID_HOME", "ANDROID_SDK_ROOT"];

/// Fully resolved settings for the dependency probes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeConfig {
    /// Path to the Android emulator binary.
    pub emulator_path: PathBuf,
    /// Path to the Android sdkmanager binary.
    pub sdk_manager_path: PathBuf,
    /// CocoaPods lockfile name inside the iOS source directory.
    pub ios_lockfile: String,
    /// Installed pods directory name inside the iOS source directory.
    pub ios_pods_dir: String,
    /// Command lines for the command probes.
    pub commands: CommandsConfig,
}

impl ProbeConfig {
    /// Resolve settings using the process environment.
    pub fn resolve(config: &DevreadyConfig) -> Self {
        Self::resolve_with_env(config, |key: &str| std::env::var(key))
    }

    /// Resolve settings with a custom env var lookup function.
    ///
    /// This allows testing without modifying actual environment variables.
    pub fn resolve_with_env<F>(config: &DevreadyConfig, env_fn: F) -> Self
    where
        F: Fn(&str) -> Result<String, std::env::VarError>,
    {
        let sdk_root = config
            .android
            .sdk_root
            .clone()
            .or_else(|| {
                SDK_ROOT_VARS
                    .iter()
                    .filter_map(|var| env_fn(var).ok())
                    .find(|val| !val.is_empty())
                    .map(PathBuf::from)
            })
            .unwrap_or_else(default_sdk_root);

        let emulator_path = config
            .android
            .emulator_path
            .clone()
            .unwrap_or_else(|| emulator_in(&sdk_root));
        let sdk_manager_path = config
            .android
            .sdk_manager_path
            .clone()
            .unwrap_or_else(|| sdk_manager_in(&sdk_root));

        Self {
            emulator_path,
            sdk_manager_path,
            ios_lockfile: config.ios.lockfile.clone(),
            ios_pods_dir: config.ios.pods_dir.clone(),
            commands: config.commands.clone(),
        }
    }

    /// The sdkmanager version query, with the binary path quoted.
    pub fn sdk_manager_version_command(&self) -> String {
        format!("\"{}\" --version", self.sdk_manager_path.display())
    }
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self::resolve(&DevreadyConfig::default())
    }
}

fn emulator_in(sdk_root: &Path) -> PathBuf {
    let binary = if cfg!(target_os = "windows") {
        "emulator.exe"
    } else {
        "emulator"
    };
    sdk_root.join("emulator").join(binary)
}

fn sdk_manager_in(sdk_root: &Path) -> PathBuf {
    let binary = if cfg!(target_os = "windows") {
        "sdkmanager.bat"
    } else {
        "sdkmanager"
    };
    sdk_root
        .join("cmdline-tools")
        .join("latest")
        .join("bin")
        .join(binary)
}

/// Where Android Studio installs the SDK by default.
fn default_sdk_root() -> PathBuf {
    if cfg!(target_os = "windows") {
        dirs::data_local_dir()
            .unwrap_or_default()
            .join("Android")
            .join("Sdk")
    } else if cfg!(target_os = "macos") {
        dirs::home_dir()
            .unwrap_or_default()
            .join("Library")
            .join("Android")
            .join("sdk")
    } else {
        dirs::home_dir().unwrap_or_default().join("Android").join("Sdk")
    }
}
