//! Configuration schema definitions for devready.
//!
//! These structs map to the YAML configuration file format. Every field has
//! a default, so an empty file (or no file at all) is a valid config.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure for `.devready/config.yml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DevreadyConfig {
    /// Android SDK locations
    pub android: AndroidConfig,

    /// Native iOS project layout
    pub ios: IosConfig,

    /// Command lines used by the command probes
    pub commands: CommandsConfig,
}

/// Android SDK locations.
///
/// Unset values are derived from `sdk_root`, which itself falls back to
/// `ANDROID_HOME`, `ANDROID_SDK_ROOT`, then the platform default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AndroidConfig {
    /// Android SDK root directory
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sdk_root: Option<PathBuf>,

    /// Path to the emulator binary
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emulator_path: Option<PathBuf>,

    /// Path to the sdkmanager binary
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sdk_manager_path: Option<PathBuf>,
}

/// Native iOS project layout, relative to the workspace root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IosConfig {
    /// iOS source directory
    pub source_dir: PathBuf,

    /// CocoaPods lockfile name inside the source directory
    pub lockfile: String,

    /// Installed pods directory name inside the source directory
    pub pods_dir: String,
}

impl Default for IosConfig {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from("ios"),
            lockfile: "Podfile.lock".to_string(),
            pods_dir: "Pods".to_string(),
        }
    }
}

/// Command lines run by the command probes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommandsConfig {
    /// Node.js version query
    pub node_version: String,

    /// Package listing, run in the workspace root
    pub package_list: String,

    /// Xcode build tool version query
    pub xcodebuild_version: String,

    /// Xcode developer directory query
    pub xcode_select: String,

    /// Simulator control query
    pub simctl: String,

    /// CocoaPods version query
    pub pod_version: String,
}

impl Default for CommandsConfig {
    fn default() -> Self {
        Self {
            node_version: "node --version".to_string(),
            package_list: "npm ls".to_string(),
            xcodebuild_version: "xcodebuild -version".to_string(),
            xcode_select: "xcode-select -p".to_string(),
            simctl: "xcrun simctl list runtimes".to_string(),
            pod_version: "pod --version".to_string(),
        }
    }
}
