//! Protocol messages.
//!
//! Inbound: `{"command": "checkNodejsInstalled"}`, one command per
//! dependency, no payload (extra fields are ignored).
//!
//! Outbound: `{"command": "isNodejsInstalled", "data": {...}}` where `data`
//! is a [`CheckResult`].

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::requirements::{CheckResult, Dependency};

/// A request to check one dependency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "command")]
pub enum InboundCommand {
    #[serde(rename = "checkNodejsInstalled")]
    CheckNodejsInstalled,
    #[serde(rename = "checkNodeModulesInstalled")]
    CheckNodeModulesInstalled,
    #[serde(rename = "checkAndroidStudioInstalled")]
    CheckAndroidStudioInstalled,
    #[serde(rename = "checkXcodeInstalled")]
    CheckXcodeInstalled,
    #[serde(rename = "checkCocoaPodsInstalled")]
    CheckCocoaPodsInstalled,
    #[serde(rename = "checkPodsInstalled")]
    CheckPodsInstalled,
}

impl InboundCommand {
    /// Decode a raw inbound message. Unrecognized messages yield `None`.
    pub fn decode(message: &Value) -> Option<Self> {
        Self::deserialize(message).ok()
    }

    /// The dependency this command asks about.
    pub fn dependency(self) -> Dependency {
        match self {
            InboundCommand::CheckNodejsInstalled => Dependency::Nodejs,
            InboundCommand::CheckNodeModulesInstalled => Dependency::NodeModules,
            InboundCommand::CheckAndroidStudioInstalled => Dependency::AndroidStudio,
            InboundCommand::CheckXcodeInstalled => Dependency::Xcode,
            InboundCommand::CheckCocoaPodsInstalled => Dependency::CocoaPods,
            InboundCommand::CheckPodsInstalled => Dependency::Pods,
        }
    }

    /// The command that requests a check of `dependency`.
    pub fn for_dependency(dependency: Dependency) -> Self {
        match dependency {
            Dependency::Nodejs => InboundCommand::CheckNodejsInstalled,
            Dependency::NodeModules => InboundCommand::CheckNodeModulesInstalled,
            Dependency::AndroidStudio => InboundCommand::CheckAndroidStudioInstalled,
            Dependency::Xcode => InboundCommand::CheckXcodeInstalled,
            Dependency::CocoaPods => InboundCommand::CheckCocoaPodsInstalled,
            Dependency::Pods => InboundCommand::CheckPodsInstalled,
        }
    }
}

/// A check result tagged with the dependency it reports on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", content = "data")]
pub enum OutboundMessage {
    #[serde(rename = "isNodejsInstalled")]
    NodejsInstalled(CheckResult),
    #[serde(rename = "isNodeModulesInstalled")]
    NodeModulesInstalled(CheckResult),
    #[serde(rename = "isAndroidStudioInstalled")]
    AndroidStudioInstalled(CheckResult),
    #[serde(rename = "isXcodeInstalled")]
    XcodeInstalled(CheckResult),
    #[serde(rename = "isCocoaPodsInstalled")]
    CocoaPodsInstalled(CheckResult),
    #[serde(rename = "isPodsInstalled")]
    PodsInstalled(CheckResult),
}

impl OutboundMessage {
    /// Tag `result` with the outbound command for `dependency`.
    pub fn new(dependency: Dependency, result: CheckResult) -> Self {
        match dependency {
            Dependency::Nodejs => OutboundMessage::NodejsInstalled(result),
            Dependency::NodeModules => OutboundMessage::NodeModulesInstalled(result),
            Dependency::AndroidStudio => OutboundMessage::AndroidStudioInstalled(result),
            Dependency::Xcode => OutboundMessage::XcodeInstalled(result),
            Dependency::CocoaPods => OutboundMessage::CocoaPodsInstalled(result),
            Dependency::Pods => OutboundMessage::PodsInstalled(result),
        }
    }

    /// The dependency reported on.
    pub fn dependency(&self) -> Dependency {
        match self {
            OutboundMessage::NodejsInstalled(_) => Dependency::Nodejs,
            OutboundMessage::NodeModulesInstalled(_) => Dependency::NodeModules,
            OutboundMessage::AndroidStudioInstalled(_) => Dependency::AndroidStudio,
            OutboundMessage::XcodeInstalled(_) => Dependency::Xcode,
            OutboundMessage::CocoaPodsInstalled(_) => Dependency::CocoaPods,
            OutboundMessage::PodsInstalled(_) => Dependency::Pods,
        }
    }

    /// The reported result.
    pub fn result(&self) -> &CheckResult {
        match self {
            OutboundMessage::NodejsInstalled(r)
            | OutboundMessage::NodeModulesInstalled(r)
            | OutboundMessage::AndroidStudioInstalled(r)
            | OutboundMessage::XcodeInstalled(r)
            | OutboundMessage::CocoaPodsInstalled(r)
            | OutboundMessage::PodsInstalled(r) => r,
        }
    }
}
