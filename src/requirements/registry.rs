//! The fixed set of dependencies devready knows how to verify.
//!
//! Each [`Dependency`] carries its static texts and its protocol names. How
//! a dependency is probed lives in the checker, which builds the composite
//! probe from the resolved configuration.

use std::fmt;

/// A dependency that can be verified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, clap::ValueEnum)]
pub enum Dependency {
    /// Node.js runtime.
    Nodejs,
    /// The project's installed `node_modules`.
    NodeModules,
    /// Android emulator and SDK manager.
    AndroidStudio,
    /// Xcode command-line toolchain and simulators.
    Xcode,
    /// CocoaPods dependency manager.
    #[value(name = "cocoapods")]
    CocoaPods,
    /// Installed pods in the native iOS project.
    Pods,
}

impl Dependency {
    /// Every dependency, in report order.
    pub const ALL: [Dependency; 6] = [
        Dependency::Nodejs,
        Dependency::NodeModules,
        Dependency::AndroidStudio,
        Dependency::Xcode,
        Dependency::CocoaPods,
        Dependency::Pods,
    ];

    /// Human-readable name.
    pub fn name(self) -> &'static str {
        match self {
            Dependency::Nodejs => "Node.js",
            Dependency::NodeModules => "Node modules",
            Dependency::AndroidStudio => "Android Studio",
            Dependency::Xcode => "Xcode",
            Dependency::CocoaPods => "CocoaPods",
            Dependency::Pods => "Pods",
        }
    }

    /// What the check verifies. Independent of the outcome.
    pub fn info(self) -> &'static str {
        match self {
            Dependency::Nodejs => {
                "Node.js is required to run the JavaScript bundler and CLI tooling."
            }
            Dependency::NodeModules => "Project packages must be installed in node_modules.",
            Dependency::AndroidStudio => {
                "Android Studio provides the Android SDK, emulator and SDK manager."
            }
            Dependency::Xcode => "Xcode provides the iOS build tools and simulators.",
            Dependency::CocoaPods => "CocoaPods manages the native iOS dependencies.",
            Dependency::Pods => {
                "Native iOS dependencies must be installed in the ios/Pods directory."
            }
        }
    }

    /// How to fix a missing dependency.
    pub fn install_hint(self) -> &'static str {
        match self {
            Dependency::Nodejs => "Node.js is not installed. Install it from https://nodejs.org.",
            Dependency::NodeModules => "Node modules are not installed.",
            Dependency::AndroidStudio => {
                "Android Studio is not installed. Install it from https://developer.android.com/studio and make sure the emulator and command-line tools are present."
            }
            Dependency::Xcode => {
                "Xcode is not installed. Install it from the Mac App Store and run xcode-select --install."
            }
            Dependency::CocoaPods => {
                "CocoaPods is not installed. Install it with sudo gem install cocoapods."
            }
            Dependency::Pods => "Pods are not installed. Run pod install in the ios directory.",
        }
    }

    /// Inbound command that requests this check.
    pub fn check_command(self) -> &'static str {
        match self {
            Dependency::Nodejs => "checkNodejsInstalled",
            Dependency::NodeModules => "checkNodeModulesInstalled",
            Dependency::AndroidStudio => "checkAndroidStudioInstalled",
            Dependency::Xcode => "checkXcodeInstalled",
            Dependency::CocoaPods => "checkCocoaPodsInstalled",
            Dependency::Pods => "checkPodsInstalled",
        }
    }

    /// Outbound command that carries this check's result.
    pub fn report_command(self) -> &'static str {
        match self {
            Dependency::Nodejs => "isNodejsInstalled",
            Dependency::NodeModules => "isNodeModulesInstalled",
            Dependency::AndroidStudio => "isAndroidStudioInstalled",
            Dependency::Xcode => "isXcodeInstalled",
            Dependency::CocoaPods => "isCocoaPodsInstalled",
            Dependency::Pods => "isPodsInstalled",
        }
    }
}

impl fmt::Display for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
