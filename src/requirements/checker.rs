//! Verification engine.
//!
//! The `VerificationEngine` maps each [`Dependency`] to its composite probe
//! and evaluates it. It holds no mutable state: every check is independent
//! and several can run at the same time.
//!
//! | Dependency | Sub-checks |
//! |---|---|
//! | Node.js | node version query |
//! | Node modules | package listing in the workspace root |
//! | Android Studio | emulator binary exists, sdkmanager version query |
//! | Xcode | xcodebuild version, xcode-select, simctl |
//! | CocoaPods | pod version query |
//! | Pods | lockfile and pods directory under the iOS source dir |

use std::sync::Arc;

use futures_util::future::join_all;
use tracing::debug;

use crate::config::ProbeConfig;
use crate::requirements::probe::{CompositeProbe, Probe};
use crate::requirements::registry::Dependency;
use crate::requirements::status::{CheckResult, ProbeOutcome};
use crate::shell::ProcessRunner;
use crate::workspace::{FileSystem, WorkspaceResolver};

/// Runs dependency checks against injected collaborators.
pub struct VerificationEngine {
    config: ProbeConfig,
    runner: Arc<dyn ProcessRunner>,
    fs: Arc<dyn FileSystem>,
    workspace: Arc<dyn WorkspaceResolver>,
}

impl VerificationEngine {
    /// Create a new engine.
    pub fn new(
        config: ProbeConfig,
        runner: Arc<dyn ProcessRunner>,
        fs: Arc<dyn FileSystem>,
        workspace: Arc<dyn WorkspaceResolver>,
    ) -> Self {
        Self {
            config,
            runner,
            fs,
            workspace,
        }
    }

    /// The resolved probe settings.
    pub fn config(&self) -> &ProbeConfig {
        &self.config
    }

    /// Build the composite probe for a dependency.
    pub fn composite(&self, dependency: Dependency) -> CompositeProbe {
        let commands = &self.config.commands;

        let probes = match dependency {
            Dependency::Nodejs => vec![Probe::command(&commands.node_version)],
            Dependency::NodeModules => match self.workspace.workspace_root() {
                Some(root) => vec![Probe::command_in(&commands.package_list, root)],
                None => vec![Probe::unresolved("no workspace folder is open")],
            },
            Dependency::AndroidStudio => vec![
                Probe::paths([self.config.emulator_path.clone()]),
                Probe::command(self.config.sdk_manager_version_command()),
            ],
            Dependency::Xcode => vec![
                Probe::command(&commands.xcodebuild_version),
                Probe::command(&commands.xcode_select),
                Probe::command(&commands.simctl),
            ],
            Dependency::CocoaPods => vec![Probe::command(&commands.pod_version)],
            Dependency::Pods => self.pods_probes(),
        };

        CompositeProbe::new(probes)
    }

    fn pods_probes(&self) -> Vec<Probe> {
        let Some(root) = self.workspace.workspace_root() else {
            return vec![Probe::unresolved("no workspace folder is open")];
        };
        let Some(ios_dir) = self.workspace.ios_source_dir(&root) else {
            return vec![Probe::unresolved(format!(
                "no iOS source directory under {}",
                root.display()
            ))];
        };

        vec![
            Probe::paths([ios_dir.join(&self.config.ios_lockfile)]),
            Probe::paths([ios_dir.join(&self.config.ios_pods_dir)]),
        ]
    }

    /// Evaluate a dependency's composite probe.
    pub async fn evaluate(&self, dependency: Dependency) -> ProbeOutcome {
        self.composite(dependency)
            .evaluate(self.runner.as_ref(), self.fs.as_ref())
            .await
    }

    /// Check a single dependency.
    ///
    /// Always returns a definite result; failures are reported inside it.
    pub async fn check(&self, dependency: Dependency) -> CheckResult {
        let outcome = self.evaluate(dependency).await;
        match &outcome {
            ProbeOutcome::Present => debug!(%dependency, "Dependency present"),
            ProbeOutcome::Absent { reason } => debug!(%dependency, reason, "Dependency absent"),
        }
        CheckResult::for_dependency(dependency, &outcome)
    }

    /// Check several dependencies concurrently.
    ///
    /// Results are returned in the order of `dependencies`.
    pub async fn check_many(&self, dependencies: &[Dependency]) -> Vec<(Dependency, CheckResult)> {
        join_all(
            dependencies
                .iter()
                .map(|&dep| async move { (dep, self.check(dep).await) }),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DevreadyConfig;
    use crate::shell::MockRunner;
    use crate::workspace::{ProjectWorkspace, StdFileSystem};
    use std::fs;
    use std::path::{Path, PathBuf};
    use std::time::Duration;
    use tempfile::TempDir;

    fn probe_config(sdk: &Path) -> ProbeConfig {
        ProbeConfig::resolve_with_env(&DevreadyConfig::default(), |var| match var {
            "ANDROID_HOME" => Ok(sdk.to_string_lossy().to_string()),
            _ => Err(std::env::VarError::NotPresent),
        })
    }

    fn engine(runner: MockRunner, root: Option<PathBuf>, sdk: &Path) -> VerificationEngine {
        VerificationEngine::new(
            probe_config(sdk),
            Arc::new(runner),
            Arc::new(StdFileSystem::new()),
            Arc::new(ProjectWorkspace::new(root, "ios")),
        )
    }

    fn xcode_runner() -> MockRunner {
        MockRunner::new()
            .with_output("xcodebuild -version", "Xcode 15.2\nBuild version 15C500b\n")
            .with_output("xcode-select -p", "/Applications/Xcode.app/Contents/Developer\n")
            .with_output("xcrun simctl list runtimes", "== Runtimes ==\niOS 17.2\n")
    }

    fn create_emulator(sdk: &Path) -> PathBuf {
        let emulator = sdk.join("emulator").join("emulator");
        fs::create_dir_all(emulator.parent().unwrap()).unwrap();
        fs::write(&emulator, "").unwrap();
        emulator
    }

    #[tokio::test]
    async fn nodejs_installed() {
        let sdk = TempDir::new().unwrap();
        let runner = MockRunner::new().with_output("node --version", "v20.11.0\n");
        let result = engine(runner, None, sdk.path()).check(Dependency::Nodejs).await;
        assert!(result.is_installed());
        assert!(result.error().is_none());
    }

    #[tokio::test]
    async fn nodejs_missing_has_hint() {
        let sdk = TempDir::new().unwrap();
        let result = engine(MockRunner::new(), None, sdk.path())
            .check(Dependency::Nodejs)
            .await;
        assert!(!result.is_installed());
        assert_eq!(result.error(), Some(Dependency::Nodejs.install_hint()));
    }

    #[tokio::test]
    async fn node_modules_listing_runs_in_workspace_root() {
        let sdk = TempDir::new().unwrap();
        let project = TempDir::new().unwrap();
        let runner = MockRunner::new().with_output("npm ls", "app@1.0.0\n`-- react@18.2.0\n");

        let result = engine(runner.clone(), Some(project.path().to_path_buf()), sdk.path())
            .check(Dependency::NodeModules)
            .await;

        assert!(result.is_installed());
        let calls = runner.calls_with_options();
        assert_eq!(calls[0].1.cwd.as_deref(), Some(project.path()));
    }

    #[tokio::test]
    async fn node_modules_missing() {
        let sdk = TempDir::new().unwrap();
        let project = TempDir::new().unwrap();
        let runner = MockRunner::new().with_failure("npm ls", 1, "npm ERR! missing: react@18.2.0");

        let result = engine(runner, Some(project.path().to_path_buf()), sdk.path())
            .check(Dependency::NodeModules)
            .await;

        assert!(!result.is_installed());
        assert_eq!(result.error(), Some("Node modules are not installed."));
    }

    #[tokio::test]
    async fn node_modules_without_workspace_runs_nothing() {
        let sdk = TempDir::new().unwrap();
        let runner = MockRunner::new().with_output("npm ls", "app@1.0.0\n");

        let result = engine(runner.clone(), None, sdk.path())
            .check(Dependency::NodeModules)
            .await;

        assert!(!result.is_installed());
        assert!(runner.calls().is_empty());
    }

    #[tokio::test]
    async fn android_studio_needs_emulator_and_sdk_manager() {
        let sdk = TempDir::new().unwrap();
        create_emulator(sdk.path());
        let config = probe_config(sdk.path());
        let runner =
            MockRunner::new().with_output(&config.sdk_manager_version_command(), "12.0\n");

        let result = engine(runner, None, sdk.path())
            .check(Dependency::AndroidStudio)
            .await;
        assert!(result.is_installed());
    }

    #[tokio::test]
    async fn android_studio_without_emulator() {
        let sdk = TempDir::new().unwrap();
        let config = probe_config(sdk.path());
        let runner =
            MockRunner::new().with_output(&config.sdk_manager_version_command(), "12.0\n");

        let result = engine(runner, None, sdk.path())
            .check(Dependency::AndroidStudio)
            .await;
        assert!(!result.is_installed());
    }

    #[tokio::test]
    async fn android_studio_without_sdk_manager() {
        let sdk = TempDir::new().unwrap();
        create_emulator(sdk.path());

        let result = engine(MockRunner::new(), None, sdk.path())
            .check(Dependency::AndroidStudio)
            .await;
        assert!(!result.is_installed());
    }

    #[tokio::test]
    async fn xcode_needs_all_three_commands() {
        let sdk = TempDir::new().unwrap();
        let result = engine(xcode_runner(), None, sdk.path())
            .check(Dependency::Xcode)
            .await;
        assert!(result.is_installed());
    }

    #[tokio::test]
    async fn xcode_fails_when_any_command_fails() {
        let sdk = TempDir::new().unwrap();
        for failing in [
            "xcodebuild -version",
            "xcode-select -p",
            "xcrun simctl list runtimes",
        ] {
            let runner = xcode_runner().with_failure(failing, 1, "error");
            let result = engine(runner, None, sdk.path())
                .check(Dependency::Xcode)
                .await;
            assert!(!result.is_installed(), "{failing} failing should fail the check");
        }
    }

    #[tokio::test]
    async fn cocoapods_version() {
        let sdk = TempDir::new().unwrap();
        let runner = MockRunner::new().with_output("pod --version", "1.15.2\n");
        let result = engine(runner, None, sdk.path())
            .check(Dependency::CocoaPods)
            .await;
        assert!(result.is_installed());
    }

    #[tokio::test]
    async fn pods_installed_with_lockfile_and_pods_dir() {
        let sdk = TempDir::new().unwrap();
        let project = TempDir::new().unwrap();
        let ios = project.path().join("ios");
        fs::create_dir_all(ios.join("Pods")).unwrap();
        fs::write(ios.join("Podfile.lock"), "PODS:\n").unwrap();

        let result = engine(MockRunner::new(), Some(project.path().to_path_buf()), sdk.path())
            .check(Dependency::Pods)
            .await;
        assert!(result.is_installed());
        assert!(result.error().is_none());
    }

    #[tokio::test]
    async fn pods_missing_lockfile() {
        let sdk = TempDir::new().unwrap();
        let project = TempDir::new().unwrap();
        fs::create_dir_all(project.path().join("ios/Pods")).unwrap();

        let result = engine(MockRunner::new(), Some(project.path().to_path_buf()), sdk.path())
            .check(Dependency::Pods)
            .await;
        assert!(!result.is_installed());
    }

    #[tokio::test]
    async fn pods_missing_pods_dir() {
        let sdk = TempDir::new().unwrap();
        let project = TempDir::new().unwrap();
        fs::create_dir_all(project.path().join("ios")).unwrap();
        fs::write(project.path().join("ios/Podfile.lock"), "").unwrap();

        let result = engine(MockRunner::new(), Some(project.path().to_path_buf()), sdk.path())
            .check(Dependency::Pods)
            .await;
        assert!(!result.is_installed());
    }

    #[tokio::test]
    async fn pods_without_ios_dir() {
        let sdk = TempDir::new().unwrap();
        let project = TempDir::new().unwrap();

        let engine = engine(MockRunner::new(), Some(project.path().to_path_buf()), sdk.path());
        assert!(matches!(
            engine.composite(Dependency::Pods).probes(),
            [Probe::Unresolved(_)]
        ));
        assert!(!engine.check(Dependency::Pods).await.is_installed());
    }

    #[tokio::test]
    async fn pods_without_workspace() {
        let sdk = TempDir::new().unwrap();
        let result = engine(MockRunner::new(), None, sdk.path())
            .check(Dependency::Pods)
            .await;
        assert!(!result.is_installed());
    }

    #[tokio::test]
    async fn info_is_stable_across_outcomes() {
        let sdk = TempDir::new().unwrap();
        let present = engine(
            MockRunner::new().with_output("pod --version", "1.15.2"),
            None,
            sdk.path(),
        )
        .check(Dependency::CocoaPods)
        .await;
        let absent = engine(MockRunner::new(), None, sdk.path())
            .check(Dependency::CocoaPods)
            .await;
        assert_eq!(present.info(), absent.info());
    }

    #[tokio::test]
    async fn check_many_keeps_input_order() {
        let sdk = TempDir::new().unwrap();
        let runner = MockRunner::new().with_output("node --version", "v20\n");
        let results = engine(runner, None, sdk.path())
            .check_many(&[Dependency::CocoaPods, Dependency::Nodejs])
            .await;

        assert_eq!(results[0].0, Dependency::CocoaPods);
        assert!(!results[0].1.is_installed());
        assert_eq!(results[1].0, Dependency::Nodejs);
        assert!(results[1].1.is_installed());
    }

    #[tokio::test]
    async fn concurrent_checks_match_sequential() {
        let sdk = TempDir::new().unwrap();
        let runner = MockRunner::new()
            .with_output("node --version", "v20\n")
            .with_failure("pod --version", 127, "not found");
        let engine = engine(runner, None, sdk.path());

        let (node, pods) = tokio::join!(
            engine.check(Dependency::Nodejs),
            engine.check(Dependency::CocoaPods)
        );
        assert_eq!(node, engine.check(Dependency::Nodejs).await);
        assert_eq!(pods, engine.check(Dependency::CocoaPods).await);
    }

    #[tokio::test]
    async fn no_built_in_timeout() {
        let sdk = TempDir::new().unwrap();
        let runner = MockRunner::new().with_hang("node --version");
        let engine = engine(runner, None, sdk.path());

        let result =
            tokio::time::timeout(Duration::from_millis(100), engine.check(Dependency::Nodejs))
                .await;
        assert!(result.is_err(), "a hung command must keep the check pending");
    }
}
