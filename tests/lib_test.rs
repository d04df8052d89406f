//! Library integration tests.

use devready::DevreadyError;

#[test]
fn error_types_are_public() {
    let err = DevreadyError::ConfigNotFound {
        path: "/tmp/config.yml".into(),
    };
    assert!(err.to_string().contains("/tmp/config.yml"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> devready::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use clap::Parser;
    use devready::cli::{Cli, Commands};
    use devready::requirements::Dependency;

    let cli = Cli::parse_from(["devready", "check", "pods", "--json"]);

    if let Some(Commands::Check(args)) = cli.command {
        assert!(args.json);
        assert_eq!(args.dependencies, vec![Dependency::Pods]);
    } else {
        panic!("Expected Check command");
    }
}

#[test]
fn check_result_schema_is_public() {
    use devready::requirements::{CheckResult, Dependency, ProbeOutcome};

    for dep in Dependency::ALL {
        let present = CheckResult::for_dependency(dep, &ProbeOutcome::Present);
        let absent = CheckResult::for_dependency(dep, &ProbeOutcome::absent("gone"));

        assert!(present.is_installed() && present.error().is_none());
        assert!(!absent.is_installed() && absent.error().is_some());
        assert_eq!(present.info(), absent.info());
    }
}

#[test]
fn protocol_messages_are_public() {
    use devready::messaging::{InboundCommand, OutboundMessage};
    use devready::requirements::{CheckResult, Dependency};

    let command = InboundCommand::decode(&serde_json::json!({"command": "checkXcodeInstalled"}));
    assert_eq!(command.map(InboundCommand::dependency), Some(Dependency::Xcode));

    let message = OutboundMessage::new(Dependency::Xcode, CheckResult::installed("info"));
    let json = serde_json::to_value(&message).unwrap();
    assert_eq!(json["command"], "isXcodeInstalled");
}
