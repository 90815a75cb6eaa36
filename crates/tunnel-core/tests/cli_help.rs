//! CLI help output tests for tunnel-core.
//!
//! These tests verify that all commands and subcommands correctly display
//! their help text without errors.

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;

/// Get a Command for tunnel-core binary.
fn tunnel_core() -> Command {
    cargo_bin_cmd!("tunnel-core")
}

mod top_level {
    use super::*;

    #[test]
    fn help_flag_works() {
        tunnel_core()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("Pitch Tunnel Core"));
    }

    #[test]
    fn version_flag_works() {
        tunnel_core()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("tunnel-core"));
    }

    #[test]
    fn help_shows_all_commands() {
        tunnel_core()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("analyze"))
            .stdout(predicate::str::contains("summarize"))
            .stdout(predicate::str::contains("pitchers"))
            .stdout(predicate::str::contains("paths"))
            .stdout(predicate::str::contains("config"))
            .stdout(predicate::str::contains("schema"));
    }

    #[test]
    fn help_shows_global_options() {
        tunnel_core()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("--format"))
            .stdout(predicate::str::contains("--config"))
            .stdout(predicate::str::contains("--verbose"))
            .stdout(predicate::str::contains("--quiet"));
    }

    #[test]
    fn missing_subcommand_fails() {
        tunnel_core().assert().failure();
    }
}

mod subcommands {
    use super::*;

    #[test]
    fn analyze_help_lists_selection_flags() {
        tunnel_core()
            .args(["analyze", "--help"])
            .assert()
            .success()
            .stdout(predicate::str::contains("--data"))
            .stdout(predicate::str::contains("--pitcher"))
            .stdout(predicate::str::contains("--stance"))
            .stdout(predicate::str::contains("--time"))
            .stdout(predicate::str::contains("--min-samples"));
    }

    #[test]
    fn paths_help_lists_pair() {
        tunnel_core()
            .args(["paths", "--help"])
            .assert()
            .success()
            .stdout(predicate::str::contains("--pair"));
    }

    #[test]
    fn pitchers_help_lists_by_team() {
        tunnel_core()
            .args(["pitchers", "--help"])
            .assert()
            .success()
            .stdout(predicate::str::contains("--by-team"));
    }

    #[test]
    fn config_help_lists_subcommands() {
        tunnel_core()
            .args(["config", "--help"])
            .assert()
            .success()
            .stdout(predicate::str::contains("show"))
            .stdout(predicate::str::contains("validate"));
    }

    #[test]
    fn unknown_command_fails() {
        tunnel_core()
            .arg("nonexistent-command")
            .assert()
            .failure()
            .stderr(predicate::str::contains("error"));
    }
}
