use assert_cmd::Command;
use predicates::prelude::*;

/// Helper to get the reader-gen binary command
fn gen_cmd() -> Command {
    Command::cargo_bin("reader-gen").unwrap()
}

mod generation {
    use super::*;

    #[test]
    fn prints_go_source_to_stdout() {
        gen_cmd()
            .assert()
            .success()
            .stdout(predicate::str::starts_with(
                "// Code generated by reader-gen; DO NOT EDIT.\n",
            ))
            .stdout(predicate::str::contains("\npackage reader\n"))
            .stdout(predicate::str::contains("type Reader interface {"))
            .stdout(predicate::str::contains("func (c *connector) GetInstances("));
    }

    #[test]
    fn explicit_aws_provider_matches_default() {
        let default = gen_cmd().output().expect("Failed to execute");
        let explicit = gen_cmd()
            .args(["--provider", "aws"])
            .output()
            .expect("Failed to execute");

        assert_eq!(default.stdout, explicit.stdout);
    }

    #[test]
    fn output_is_deterministic() {
        let first = gen_cmd().output().expect("Failed to execute");
        let second = gen_cmd().output().expect("Failed to execute");

        assert_eq!(first.stdout, second.stdout);
    }

    #[test]
    fn names_can_be_overridden() {
        gen_cmd()
            .args([
                "--package",
                "awsreader",
                "--interface",
                "AWSReader",
                "--receiver",
                "awsConnector",
            ])
            .assert()
            .success()
            .stdout(predicate::str::contains("\npackage awsreader\n"))
            .stdout(predicate::str::contains("type AWSReader interface {"))
            .stdout(predicate::str::contains("func (c *awsConnector) GetVpcs("));
    }

    #[test]
    fn strict_mode_accepts_the_aws_list() {
        gen_cmd().arg("--strict").assert().success();
    }
}

mod inspect {
    use super::*;

    #[test]
    fn prints_plans_as_json() {
        let output = gen_cmd().arg("--inspect").output().expect("Failed to execute");
        assert!(output.status.success());

        let plans: serde_json::Value =
            serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
        assert_eq!(plans[0]["name"], "GetInstances");
        assert_eq!(plans[0]["merge"]["kind"], "flatten");
    }
}

mod errors {
    use super::*;

    #[test]
    fn invalid_package_fails() {
        gen_cmd()
            .args(["--package", "aws-reader"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("aws-reader"));
    }

    #[test]
    fn unknown_provider_is_rejected() {
        gen_cmd()
            .args(["--provider", "azure"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("azure"));
    }
}

mod logging {
    use super::*;

    #[test]
    fn logs_go_to_stderr() {
        gen_cmd()
            .arg("-vv")
            .env_remove("RUST_LOG")
            .assert()
            .success()
            .stdout(predicate::str::contains("\npackage reader\n"))
            .stderr(predicate::str::contains("Rendered interface"));
    }

    #[test]
    fn quiet_by_default() {
        gen_cmd()
            .env_remove("RUST_LOG")
            .assert()
            .success()
            .stderr(predicate::str::is_empty());
    }
}
