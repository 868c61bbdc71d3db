use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

fn cmd() -> assert_cmd::Command {
    assert_cmd::Command::cargo_bin("cloud-audit").unwrap()
}

/// Snapshot for the end-to-end scenario: one admin role, one user without
/// MFA, one group open on port 22, two key pairs of which one is unused.
fn write_risky_snapshot(dir: &Path) -> PathBuf {
    let path = dir.join("snapshot.json");
    fs::write(
        &path,
        r#"{
            "roles": [
                {"name": "admin-role", "attached_policies": ["AdministratorAccess"]},
                {"name": "deploy-role", "attached_policies": ["ReadOnlyAccess"]}
            ],
            "users": [
                {"name": "alice", "mfa_devices": []},
                {"name": "bob", "mfa_devices": ["mfa-1"]}
            ],
            "security_groups": [
                {"group_id": "sg-12345", "ingress_rules": [
                    {"port": 22, "cidr_ranges": ["0.0.0.0/0"]}
                ]}
            ],
            "key_pairs": ["used-key", "stale-key"],
            "instances": [
                {"instance_id": "i-1", "key_name": "used-key"}
            ]
        }"#,
    )
    .unwrap();
    path
}

fn write_clean_snapshot(dir: &Path) -> PathBuf {
    let path = dir.join("clean.json");
    fs::write(
        &path,
        r#"{
            "roles": [{"name": "deploy-role", "attached_policies": ["ReadOnlyAccess"]}],
            "users": [{"name": "bob", "mfa_devices": ["mfa-1"]}],
            "security_groups": [
                {"group_id": "sg-1", "ingress_rules": [
                    {"port": 443, "cidr_ranges": ["10.0.0.0/8"]}
                ]}
            ],
            "key_pairs": ["used-key"],
            "instances": [{"instance_id": "i-1", "key_name": "used-key"}]
        }"#,
    )
    .unwrap();
    path
}

mod end_to_end {
    use super::*;

    #[test]
    fn test_risky_snapshot_reports_one_finding_per_category_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let snapshot = write_risky_snapshot(dir.path());

        let output = cmd()
            .arg(&snapshot)
            .args(["--format", "csv"])
            .assert()
            .failure()
            .code(1)
            .get_output()
            .stdout
            .clone();

        let stdout = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = stdout.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Issue,Details",
                "Overly Permissive Role,admin-role",
                "User Without MFA,alice",
                "Publicly Accessible Security Group,sg-12345 (Port 22)",
                "Unused EC2 Key Pair,stale-key",
            ]
        );
    }

    #[test]
    fn test_clean_snapshot_exits_zero() {
        let dir = tempfile::tempdir().unwrap();
        let snapshot = write_clean_snapshot(dir.path());

        cmd()
            .arg(&snapshot)
            .assert()
            .success()
            .stdout(predicate::str::contains("No findings."));
    }

    #[test]
    fn test_two_runs_produce_identical_reports() {
        let dir = tempfile::tempdir().unwrap();
        let snapshot = write_risky_snapshot(dir.path());

        let run = |snapshot: &Path| {
            let out = cmd()
                .arg(snapshot)
                .args(["--format", "csv"])
                .assert()
                .code(1)
                .get_output()
                .stdout
                .clone();
            String::from_utf8(out).unwrap()
        };

        assert_eq!(run(&snapshot), run(&snapshot));
    }
}

mod output {
    use super::*;

    #[test]
    fn test_report_written_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let snapshot = write_risky_snapshot(dir.path());
        let report_path = dir.path().join("report.csv");

        cmd()
            .arg(&snapshot)
            .args(["--format", "csv", "--output"])
            .arg(&report_path)
            .assert()
            .code(1)
            .stdout(predicate::str::contains("Report written to"));

        let content = fs::read_to_string(&report_path).unwrap();
        assert!(content.starts_with("Issue,Details\n"));
        assert!(content.contains("Unused EC2 Key Pair,stale-key"));
    }

    #[test]
    fn test_json_format_is_parseable() {
        let dir = tempfile::tempdir().unwrap();
        let snapshot = write_risky_snapshot(dir.path());

        let output = cmd()
            .arg(&snapshot)
            .args(["--format", "json"])
            .assert()
            .code(1)
            .get_output()
            .stdout
            .clone();

        let parsed: serde_json::Value = serde_json::from_slice(&output).unwrap();
        assert_eq!(parsed["findings"].as_array().unwrap().len(), 4);
        assert_eq!(parsed["summary"]["passed"], false);
        assert_eq!(parsed["findings"][0]["category"], "overly_permissive_role");
    }

    #[test]
    fn test_unwritable_output_path_exits_two() {
        let dir = tempfile::tempdir().unwrap();
        let snapshot = write_clean_snapshot(dir.path());

        cmd()
            .arg(&snapshot)
            .args(["--output", "/nonexistent/dir/report.csv"])
            .assert()
            .code(2)
            .stderr(predicate::str::contains("Failed to write report"));
    }
}

mod configuration {
    use super::*;

    #[test]
    fn test_admin_policy_flag_overrides_default() {
        let dir = tempfile::tempdir().unwrap();
        let snapshot = write_clean_snapshot(dir.path());

        // With ReadOnlyAccess treated as full access, the clean snapshot
        // now has a finding.
        cmd()
            .arg(&snapshot)
            .args(["--format", "csv", "--admin-policy", "ReadOnlyAccess"])
            .assert()
            .code(1)
            .stdout(predicate::str::contains(
                "Overly Permissive Role,deploy-role",
            ));
    }

    #[test]
    fn test_config_file_next_to_snapshot_is_picked_up() {
        let dir = tempfile::tempdir().unwrap();
        let snapshot = write_clean_snapshot(dir.path());
        fs::write(
            dir.path().join(".cloud-audit.yaml"),
            "admin_policies:\n  - ReadOnlyAccess\n",
        )
        .unwrap();

        cmd()
            .arg(&snapshot)
            .args(["--format", "csv"])
            .assert()
            .code(1)
            .stdout(predicate::str::contains(
                "Overly Permissive Role,deploy-role",
            ));
    }
}

mod errors {
    use super::*;

    #[test]
    fn test_missing_snapshot_exits_two() {
        cmd()
            .arg("/nonexistent/snapshot.json")
            .assert()
            .code(2)
            .stderr(predicate::str::contains("Snapshot file not found"));
    }

    #[test]
    fn test_malformed_snapshot_exits_two() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{not json").unwrap();

        cmd()
            .arg(&path)
            .assert()
            .code(2)
            .stderr(predicate::str::contains("Failed to parse JSON snapshot"));
    }

    #[test]
    fn test_unsupported_extension_exits_two() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("snapshot.xml");
        fs::write(&path, "<snapshot/>").unwrap();

        cmd()
            .arg(&path)
            .assert()
            .code(2)
            .stderr(predicate::str::contains("Unsupported snapshot format"));
    }
}
