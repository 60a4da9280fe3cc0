/// End-to-end tests for config file loading and CLI option merging.
///
/// These tests exercise the full flow from config file on disk through CLI invocation
/// to correct output, using `assert_cmd` and `tempfile` for isolated test environments.
use assert_cmd::cargo::cargo_bin_cmd;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

// ============================================================================
// Helper Functions
// ============================================================================

fn fixtures_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

/// Write a config file at the specified path.
fn write_config(path: &Path, content: &str) {
    fs::write(path, content).unwrap();
}

/// Import the valid fixture with whatever store the config selects.
fn import_valid_scan(dir: &Path) {
    cargo_bin_cmd!("observes")
        .current_dir(dir)
        .arg("import")
        .arg(fixtures_path().join("valid_scan.json"))
        .arg("--yes")
        .assert()
        .code(0);
}

// ============================================================================
// Config File Auto-Discovery Tests
// ============================================================================

mod auto_discovery_tests {
    use super::*;

    #[test]
    fn test_auto_discovery_applies_format_and_store_dir() {
        let dir = TempDir::new().unwrap();
        write_config(
            &dir.path().join("observes.config.yml"),
            r#"
format: json
store_dir: custom-store
"#,
        );

        let output = cargo_bin_cmd!("observes")
            .current_dir(dir.path())
            .arg("import")
            .arg(fixtures_path().join("valid_scan.json"))
            .arg("--yes")
            .output()
            .unwrap();

        assert!(output.status.success());
        let receipt: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(receipt["id"], "scan-2024-05");
        assert!(dir
            .path()
            .join("custom-store/scans/scan-2024-05.json")
            .is_file());

        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Auto-discovered config file"));
    }

    #[test]
    fn test_no_config_file_runs_normally() {
        let dir = TempDir::new().unwrap();

        let output = cargo_bin_cmd!("observes")
            .current_dir(dir.path())
            .args(["scans", "list"])
            .output()
            .unwrap();

        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        // Default format is Markdown
        assert!(stdout.contains("# Scans"));
    }

    #[test]
    fn test_page_size_from_config() {
        let dir = TempDir::new().unwrap();
        write_config(
            &dir.path().join("observes.config.yml"),
            "format: json\npage_size: 1\n",
        );
        import_valid_scan(dir.path());

        let output = cargo_bin_cmd!("observes")
            .current_dir(dir.path())
            .args(["projects", "scan-2024-05"])
            .output()
            .unwrap();

        assert!(output.status.success());
        let page: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(page["page_size"], 1);
        assert_eq!(page["total_pages"], 2);
        assert_eq!(page["items"][0]["name"], "Payments");
    }

    #[test]
    fn test_unknown_field_warning() {
        let dir = TempDir::new().unwrap();
        write_config(
            &dir.path().join("observes.config.yml"),
            "format: json\ncheck_cve: true\n",
        );

        let output = cargo_bin_cmd!("observes")
            .current_dir(dir.path())
            .args(["scans", "list"])
            .output()
            .unwrap();

        assert!(output.status.success());
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Unknown config field 'check_cve'"));
    }
}

// ============================================================================
// CLI Override Tests
// ============================================================================

mod cli_override_tests {
    use super::*;

    #[test]
    fn test_cli_format_overrides_config() {
        let dir = TempDir::new().unwrap();
        write_config(&dir.path().join("observes.config.yml"), "format: json\n");

        let output = cargo_bin_cmd!("observes")
            .current_dir(dir.path())
            .args(["-f", "markdown", "scans", "list"])
            .output()
            .unwrap();

        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.starts_with("# Scans"));
    }

    #[test]
    fn test_cli_page_size_overrides_config() {
        let dir = TempDir::new().unwrap();
        write_config(
            &dir.path().join("observes.config.yml"),
            "format: json\npage_size: 1\n",
        );
        import_valid_scan(dir.path());

        let output = cargo_bin_cmd!("observes")
            .current_dir(dir.path())
            .args(["repos", "scan-2024-05", "--page-size", "10"])
            .output()
            .unwrap();

        assert!(output.status.success());
        let page: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(page["total_pages"], 1);
        assert_eq!(page["items"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_explicit_config_path() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("elsewhere.yml");
        write_config(&config_path, "format: json\n");

        let output = cargo_bin_cmd!("observes")
            .current_dir(dir.path())
            .arg("--config")
            .arg(&config_path)
            .args(["scans", "list"])
            .output()
            .unwrap();

        assert!(output.status.success());
        let scans: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(scans, serde_json::json!([]));
    }
}

// ============================================================================
// Config Error Tests
// ============================================================================

mod config_error_tests {
    use super::*;

    #[test]
    fn test_missing_explicit_config_file() {
        let dir = TempDir::new().unwrap();

        let output = cargo_bin_cmd!("observes")
            .current_dir(dir.path())
            .args(["--config", "missing.yml", "scans", "list"])
            .output()
            .unwrap();

        assert_eq!(output.status.code(), Some(3));
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Failed to read config file"));
    }

    #[test]
    fn test_invalid_thresholds_in_config() {
        let dir = TempDir::new().unwrap();
        write_config(
            &dir.path().join("observes.config.yml"),
            "stale_after_days: 400\ndormant_after_days: 365\n",
        );

        let output = cargo_bin_cmd!("observes")
            .current_dir(dir.path())
            .args(["scans", "list"])
            .output()
            .unwrap();

        assert_eq!(output.status.code(), Some(3));
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("stale_after_days"));
    }

    #[test]
    fn test_sbom_segment_traversal_is_rejected() {
        let dir = TempDir::new().unwrap();
        write_config(
            &dir.path().join("observes.config.yml"),
            r#"
sbom_source:
  owner: acme
  repository: sboms
  api_base_url: http://127.0.0.1:9
"#,
        );

        let output = cargo_bin_cmd!("observes")
            .current_dir(dir.path())
            .args(["sbom", "versions", "../secrets"])
            .output()
            .unwrap();

        assert_eq!(output.status.code(), Some(3));
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("../secrets"));
    }
}
