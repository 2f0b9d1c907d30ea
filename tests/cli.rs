//! Black-box CLI tests against the compiled binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn write_manifest(dir: &std::path::Path) -> std::path::PathBuf {
    let path = dir.join("content.json");
    std::fs::write(
        &path,
        r#"{
            "bundles": [
                { "name": "Bundle1", "assets": ["Assets/Textures/tree.png"] },
                { "name": "Bundle2", "assets": ["Assets/Audio/wind.ogg"] }
            ]
        }"#,
    )
    .unwrap();
    path
}

#[test]
fn requires_manifest_and_platform() {
    Command::cargo_bin("bundlebuild")
        .unwrap()
        .assert()
        .failure()
        .stderr(predicate::str::contains("--manifest"));
}

#[test]
fn help_describes_the_tool() {
    Command::cargo_bin("bundlebuild")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("packaging engine"));
}

#[test]
fn dry_run_prints_resolved_compression_table() {
    let dir = tempfile::tempdir().unwrap();
    let manifest = write_manifest(dir.path());

    Command::cargo_bin("bundlebuild")
        .unwrap()
        .current_dir(dir.path())
        .args([
            "--manifest",
            manifest.to_str().unwrap(),
            "--out",
            "bundles",
            "--platform",
            "linux64",
            "--compression",
            "lzma",
            "--override",
            "Bundle1=none",
            "--dry-run",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Bundle1: 1 asset(s), compression none"))
        .stdout(predicate::str::contains("Bundle2: 1 asset(s), compression lzma"))
        .stdout(predicate::str::contains("tree.png -> tree"));
}

#[test]
fn override_modes_accept_the_compression_flag_spellings() {
    use bundlebuild::build::CompressionMode;
    use bundlebuild::cli::parse_override;

    // Same spellings as --compression, including clap's case folding
    assert_eq!(
        parse_override("Bundle1=none").unwrap(),
        ("Bundle1".to_string(), CompressionMode::None)
    );
    assert_eq!(
        parse_override("Bundle2=LZMA").unwrap(),
        ("Bundle2".to_string(), CompressionMode::Lzma)
    );
    assert!(parse_override("Bundle3=deflate").is_err());
    assert!(parse_override("=lz4").is_err());
}

#[test]
fn chunked_flag_overrides_config_in_both_directions() {
    let dir = tempfile::tempdir().unwrap();
    let manifest = write_manifest(dir.path());
    std::fs::write(dir.path().join("bundlebuild.toml"), "[build]\nchunked = true\n").unwrap();

    let base = [
        "--manifest",
        manifest.to_str().unwrap(),
        "--out",
        "bundles",
        "--platform",
        "linux64",
        "--dry-run",
    ];

    // Config alone turns chunking on
    Command::cargo_bin("bundlebuild")
        .unwrap()
        .current_dir(dir.path())
        .args(base)
        .assert()
        .success()
        .stdout(predicate::str::contains("(chunked: true)"));

    // An explicit CLI value wins over the config file
    Command::cargo_bin("bundlebuild")
        .unwrap()
        .current_dir(dir.path())
        .args(base)
        .arg("--chunked=false")
        .assert()
        .success()
        .stdout(predicate::str::contains("(chunked: false)"));
}

#[test]
fn bad_override_spec_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let manifest = write_manifest(dir.path());

    Command::cargo_bin("bundlebuild")
        .unwrap()
        .current_dir(dir.path())
        .args([
            "--manifest",
            manifest.to_str().unwrap(),
            "--out",
            "bundles",
            "--platform",
            "linux64",
            "--override",
            "Bundle1",
            "--dry-run",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid arguments"));
}

#[test]
fn missing_engine_is_reported_without_touching_the_manifest_result() {
    let dir = tempfile::tempdir().unwrap();
    let manifest = write_manifest(dir.path());

    Command::cargo_bin("bundlebuild")
        .unwrap()
        .current_dir(dir.path())
        .env_remove("BUNDLEBUILD_ENGINE")
        .args([
            "--manifest",
            manifest.to_str().unwrap(),
            "--out",
            "bundles",
            "--platform",
            "linux64",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("engine"));
}

#[test]
fn config_file_supplies_compression_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let manifest = write_manifest(dir.path());
    std::fs::write(
        dir.path().join("bundlebuild.toml"),
        r#"
[build]
compression = "lzma"

[build.per_bundle_compression]
Bundle1 = "none"
"#,
    )
    .unwrap();

    Command::cargo_bin("bundlebuild")
        .unwrap()
        .current_dir(dir.path())
        .args([
            "--manifest",
            manifest.to_str().unwrap(),
            "--out",
            "bundles",
            "--platform",
            "android",
            "--dry-run",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Bundle1: 1 asset(s), compression none"))
        .stdout(predicate::str::contains("Bundle2: 1 asset(s), compression lzma"));
}

#[cfg(unix)]
#[test]
fn full_build_writes_report_through_scripted_engine() {
    let dir = tempfile::tempdir().unwrap();
    let manifest = write_manifest(dir.path());
    std::fs::write(
        dir.path().join("bundlebuild.toml"),
        r#"
[engine]
command = "sh"
args = ["-c", "cat >/dev/null; echo '{\"code\":\"success\",\"artifacts\":[]}'"]
"#,
    )
    .unwrap();

    Command::cargo_bin("bundlebuild")
        .unwrap()
        .current_dir(dir.path())
        .args([
            "--manifest",
            manifest.to_str().unwrap(),
            "--out",
            "bundles",
            "--platform",
            "linux64",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Build succeeded"));

    let report = dir.path().join("bundles").join("build-report.json");
    let raw = std::fs::read_to_string(report).unwrap();
    assert!(raw.contains("\"success\": true"));
}

#[test]
fn invalid_manifest_aborts_before_any_engine_call() {
    let dir = tempfile::tempdir().unwrap();
    let manifest = dir.path().join("content.json");
    std::fs::write(&manifest, r#"{ "bundles": [{ "name": "b", "assets": [] }] }"#).unwrap();

    Command::cargo_bin("bundlebuild")
        .unwrap()
        .current_dir(dir.path())
        .args([
            "--manifest",
            manifest.to_str().unwrap(),
            "--out",
            "bundles",
            "--platform",
            "linux64",
            "--dry-run",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid manifest"));
}
