//! CLI integration tests

use std::path::Path;
use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;

const URL: &str = "https://example.com/watch?v=abc";

/// Binary isolated from the user's config file and environment overrides
fn tubegrab_bin(config_home: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_tubegrab"));
    cmd.env("XDG_CONFIG_HOME", config_home)
        .env("HOME", config_home)
        .env_remove("TUBEGRAB_OUTPUT_DIR")
        .env_remove("TUBEGRAB_YT_DLP")
        .env_remove("TUBEGRAB_FFMPEG")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn help_output() {
    let home = tempfile::tempdir().unwrap();
    let output = tubegrab_bin(home.path())
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("yt-dlp"));
    assert!(stdout.contains("--mode"));
    assert!(stdout.contains("--codec"));
    assert!(stdout.contains("--quality"));
    assert!(stdout.contains("--resolution"));
    assert!(stdout.contains("--output-dir"));
}

#[test]
fn version_output() {
    let home = tempfile::tempdir().unwrap();
    tubegrab_bin(home.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("tubegrab"))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn url_is_required() {
    let home = tempfile::tempdir().unwrap();
    tubegrab_bin(home.path()).assert().failure().code(2);
}

#[test]
fn unknown_mode_is_rejected() {
    let home = tempfile::tempdir().unwrap();
    tubegrab_bin(home.path())
        .args([URL, "--mode", "gif"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("gif"));
}

#[test]
fn empty_url_is_invalid_input() {
    let home = tempfile::tempdir().unwrap();
    let out = home.path().join("out");

    tubegrab_bin(home.path())
        .arg("")
        .arg("-o")
        .arg(&out)
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("URL must not be empty"));

    assert!(!out.exists());
}

#[test]
fn zero_resolution_is_invalid_input() {
    let home = tempfile::tempdir().unwrap();
    let out = home.path().join("out");

    tubegrab_bin(home.path())
        .args([URL, "--mode", "video", "--resolution", "0", "-o"])
        .arg(&out)
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Invalid resolution"));

    assert!(!out.exists());
}

#[test]
fn dry_run_audio_defaults() {
    let home = tempfile::tempdir().unwrap();
    let out = home.path().join("out");

    tubegrab_bin(home.path())
        .args([URL, "--dry-run", "-o"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("yt-dlp --ignore-config "))
        .stdout(predicate::str::contains("-f bestaudio/best"))
        .stdout(predicate::str::contains("--audio-format mp3"))
        .stdout(predicate::str::contains("--audio-quality 192"));

    // Dry runs never create the output directory
    assert!(!out.exists());
}

#[test]
fn dry_run_audio_with_codec_and_quality() {
    let home = tempfile::tempdir().unwrap();

    tubegrab_bin(home.path())
        .args([URL, "--mode", "audio", "--codec", "aac", "--quality", "128", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--audio-format aac"))
        .stdout(predicate::str::contains("--audio-quality 128"))
        .stdout(predicate::str::contains("--merge-output-format").not());
}

#[test]
fn dry_run_video_defaults() {
    let home = tempfile::tempdir().unwrap();

    tubegrab_bin(home.path())
        .args([URL, "--mode", "video", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("bestvideo[height<=1080]+bestaudio/best"))
        .stdout(predicate::str::contains("--merge-output-format mp4"))
        .stdout(predicate::str::contains("--audio-format").not());
}

#[test]
fn dry_run_video_with_resolution() {
    let home = tempfile::tempdir().unwrap();

    tubegrab_bin(home.path())
        .args([URL, "--mode", "video", "--resolution", "720", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("height<=720"));
}

#[test]
fn dry_run_uses_configured_engine_and_ffmpeg() {
    let home = tempfile::tempdir().unwrap();

    tubegrab_bin(home.path())
        .args([URL, "--dry-run"])
        .env("TUBEGRAB_YT_DLP", "/opt/bin/yt-dlp")
        .env("TUBEGRAB_FFMPEG", "/opt/ffmpeg/bin")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("/opt/bin/yt-dlp "))
        .stdout(predicate::str::contains("--ffmpeg-location /opt/ffmpeg/bin"));
}

#[test]
fn config_file_supplies_defaults() {
    let home = tempfile::tempdir().unwrap();

    tubegrab_bin(home.path())
        .args(["config", "set", "mode", "video"])
        .assert()
        .success();
    tubegrab_bin(home.path())
        .args(["config", "set", "resolution", "480"])
        .assert()
        .success();

    tubegrab_bin(home.path())
        .args([URL, "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("height<=480"));

    // Flags still win over the file
    tubegrab_bin(home.path())
        .args([URL, "--resolution", "2160", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("height<=2160"));
}

#[test]
fn config_path_command() {
    let home = tempfile::tempdir().unwrap();
    let output = tubegrab_bin(home.path())
        .args(["config", "path"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("tubegrab"));
    assert!(stdout.contains("config.toml"));
}

#[test]
fn config_help() {
    let home = tempfile::tempdir().unwrap();
    let output = tubegrab_bin(home.path())
        .args(["config", "--help"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("init"));
    assert!(stdout.contains("set"));
    assert!(stdout.contains("get"));
    assert!(stdout.contains("list"));
    assert!(stdout.contains("path"));
}
