// Runs the built binary the way a user would, with a private HOME

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

fn run_in(work_dir: &Path, home: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_speaker-icons"))
        .args(args)
        .current_dir(work_dir)
        .env("HOME", home)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to launch speaker-icons")
}

fn write_user_settings(home: &Path, contents: &str) {
    let settings_dir = home.join(".speaker-icons");
    fs::create_dir_all(&settings_dir).unwrap();
    fs::write(settings_dir.join("settings.yaml"), contents).unwrap();
}

#[test]
fn test_no_arguments_ignores_user_settings() {
    let home = tempfile::tempdir().unwrap();
    let work = tempfile::tempdir().unwrap();
    write_user_settings(home.path(), "output_dir: elsewhere\nforce_placeholder: true\n");

    let output = run_in(work.path(), home.path(), &[]);

    assert!(output.status.success());
    assert!(!work.path().join("elsewhere").exists());
    for size in [16, 32, 48, 128] {
        assert!(work.path().join(format!("icon-{}.png", size)).is_file());
    }

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(!stdout.contains("requested"));
    #[cfg(feature = "render")]
    assert!(stdout.starts_with("Created icon-16.png\n"));
}

#[test]
fn test_no_arguments_ignores_malformed_user_settings() {
    let home = tempfile::tempdir().unwrap();
    let work = tempfile::tempdir().unwrap();
    write_user_settings(home.path(), "output_dir: [\n");

    let output = run_in(work.path(), home.path(), &[]);

    assert!(output.status.success());
    assert!(work.path().join("icon-128.png").is_file());
}

#[test]
fn test_user_config_flag_reads_home_settings() {
    let home = tempfile::tempdir().unwrap();
    let work = tempfile::tempdir().unwrap();
    write_user_settings(home.path(), "output_dir: elsewhere\nforce_placeholder: true\n");

    let output = run_in(work.path(), home.path(), &["--user-config"]);

    assert!(output.status.success());
    let contents = fs::read_to_string(work.path().join("elsewhere").join("icon-16.png")).unwrap();
    assert_eq!(contents, "# Placeholder icon 16x16\n");
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(
        stdout,
        "Placeholder mode requested, creating simple text files as placeholders\n"
    );
}

#[test]
fn test_explicit_malformed_config_is_fatal() {
    let home = tempfile::tempdir().unwrap();
    let work = tempfile::tempdir().unwrap();
    let config = work.path().join("icons.yaml");
    fs::write(&config, "output_dir: [\n").unwrap();

    let output = run_in(work.path(), home.path(), &["--config", config.to_str().unwrap()]);

    assert!(!output.status.success());
    assert!(!work.path().join("icon-16.png").exists());
}
