use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn folio() -> Command {
    let mut cmd = Command::cargo_bin("folio").expect("folio binary is built");
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn no_arguments_prints_help() {
    folio().assert().failure().stderr(predicate::str::contains("Usage"));
}

#[test]
fn render_writes_document_to_stdout() {
    folio()
        .arg("render")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<!DOCTYPE html>"))
        .stdout(predicate::str::contains(">David Vizena</h1>"))
        .stdout(predicate::str::contains("React 18"));
}

#[test]
fn render_writes_document_to_file() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let target = dir.path().join("public/index.html");

    folio().arg("render").arg("--output").arg(&target).assert().success().stdout("");

    let html = fs::read_to_string(&target)?;
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert_eq!(html.matches("David Vizena").count(), 1);
    Ok(())
}

#[test]
fn render_reads_config_file() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let config = dir.path().join("folio.toml");
    fs::write(
        &config,
        "[document]\ntitle = \"Portfolio\"\nscripts = [\"https://cdn.tailwindcss.com\"]\n",
    )?;

    folio()
        .arg("render")
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("<title>Portfolio</title>"))
        .stdout(predicate::str::contains(r#"src="https://cdn.tailwindcss.com""#));
    Ok(())
}

#[test]
fn environment_overrides_output_path() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let target = dir.path().join("env.html");

    folio().arg("render").env("FOLIO__OUTPUT", &target).assert().success();

    assert!(target.exists());
    Ok(())
}

#[test]
fn missing_config_file_fails() {
    folio()
        .args(["render", "--config", "does-not-exist.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration is malformed"));
}

#[test]
fn fragment_has_five_feature_items() {
    let output = folio().arg("fragment").output().expect("folio runs");
    assert!(output.status.success());

    let html = String::from_utf8(output.stdout).expect("utf-8 markup");
    assert!(!html.contains("<html"));
    assert_eq!(html.matches("<li>").count(), 5);
}

#[test]
fn badges_are_listed_in_order() {
    folio().arg("badges").assert().success().stdout(
        "React 18\tblue\nTailwind CSS\tgreen\nDocker\torange\nKubernetes\tpurple\n\
         GitHub Actions\tred\nCI/CD Pipeline\tindigo\nAWS EKS\tyellow\n",
    );
}

#[test]
fn log_section_enables_file_logging() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let logs = dir.path().join("logs");
    let config = dir.path().join("folio.toml");
    fs::write(&config, format!("[log]\nfilter = \"folio=debug\"\n[log.file]\ndir = {logs:?}\n"))?;

    folio().args(["fragment", "--config"]).arg(&config).assert().success();

    let log_file = fs::read_dir(&logs)?
        .flatten()
        .map(|entry| entry.path())
        .find(|path| path.extension().and_then(|ext| ext.to_str()) == Some("log"))
        .expect("log file should be created");
    assert!(fs::read_to_string(log_file)?.contains("Configuration loaded"));
    Ok(())
}

#[test]
fn invalid_log_filter_fails_before_rendering() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let config = dir.path().join("folio.toml");
    fs::write(&config, "[log]\nfilter = \"folio=loud\"\n")?;

    folio()
        .arg("render")
        .arg("--config")
        .arg(&config)
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("Invalid log filter"));
    Ok(())
}
