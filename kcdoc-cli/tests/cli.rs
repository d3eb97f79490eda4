use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const SAMPLE_KCONFIG: &str = "\
config FOO
\tbool \"Enable Foo\"
\tdefault y
\thelp
\t  Enables the Foo subsystem.

config BAR
\tstring
";

fn workdir_with_sample() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("Kconfig"), SAMPLE_KCONFIG).unwrap();
    dir
}

#[test]
fn missing_input_is_reported_before_parsing() {
    let dir = TempDir::new().unwrap();
    let mut cmd = cargo_bin_cmd!("kcdoc");
    cmd.current_dir(dir.path()).arg("Kconfig");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Kconfig file not found: Kconfig"));
    assert!(!dir.path().join("docs").exists(), "nothing must be written");
}

#[test]
fn generates_markdown_at_the_default_path() {
    let dir = workdir_with_sample();
    let mut cmd = cargo_bin_cmd!("kcdoc");
    cmd.current_dir(dir.path()).arg("Kconfig");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Markdown generated: docs/KCONFIG.md"));

    let document = fs::read_to_string(dir.path().join("docs/KCONFIG.md")).unwrap();
    assert!(document.starts_with("# Kconfig Options\n\n"));
    assert!(document.contains("## `FOO`"));
    assert!(document.contains("- **Default**: `y`"));
}

#[test]
fn output_flag_creates_intermediate_directories() {
    let dir = workdir_with_sample();
    let mut cmd = cargo_bin_cmd!("kcdoc");
    cmd.current_dir(dir.path())
        .arg("Kconfig")
        .arg("--output")
        .arg("deep/nested/options.md");

    cmd.assert().success();
    assert!(dir.path().join("deep/nested/options.md").exists());
}

#[test]
fn stdout_flag_prints_the_document_instead_of_writing() {
    let dir = workdir_with_sample();
    let mut cmd = cargo_bin_cmd!("kcdoc");
    cmd.current_dir(dir.path()).arg("Kconfig").arg("--stdout");

    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("# Kconfig Options"))
        .stdout(predicate::str::contains("## `BAR`"));
    assert!(!dir.path().join("docs").exists());
}

#[test]
fn json_format_emits_records() {
    let dir = workdir_with_sample();
    let mut cmd = cargo_bin_cmd!("kcdoc");
    cmd.current_dir(dir.path())
        .arg("Kconfig")
        .arg("--format")
        .arg("json")
        .arg("--stdout");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"name\": \"FOO\""))
        .stdout(predicate::str::contains("\"tristate\"").not());
}

#[test]
fn unknown_format_lists_the_available_ones() {
    let dir = workdir_with_sample();
    let mut cmd = cargo_bin_cmd!("kcdoc");
    cmd.current_dir(dir.path())
        .arg("Kconfig")
        .arg("--format")
        .arg("latex");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("format not found: latex"))
        .stderr(predicate::str::contains("Available formats:"));
}

#[test]
fn list_formats_shows_markdown_and_json() {
    let mut cmd = cargo_bin_cmd!("kcdoc");
    cmd.arg("--list-formats");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("markdown"))
        .stdout(predicate::str::contains("json"));
}

#[test]
fn kcdoc_toml_in_the_working_directory_is_honored() {
    let dir = workdir_with_sample();
    fs::write(
        dir.path().join("kcdoc.toml"),
        "[output]\npath = \"OPTIONS.md\"\n",
    )
    .unwrap();

    let mut cmd = cargo_bin_cmd!("kcdoc");
    cmd.current_dir(dir.path()).arg("Kconfig");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Markdown generated: OPTIONS.md"));
    assert!(dir.path().join("OPTIONS.md").exists());
}
