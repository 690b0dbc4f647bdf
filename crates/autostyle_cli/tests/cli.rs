//! Integration tests: run the `autostyle` binary in a temp project.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

const PACKAGE_JSON: &str =
    r#"{"name":"demo","description":"Demo styles","version":"0.3.0","license":"MIT"}"#;
const MANUAL_CSS: &str = "/* END AUTO CSS */\n.card {\n\tpadding: var(--spacing);\n}\n";

fn project(manual_css: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("lib")).unwrap();
    fs::write(dir.path().join("package.json"), PACKAGE_JSON).unwrap();
    fs::write(dir.path().join("lib/css-components.css"), manual_css).unwrap();
    dir
}

fn autostyle(cwd: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_autostyle"))
        .current_dir(cwd)
        .env_remove("AUTOSTYLE_CSS_PATH")
        .env_remove("AUTOSTYLE_PACKAGE_JSON")
        .env_remove("AUTOSTYLE_MANUAL_CSS")
        .env("NO_COLOR", "1")
        .args(args)
        .output()
        .expect("run autostyle")
}

#[test]
fn print_writes_generated_css_to_stdout() {
    let dir = project(MANUAL_CSS);
    let out = autostyle(dir.path(), &["print"]);
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));

    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.starts_with("/* demo - Demo styles */\n/* VERSION: 0.3.0 */\n"));
    assert!(stdout.contains("\t--primary-color-90: rgb(26, 99, 112);\n"));
    assert!(stdout.contains("html, body {"));
    assert!(!stdout.contains(".card"));
    assert!(!dir.path().join("autoStyle.css").exists());
}

#[test]
fn print_only_color_theming_with_custom_theme() {
    let dir = project(MANUAL_CSS);
    fs::write(
        dir.path().join("theme.json"),
        r##"{ "colors": { "primary": "#414681" } }"##,
    )
    .unwrap();

    let out = autostyle(
        dir.path(),
        &["print", "--theme", "theme.json", "--only-color-theming"],
    );
    assert!(out.status.success());

    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.contains("\t--primary-color: rgb(65, 70, 129);\n"));
    assert!(!stdout.contains("html, body"));
}

#[test]
fn generate_writes_file_with_manual_tail() {
    let dir = project(MANUAL_CSS);
    let out = autostyle(dir.path(), &["generate", "--css-path", "out.css"]);
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));

    let written = fs::read_to_string(dir.path().join("out.css")).unwrap();
    assert!(written.starts_with("/* demo - Demo styles */"));
    assert!(written.ends_with(MANUAL_CSS));
}

#[test]
fn generate_without_sentinel_fails_and_writes_nothing() {
    let dir = project(".card {}\n");
    let out = autostyle(dir.path(), &["generate", "--css-path", "out.css"]);
    assert!(!out.status.success());

    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("END AUTO CSS"), "stderr: {stderr}");
    assert!(!dir.path().join("out.css").exists());
}

#[test]
fn palette_json_output() {
    let dir = TempDir::new().unwrap();
    let out = autostyle(dir.path(), &["-o", "json", "palette", "#005260"]);
    assert!(out.status.success());

    let stdout = String::from_utf8(out.stdout).unwrap();
    let list = stdout
        .lines()
        .map(|l| serde_json::from_str::<serde_json::Value>(l).unwrap())
        .find(|v| v["level"] == "list")
        .expect("list message");
    let items = list["data"]["items"].as_array().unwrap();
    assert_eq!(items.len(), 10);
    assert_eq!(items[1]["shade"], "90");
    assert_eq!(items[1]["rgb"], "rgb(26, 99, 112)");
}

#[test]
fn palette_rejects_invalid_color() {
    let dir = TempDir::new().unwrap();
    let out = autostyle(dir.path(), &["palette", "teal"]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("invalid color format"));
}

#[test]
fn presets_build_single_preset() {
    let dir = project(MANUAL_CSS);
    let out = autostyle(dir.path(), &["presets", "build", "--only", "elevdok"]);
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));

    let written = fs::read_to_string(dir.path().join("themes/elevdok.css")).unwrap();
    assert!(written.contains("\t--primary-color: rgb(65, 70, 129);\n"));
    assert!(written.ends_with(MANUAL_CSS));
}
