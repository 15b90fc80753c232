//! End-to-end runs of the `effect-wave` binary.

use effect_wave::config::SiteConfig;
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_effect-wave"))
        .args(args)
        .output()
        .expect("failed to run effect-wave")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn source_with_public() -> TempDir {
    let source = TempDir::new().unwrap();
    fs::write(
        source.path().join("config.toml"),
        "[site]\nscript = \"\"\n\n[processing]\nmax_processes = 2\n",
    )
    .unwrap();
    let logos = source.path().join("public/logos/clients");
    fs::create_dir_all(&logos).unwrap();
    fs::write(logos.join("01.png"), b"png").unwrap();
    source
}

fn build(source: &Path, output: &Path) -> Output {
    run(&[
        "build",
        "--source",
        source.to_str().unwrap(),
        "--output",
        output.to_str().unwrap(),
    ])
}

// =============================================================================
// build
// =============================================================================

#[test]
fn build_writes_every_page() {
    let source = source_with_public();
    let out = TempDir::new().unwrap();
    let result = build(source.path(), out.path());
    assert!(result.status.success(), "{}", String::from_utf8_lossy(&result.stderr));

    for page in [
        "index.html",
        "404.html",
        "en/index.html",
        "en/404.html",
        "ar/about/index.html",
        "ar/gallery/index.html",
        "en/contact/index.html",
        "en/terms/index.html",
    ] {
        assert!(out.path().join(page).exists(), "missing {page}");
    }
    assert!(out.path().join("logos/clients/01.png").exists());

    let text = stdout(&result);
    assert!(text.contains("Generated 20 pages"));
    assert!(text.contains("Public: 1 file"));
}

#[test]
fn build_output_is_static_when_script_disabled() {
    let source = source_with_public();
    let out = TempDir::new().unwrap();
    assert!(build(source.path(), out.path()).status.success());

    let home = fs::read_to_string(out.path().join("index.html")).unwrap();
    assert!(!home.contains("type=\"module\""));
    assert!(home.contains("data-route=\"\""));
}

#[test]
fn stylesheet_is_fingerprinted() {
    let source = source_with_public();
    let out = TempDir::new().unwrap();
    assert!(build(source.path(), out.path()).status.success());

    let assets: Vec<String> = fs::read_dir(out.path().join("assets"))
        .unwrap()
        .filter_map(|e| e.ok())
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .filter(|name| name.ends_with(".css"))
        .collect();
    assert_eq!(assets.len(), 1);
    let name = &assets[0];
    assert!(name.starts_with("site.") && name.len() == "site.12345678.css".len());

    let en_home = fs::read_to_string(out.path().join("en/index.html")).unwrap();
    assert!(en_home.contains(&format!("/assets/{name}")));
}

#[test]
fn build_fails_on_unknown_config_key() {
    let source = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    fs::write(source.path().join("config.toml"), "[site]\nbase_ulr = \"x\"\n").unwrap();
    let result = build(source.path(), out.path());
    assert!(!result.status.success());
}

// =============================================================================
// Other commands
// =============================================================================

#[test]
fn check_passes_on_shipped_content() {
    let source = TempDir::new().unwrap();
    let result = run(&["check", "--source", source.path().to_str().unwrap()]);
    assert!(result.status.success());
    assert!(stdout(&result).contains("Content is complete"));
}

#[test]
fn gen_config_round_trips() {
    let result = run(&["gen-config"]);
    assert!(result.status.success());
    let config: SiteConfig = toml::from_str(&stdout(&result)).unwrap();
    assert_eq!(config, SiteConfig::default());
}

#[test]
fn routes_lists_path_map() {
    let result = run(&["routes"]);
    assert!(result.status.success());
    let text = stdout(&result);
    assert_eq!(text.lines().count(), 10);
    assert!(text.contains("/philosophy"));
    assert!(text.contains("فريق العمل / Team"));
}
