//! Tests for the config module

use super::loader::{load_or_default, load_with_warnings, with_env_overrides_from};
use super::types::*;
use std::collections::HashMap;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_config_default() {
    let config = Config::default();

    assert_eq!(config.scaffold.cli_package, "@angular/cli");
    assert_eq!(config.scaffold.project_name, "test-project");
    assert!(config.scaffold.extra_args.is_empty());
    assert_eq!(config.install.dev_dependencies.len(), 7);
    assert!(config
        .install
        .dev_dependencies
        .contains(&"@types/jasmine".to_string()));
    assert_eq!(config.karma.port, 9876);
    assert_eq!(config.karma.browser, "Chrome");
    assert!(!config.karma.single_run);
}

#[test]
fn test_config_parse_toml_partial_sections_keep_defaults() {
    let toml = r#"
[scaffold]
project_name = "harness"
extra_args = ["--skip-git"]

[karma]
single_run = true
"#;

    let config: Config = toml::from_str(toml).unwrap();

    assert_eq!(config.scaffold.project_name, "harness");
    assert_eq!(config.scaffold.extra_args, vec!["--skip-git".to_string()]);
    assert_eq!(config.scaffold.cli_package, "@angular/cli");
    assert!(config.karma.single_run);
    assert_eq!(config.karma.port, 9876);
    assert_eq!(config.install, InstallConfig::default());
}

#[test]
fn test_load_with_warnings_reports_unknown_key_with_suggestion() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("ngharness.toml");
    fs::write(&path, "[karma]\nprot = 9000\n").unwrap();

    let (config, warnings) = load_with_warnings(&path).unwrap();

    assert_eq!(config.karma.port, 9876);
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].key, "prot");
    assert_eq!(warnings[0].line, Some(2));
    assert_eq!(warnings[0].suggestion.as_deref(), Some("port"));
}

#[test]
fn test_load_with_warnings_rejects_invalid_toml() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("ngharness.toml");
    fs::write(&path, "[karma\nport = ").unwrap();

    let err = load_with_warnings(&path).unwrap_err();

    assert!(err.to_string().starts_with("invalid config"));
}

#[test]
fn test_load_or_default_prefers_project_file() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("ngharness.toml"),
        "[scaffold]\nproject_name = \"from-project\"\n",
    )
    .unwrap();

    let (config, source) = load_or_default(Some(dir.path())).unwrap();

    assert_eq!(config.scaffold.project_name, "from-project");
    let (path, warnings) = source.unwrap();
    assert_eq!(path, dir.path().join("ngharness.toml"));
    assert!(warnings.is_empty());
}

#[test]
fn test_env_overrides() {
    let vars: HashMap<&str, &str> = [
        ("NGHARNESS_NPX", "/opt/node/bin/npx"),
        ("NGHARNESS_NPM", "pnpm"),
        ("NGHARNESS_KARMA_PORT", "9999"),
        ("NGHARNESS_KARMA_BROWSER", "ChromeHeadless"),
    ]
    .into_iter()
    .collect();

    let config = with_env_overrides_from(Config::default(), |key| {
        vars.get(key).map(|v| v.to_string())
    });

    assert_eq!(config.scaffold.npx, "/opt/node/bin/npx");
    assert_eq!(config.install.npm, "pnpm");
    assert_eq!(config.karma.port, 9999);
    assert_eq!(config.karma.browser, "ChromeHeadless");
    assert_eq!(config.scaffold.project_name, "test-project");
}

#[test]
fn test_env_overrides_ignore_blank_and_invalid_values() {
    let config = with_env_overrides_from(Config::default(), |key| match key {
        "NGHARNESS_NPX" => Some("  ".to_string()),
        "NGHARNESS_KARMA_PORT" => Some("not-a-port".to_string()),
        _ => None,
    });

    assert_eq!(config, Config::default());
}
