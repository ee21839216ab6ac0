//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{HarnessError, HarnessResult};

use super::types::Config;

/// File name looked up in the source project root
pub const PROJECT_CONFIG_FILE: &str = "ngharness.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> HarnessResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| HarnessError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from project config, user config, or defaults.
///
/// Unlike a missing file, a config file that exists but fails to parse is an error.
pub fn load_or_default(
    project_root: Option<&Path>,
) -> HarnessResult<(Config, Option<(PathBuf, Vec<ConfigWarning>)>)> {
    let candidates = project_root
        .map(|root| root.join(PROJECT_CONFIG_FILE))
        .into_iter()
        .chain(dirs::config_dir().map(|dir| dir.join("ngharness").join("config.toml")));

    for candidate in candidates {
        if candidate.is_file() {
            let (config, warnings) = load_with_warnings(&candidate)?;
            return Ok((config, Some((candidate, warnings))));
        }
    }

    Ok((Config::default(), None))
}

/// Apply environment variable overrides using `lookup` to read variables.
pub fn with_env_overrides_from<F>(mut config: Config, lookup: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(npx) = lookup("NGHARNESS_NPX").filter(|v| !v.trim().is_empty()) {
        config.scaffold.npx = npx;
    }

    if let Some(npm) = lookup("NGHARNESS_NPM").filter(|v| !v.trim().is_empty()) {
        config.install.npm = npm;
    }

    if let Some(name) = lookup("NGHARNESS_PROJECT_NAME").filter(|v| !v.trim().is_empty()) {
        config.scaffold.project_name = name;
    }

    // Unparseable ports are ignored rather than rejected
    if let Some(port) = lookup("NGHARNESS_KARMA_PORT").and_then(|v| v.trim().parse().ok()) {
        config.karma.port = port;
    }

    if let Some(browser) = lookup("NGHARNESS_KARMA_BROWSER").filter(|v| !v.trim().is_empty()) {
        config.karma.browser = browser;
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "scaffold",
        "npx",
        "cli_package",
        "project_name",
        "extra_args",
        "install",
        "npm",
        "dev_dependencies",
        "karma",
        "port",
        "browser",
        "single_run",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
