use super::FormatOptions;
use std::path::{Path, PathBuf};

/// Candidate files per directory, in lookup order.
const CONFIG_FILES: &[&str] = &[
    "package.json",
    ".prettierrc",
    ".prettierrc.json",
    ".prettierrc.yaml",
    ".prettierrc.yml",
    ".prettierrc.json5",
    ".prettierrc.js",
    ".prettierrc.cjs",
    ".prettierrc.mjs",
    "prettier.config.js",
    "prettier.config.cjs",
    "prettier.config.mjs",
    ".prettierrc.toml",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatConfig {
    pub options: FormatOptions,
    /// The file the options came from; `None` means the built-in fallback.
    pub source: Option<PathBuf>,
}

impl FormatConfig {
    pub fn fallback() -> Self {
        Self {
            options: FormatOptions::fallback(),
            source: None,
        }
    }
}

/// Walk up from `start` and use the first Prettier config that can be read.
///
/// Files that exist but cannot be used (JavaScript, JSON5, broken YAML) are
/// reported and skipped.
pub fn resolve_format_config(start: &Path) -> FormatConfig {
    for dir in start.ancestors() {
        for name in CONFIG_FILES {
            let path = dir.join(name);
            if !path.is_file() {
                continue;
            }
            match load_config_file(&path) {
                Ok(Some(options)) => {
                    tracing::debug!(path = %path.display(), "using prettier config");
                    return FormatConfig {
                        options,
                        source: Some(path),
                    };
                }
                Ok(None) => {}
                Err(e) => {
                    tracing::warn!(path = %path.display(), "ignoring prettier config: {e:#}");
                }
            }
        }
    }

    tracing::debug!("no prettier config found, using defaults");
    FormatConfig::fallback()
}

/// `Ok(None)` means the file is not a Prettier config (a `package.json` without a `prettier` key).
fn load_config_file(path: &Path) -> anyhow::Result<Option<FormatOptions>> {
    let name = path.file_name().and_then(|n| n.to_str()).unwrap_or_default();

    let raw = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("failed to read {}: {e}", path.display()))?;

    match name {
        "package.json" => {
            let mut pkg: serde_json::Value = serde_json::from_str(&raw)
                .map_err(|e| anyhow::anyhow!("invalid JSON: {e}"))?;
            match pkg.get_mut("prettier").map(serde_json::Value::take) {
                None => Ok(None),
                Some(serde_json::Value::String(shared)) => {
                    anyhow::bail!("shared config `{shared}` is not supported")
                }
                Some(v) => Ok(Some(
                    serde_json::from_value(v).map_err(|e| anyhow::anyhow!("invalid options: {e}"))?,
                )),
            }
        }
        ".prettierrc.json" => Ok(Some(
            serde_json::from_str(&raw).map_err(|e| anyhow::anyhow!("invalid JSON: {e}"))?,
        )),
        // JSON is a subset of YAML, so extensionless files go through the YAML reader too
        ".prettierrc" | ".prettierrc.yaml" | ".prettierrc.yml" => {
            if raw.trim().is_empty() {
                return Ok(Some(FormatOptions::default()));
            }
            Ok(Some(
                serde_yaml::from_str(&raw).map_err(|e| anyhow::anyhow!("invalid YAML: {e}"))?,
            ))
        }
        ".prettierrc.toml" => Ok(Some(
            toml::from_str(&raw).map_err(|e| anyhow::anyhow!("invalid TOML: {e}"))?,
        )),
        other => anyhow::bail!("unsupported config format `{other}`"),
    }
}
