//! Configuration file discovery and loading.

use crate::config::schema::LintStatusConfig;
use crate::error::{LintStatusError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// File name looked up in the project directory.
pub const CONFIG_FILE_NAME: &str = "lint-status.yml";

/// Find `lint-status.yml` in `dir`.
pub fn find_config(dir: &Path) -> Option<PathBuf> {
    let path = dir.join(CONFIG_FILE_NAME);
    if path.is_file() {
        Some(path)
    } else {
        None
    }
}

/// Load a single config file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<LintStatusConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            LintStatusError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            LintStatusError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into a config.
///
/// Blank content yields the default config.
///
/// # Arguments
///
/// * `content` - The YAML content to parse
/// * `source_path` - Path for error reporting
pub fn parse_config(content: &str, source_path: &Path) -> Result<LintStatusConfig> {
    if content.trim().is_empty() {
        return Ok(LintStatusConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| LintStatusError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load config with optional path override.
///
/// If `config_override` is provided, that file must exist. Otherwise
/// `lint-status.yml` in `project_root` is used when present, and the
/// default config when not.
pub fn load_config(
    project_root: &Path,
    config_override: Option<&Path>,
) -> Result<LintStatusConfig> {
    if let Some(override_path) = config_override {
        tracing::debug!("Loading config from {}", override_path.display());
        return load_config_file(override_path);
    }

    match find_config(project_root) {
        Some(path) => {
            tracing::debug!("Loading config from {}", path.display());
            load_config_file(&path)
        }
        None => {
            tracing::debug!("No {} in {}", CONFIG_FILE_NAME, project_root.display());
            Ok(LintStatusConfig::default())
        }
    }
}
