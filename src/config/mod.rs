//! Configuration loading and parsing for lint-status.
//!
//! This module handles:
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//!
//! # Example
//!
//! ```
//! use lint_status::config::load_config;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(
//!     temp.path().join("lint-status.yml"),
//!     "engine:\n  command: node\n  args: [jslint-json.js]\n",
//! )
//! .unwrap();
//!
//! let config = load_config(temp.path(), None).unwrap();
//! let engine = config.engine().unwrap();
//! assert_eq!(engine.command(), "node");
//! ```
//!
//! # Configuration File Location
//!
//! `lint-status.yml` in the working directory, unless `--config` names
//! another file. Command-line flags override file values.

pub mod loader;
pub mod schema;

pub use loader::{find_config, load_config, load_config_file, parse_config, CONFIG_FILE_NAME};
pub use schema::{EngineConfig, LintStatusConfig};
