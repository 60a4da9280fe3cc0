//! Configuration file support for observes.
//!
//! Provides YAML-based configuration through `observes.config.yml` files,
//! including data structures, file loading, validation, and merging with
//! command-line flags.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use observes::adapters::outbound::network::GitHubSbomSource;
use observes::application::dto::OutputFormat;
use observes::repository_insights::policies::{
    StalenessThresholds, DEFAULT_DORMANT_AFTER_DAYS, DEFAULT_STALE_AFTER_DAYS,
};
use observes::shared::Result;

pub const CONFIG_FILENAME: &str = "observes.config.yml";

pub const DEFAULT_STORE_DIR: &str = ".observes";

pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub format: Option<String>,
    pub store_dir: Option<PathBuf>,
    pub page_size: Option<usize>,
    pub stale_after_days: Option<u32>,
    pub dormant_after_days: Option<u32>,
    pub sbom_source: Option<SbomSourceConfig>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Where SBOMs are read from.
#[derive(Debug, Deserialize, Default)]
pub struct SbomSourceConfig {
    pub api_base_url: Option<String>,
    pub raw_base_url: Option<String>,
    pub owner: Option<String>,
    pub repository: Option<String>,
    pub branch: Option<String>,
    pub root_path: Option<String>,
}

/// Effective settings after merging CLI flags, the config file and defaults.
#[derive(Debug, Clone)]
pub struct Settings {
    pub format: OutputFormat,
    pub store_dir: PathBuf,
    pub page_size: usize,
    pub thresholds: StalenessThresholds,
    pub sbom_source: Option<GitHubSbomSource>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(format) = &config.format {
        if let Err(e) = format.parse::<OutputFormat>() {
            bail!("Invalid config: format: {}", e);
        }
    }

    if config.page_size == Some(0) {
        bail!(
            "Invalid config: page_size must be at least 1.\n\n\
             💡 Hint: Remove page_size to use the default of {}.",
            DEFAULT_PAGE_SIZE
        );
    }

    thresholds_from(config).context("Invalid config: stale_after_days / dormant_after_days")?;

    if let Some(source) = &config.sbom_source {
        for (field, value) in [("owner", &source.owner), ("repository", &source.repository)] {
            if value.as_deref().is_some_and(|v| v.trim().is_empty()) {
                bail!(
                    "Invalid config: sbom_source.{} must not be empty.\n\n\
                     💡 Hint: Set it to the GitHub {} that holds the SBOMs.",
                    field,
                    field
                );
            }
        }
    }

    Ok(())
}

fn thresholds_from(config: &ConfigFile) -> Result<StalenessThresholds> {
    StalenessThresholds::new(
        config.stale_after_days.unwrap_or(DEFAULT_STALE_AFTER_DAYS),
        config.dormant_after_days.unwrap_or(DEFAULT_DORMANT_AFTER_DAYS),
    )
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        eprintln!("⚠️  Warning: Unknown config field '{}' will be ignored.", key);
    }
}

/// Merge CLI flags over the config file over built-in defaults.
pub fn resolve_settings(
    cli_format: Option<OutputFormat>,
    cli_store_dir: Option<PathBuf>,
    config: Option<&ConfigFile>,
) -> Result<Settings> {
    let default_config = ConfigFile::default();
    let config = config.unwrap_or(&default_config);

    let format = match (cli_format, &config.format) {
        (Some(format), _) => format,
        (None, Some(format)) => format.parse().map_err(anyhow::Error::msg)?,
        (None, None) => OutputFormat::default(),
    };

    let store_dir = cli_store_dir
        .or_else(|| config.store_dir.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_STORE_DIR));

    Ok(Settings {
        format,
        store_dir,
        page_size: config.page_size.unwrap_or(DEFAULT_PAGE_SIZE),
        thresholds: thresholds_from(config)?,
        sbom_source: config.sbom_source.as_ref().and_then(sbom_source_from),
    })
}

/// `None` unless both owner and repository are configured.
fn sbom_source_from(config: &SbomSourceConfig) -> Option<GitHubSbomSource> {
    let mut source = GitHubSbomSource::new(config.owner.clone()?, config.repository.clone()?);
    if let Some(url) = &config.api_base_url {
        source.api_base_url = url.clone();
    }
    if let Some(url) = &config.raw_base_url {
        source.raw_base_url = url.clone();
    }
    if let Some(branch) = &config.branch {
        source.branch = branch.clone();
    }
    if let Some(root_path) = &config.root_path {
        source.root_path = root_path.clone();
    }
    Some(source)
}
