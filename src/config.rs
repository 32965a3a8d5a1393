use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, anyhow};
use jsonschema::JSONSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::submission::SubmissionConfig;

/// Shipped with the binary so a config file is all a deployment needs.
const CONFIG_SCHEMA: &str = include_str!("../order-form.schema.json");

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub submission: SubmissionConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where the feature list comes from. `None` selects the built-in catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default)]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum LoggingRotation {
    #[default]
    Daily,
    Hourly,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub dir: PathBuf,
    pub filter: String,
    pub rotation: LoggingRotation,
    pub retention_days: usize,
    pub stderr_warn_enabled: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("./logs"),
            filter: "info".to_string(),
            rotation: LoggingRotation::Daily,
            retention_days: 14,
            stderr_warn_enabled: true,
        }
    }
}

impl Config {
    pub fn load(config_path: &Path) -> Result<Self> {
        let text = fs::read_to_string(config_path)
            .with_context(|| format!("failed to read {}", config_path.display()))?;
        let base_dir = config_path.parent().unwrap_or_else(|| Path::new("."));
        Self::parse(&text, base_dir)
            .with_context(|| format!("invalid config {}", config_path.display()))
    }

    /// Parses JSON5 text, checks it against the bundled schema and resolves a relative
    /// catalog path against `base_dir`.
    pub fn parse(text: &str, base_dir: &Path) -> Result<Self> {
        let value: Value = json5::from_str(text).context("config is not valid JSON5")?;
        check_schema(&value)?;

        let mut config: Config =
            serde_json::from_value(value).context("failed to deserialize config")?;
        if let Some(path) = config.catalog.path.as_mut()
            && path.is_relative()
        {
            *path = base_dir.join(&*path);
        }
        Ok(config)
    }
}

fn check_schema(value: &Value) -> Result<()> {
    let schema: Value =
        serde_json::from_str(CONFIG_SCHEMA).context("bundled config schema is not JSON")?;
    let validator =
        JSONSchema::compile(&schema).map_err(|err| anyhow!("bad config schema: {err}"))?;

    if let Err(errors) = validator.validate(value) {
        let problems: Vec<String> = errors
            .map(|error| format!("{}: {}", error.instance_path, error))
            .collect();
        return Err(anyhow!("config validation failed: {}", problems.join("; ")));
    }
    Ok(())
}
