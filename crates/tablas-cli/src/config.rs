// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result, anyhow, bail};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const APP_NAME: &str = "tablas";
const CONFIG_VERSION: i64 = 1;
const DEFAULT_DEBOUNCE: &str = "300ms";
const DEFAULT_STATUS_TTL: &str = "4s";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub version: i64,
    #[serde(default)]
    pub ui: Ui,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            ui: Ui::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Ui {
    pub debounce: Option<String>,
    pub status_ttl: Option<String>,
    pub pinned_start_tab: Option<bool>,
}

impl Default for Ui {
    fn default() -> Self {
        Self {
            debounce: Some(DEFAULT_DEBOUNCE.to_owned()),
            status_ttl: Some(DEFAULT_STATUS_TTL.to_owned()),
            pinned_start_tab: Some(false),
        }
    }
}

impl Config {
    pub fn default_path() -> Result<PathBuf> {
        if let Some(path) = env::var_os("TABLAS_CONFIG_PATH") {
            return Ok(PathBuf::from(path));
        }

        let config_root = dirs::config_dir().ok_or_else(|| {
            anyhow!("cannot resolve config directory; set TABLAS_CONFIG_PATH to the config file")
        })?;

        let app_dir = config_root.join(APP_NAME);
        fs::create_dir_all(&app_dir)
            .with_context(|| format!("create config directory {}", app_dir.display()))?;
        Ok(app_dir.join("config.toml"))
    }

    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(path)
            .with_context(|| format!("read config file {}", path.display()))?;
        let value: toml::Value = toml::from_str(&raw)
            .with_context(|| format!("parse TOML config {}", path.display()))?;

        let version = value
            .get("version")
            .and_then(toml::Value::as_integer)
            .ok_or_else(|| {
                anyhow!(
                    "config file {} is not versioned. Add `version = 1` and move values under [ui]",
                    path.display()
                )
            })?;

        if version != CONFIG_VERSION {
            bail!(
                "unsupported config version {} in {}; expected version = 1",
                version,
                path.display()
            );
        }

        let config: Config = value
            .try_into()
            .with_context(|| format!("decode config {}", path.display()))?;
        config.validate(path)?;
        Ok(config)
    }

    fn validate(&self, path: &Path) -> Result<()> {
        for (key, raw) in [
            ("ui.debounce", self.ui.debounce.as_deref()),
            ("ui.status_ttl", self.ui.status_ttl.as_deref()),
        ] {
            if let Some(raw) = raw {
                let parsed = parse_duration(raw)?;
                if parsed <= Duration::ZERO {
                    bail!("{key} in {} must be positive, got {raw}", path.display());
                }
            }
        }
        Ok(())
    }

    pub fn debounce(&self) -> Result<Duration> {
        parse_duration(self.ui.debounce.as_deref().unwrap_or(DEFAULT_DEBOUNCE))
    }

    pub fn status_ttl(&self) -> Result<Duration> {
        parse_duration(self.ui.status_ttl.as_deref().unwrap_or(DEFAULT_STATUS_TTL))
    }

    pub fn pinned_start_tab(&self) -> bool {
        self.ui.pinned_start_tab.unwrap_or(false)
    }

    pub fn example_config(path: &Path) -> String {
        format!(
            "# tablas config\n# Place this file at: {}\n\nversion = 1\n\n[ui]\n# Quiescence interval between the last edit and table generation\ndebounce = \"{}\"\n# How long status messages linger\nstatus_ttl = \"{}\"\n# Start with a pinned 1-10 times table that bulk delete leaves alone\npinned_start_tab = false\n",
            path.display(),
            DEFAULT_DEBOUNCE,
            DEFAULT_STATUS_TTL,
        )
    }
}

fn parse_duration(raw: &str) -> Result<Duration> {
    if let Some(value) = raw.strip_suffix("ms") {
        let millis: u64 = value
            .parse()
            .with_context(|| format!("invalid duration {raw:?}"))?;
        return Ok(Duration::from_millis(millis));
    }
    if let Some(value) = raw.strip_suffix('s') {
        let secs: u64 = value
            .parse()
            .with_context(|| format!("invalid duration {raw:?}"))?;
        return Ok(Duration::from_secs(secs));
    }
    if let Some(value) = raw.strip_suffix('m') {
        let mins: u64 = value
            .parse()
            .with_context(|| format!("invalid duration {raw:?}"))?;
        return Ok(Duration::from_secs(mins * 60));
    }

    bail!("invalid duration {raw:?}; use one of: <N>ms, <N>s, <N>m (for example 300ms or 2s)")
}
