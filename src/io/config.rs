// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Style configuration serialization and deserialization.
//!
//! This module handles loading and saving seek bar styles in YAML
//! and JSON formats. Loaded styles are validated before use.

use crate::models::style::SeekBarConfig;
use anyhow::{bail, Context, Result};
use std::path::Path;

/// Supported style file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleFormat {
    Yaml,
    Json,
}

impl StyleFormat {
    /// Pick the format from a file extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path.extension().and_then(|s| s.to_str());
        match extension {
            Some("yaml") | Some("yml") => Ok(Self::Yaml),
            Some("json") => Ok(Self::Json),
            _ => bail!("Unsupported file extension: {:?}", extension),
        }
    }
}

/// Export a style to YAML format.
pub fn export_yaml(config: &SeekBarConfig, path: &Path) -> Result<()> {
    let yaml = serde_yaml::to_string(config)?;
    std::fs::write(path, yaml).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

/// Export a style to JSON format.
pub fn export_json(config: &SeekBarConfig, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(config)?;
    std::fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

/// Import a style from YAML format.
pub fn import_yaml(path: &Path) -> Result<SeekBarConfig> {
    let yaml = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let config: SeekBarConfig = serde_yaml::from_str(&yaml)
        .with_context(|| format!("parsing {}", path.display()))?;
    config.validate()?;
    Ok(config)
}

/// Import a style from JSON format.
pub fn import_json(path: &Path) -> Result<SeekBarConfig> {
    let json = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let config: SeekBarConfig = serde_json::from_str(&json)
        .with_context(|| format!("parsing {}", path.display()))?;
    config.validate()?;
    Ok(config)
}

/// Save a style, choosing the format from the file extension.
pub fn save(config: &SeekBarConfig, path: &Path) -> Result<()> {
    match StyleFormat::from_path(path)? {
        StyleFormat::Yaml => export_yaml(config, path),
        StyleFormat::Json => export_json(config, path),
    }
}

/// Load a style, choosing the format from the file extension.
pub fn load(path: &Path) -> Result<SeekBarConfig> {
    match StyleFormat::from_path(path)? {
        StyleFormat::Yaml => import_yaml(path),
        StyleFormat::Json => import_json(path),
    }
}
