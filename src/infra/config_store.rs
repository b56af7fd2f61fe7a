// ============================================================
// Layer 6 — Config Store
// ============================================================
// Saves and loads an ArchitectureConfig as pretty JSON.
//
// The file is the whole description of a model: which
// architecture, and every hyper-parameter needed to rebuild
// it. Fields left out of a hand-written file fall back to the
// defaults declared on the Burn config structs.
//
// Reference: Rust Book §9 (Error Handling with anyhow)

use anyhow::{Context, Result};
use std::{fs, path::{Path, PathBuf}};

use crate::ml::model::ArchitectureConfig;

pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the config, creating parent directories as needed.
    pub fn save(&self, config: &ArchitectureConfig) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Cannot create directory '{}'", parent.display()))?;
        }

        let json = serde_json::to_string_pretty(config)?;
        fs::write(&self.path, json)
            .with_context(|| format!("Cannot write config to '{}'", self.path.display()))?;

        tracing::debug!("Saved {} config to '{}'", config.kind(), self.path.display());
        Ok(())
    }

    pub fn load(&self) -> Result<ArchitectureConfig> {
        let json = fs::read_to_string(&self.path)
            .with_context(|| {
                format!(
                    "Cannot read config from '{}'. \
                     Run 'init-config' to create one.",
                    self.path.display()
                )
            })?;

        serde_json::from_str(&json)
            .with_context(|| format!("Invalid model config in '{}'", self.path.display()))
    }
}
