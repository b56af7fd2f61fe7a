// ============================================================
// Layer 2 — DescribeUseCase
// ============================================================
// Loads a model config and reports what it builds:
//
//   Step 1: Load the config file        (Layer 6 - infra)
//   Step 2: Build + probe the model     (Layer 5 - ml)
//   Step 3: Return a ModelSummary for the CLI to print

use anyhow::Result;
use serde::Serialize;
use std::fmt;

use crate::infra::config_store::ConfigStore;
use crate::ml::{
    backend::{inspect_device, InspectBackend},
    model::ArchitectureConfig,
    probe::{probe_model, ProbeReport},
};

/// Config plus the probe's findings.
#[derive(Debug, Clone, Serialize)]
pub struct ModelSummary {
    pub config_path: String,
    pub config:      ArchitectureConfig,
    pub probe:       ProbeReport,
}

impl fmt::Display for ModelSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = &self.probe;
        writeln!(f, "Config:          {}", self.config_path)?;
        writeln!(f, "Architecture:    {}", p.architecture)?;
        writeln!(f, "Parameters:      {}", p.num_params)?;
        writeln!(f, "Input shape:     {:?}  [batch, time, features]", p.input_shape)?;
        write!(f,   "Output shape:    {:?}  [batch, time, classes]", p.output_shape)?;
        if let Some(rf) = p.receptive_field {
            write!(f, "\nReceptive field: {rf} frames")?;
        }
        if let Some(pad) = p.max_padding {
            write!(f, "\nMax padding:     {pad} frames")?;
        }
        Ok(())
    }
}

pub struct DescribeUseCase {
    config_path: String,
    batch_size:  usize,
    frames:      usize,
}

impl DescribeUseCase {
    pub fn new(config_path: impl Into<String>, batch_size: usize, frames: usize) -> Self {
        Self { config_path: config_path.into(), batch_size, frames }
    }

    pub fn execute(&self) -> Result<ModelSummary> {
        let config = ConfigStore::new(&self.config_path).load()?;
        tracing::info!("Loaded {} config from '{}'", config.kind(), self.config_path);

        let device = inspect_device();
        let probe  = probe_model::<InspectBackend>(&config, self.batch_size, self.frames, &device)?;
        tracing::info!(
            "Probe ok: {:?} → {:?}",
            probe.input_shape, probe.output_shape
        );

        Ok(ModelSummary { config_path: self.config_path.clone(), config, probe })
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::architecture::ArchitectureKind;
    use crate::ml::recurrent::RecurrentClassifierConfig;

    #[test]
    fn test_describes_saved_config() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("gru.json");
        let config = ArchitectureConfig::Recurrent(
            RecurrentClassifierConfig::new(8, 3).with_hidden_size(16),
        );
        ConfigStore::new(&path).save(&config).unwrap();

        let summary = DescribeUseCase::new(path.display().to_string(), 2, 12).execute().unwrap();
        assert_eq!(summary.probe.architecture, ArchitectureKind::Recurrent);
        assert_eq!(summary.probe.output_shape, [2, 12, 3]);
        assert_eq!(summary.probe.receptive_field, None);

        let text = summary.to_string();
        assert!(text.contains("recurrent"));
        assert!(!text.contains("Receptive field"));
    }

    #[test]
    fn test_summary_serialises_to_json() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("linear.json");
        ConfigStore::new(&path)
            .save(&ArchitectureConfig::with_defaults(ArchitectureKind::Linear, 5, 2))
            .unwrap();

        let summary = DescribeUseCase::new(path.display().to_string(), 1, 4).execute().unwrap();
        let json    = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["config"]["architecture"], "linear");
        assert_eq!(json["probe"]["output_shape"], serde_json::json!([1, 4, 2]));
        assert!(json["probe"]["receptive_field"].is_null());
    }

    #[test]
    fn test_wavenet_summary_uses_one_architecture_name() {
        use crate::ml::wavenet::WaveNetClassifierConfig;

        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("wavenet.json");
        let config = ArchitectureConfig::WaveNet(
            WaveNetClassifierConfig::new(4, 2)
                .with_hidden_size(4)
                .with_dilation_depth(2)
                .with_n_repeat(1),
        );
        ConfigStore::new(&path).save(&config).unwrap();

        let summary = DescribeUseCase::new(path.display().to_string(), 1, 6).execute().unwrap();
        let json    = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["config"]["architecture"], "wavenet");
        assert_eq!(json["probe"]["architecture"], json["config"]["architecture"]);
        assert_eq!(json["probe"]["receptive_field"], 4);
    }

    #[test]
    fn test_missing_config_fails() {
        let dir = tempfile::tempdir().unwrap();
        let use_case = DescribeUseCase::new(dir.path().join("none.json").display().to_string(), 1, 4);
        assert!(use_case.execute().is_err());
    }
}
