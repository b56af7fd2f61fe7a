// ============================================================
// Layer 2 — InitConfigUseCase
// ============================================================
// Writes a starting config file for one architecture:
//
//   Step 1: Fill in the architecture's default hyper-parameters
//   Step 2: Apply any overrides given on the command line
//   Step 3: Validate                (Layer 5 - ml)
//   Step 4: Save as JSON            (Layer 6 - infra)

use anyhow::Result;

use crate::domain::architecture::ArchitectureKind;
use crate::infra::config_store::ConfigStore;
use crate::ml::model::ArchitectureConfig;

#[derive(Debug, Clone)]
pub struct InitConfigRequest {
    pub architecture: ArchitectureKind,
    pub input_dim:    usize,
    pub classes:      usize,
    pub output_path:  String,
    /// Overrides the default hidden width (ignored by `linear`)
    pub hidden_size:  Option<usize>,
    /// Overrides the default layer count (`mlp` and `recurrent` only)
    pub num_layers:   Option<usize>,
}

pub struct InitConfigUseCase {
    request: InitConfigRequest,
}

impl InitConfigUseCase {
    pub fn new(request: InitConfigRequest) -> Self {
        Self { request }
    }

    /// Build, validate and save the config; returns what was written.
    pub fn execute(&self) -> Result<ArchitectureConfig> {
        let req = &self.request;

        let mut config = ArchitectureConfig::with_defaults(req.architecture, req.input_dim, req.classes);
        apply_overrides(&mut config, req.hidden_size, req.num_layers);
        config.validate()?;

        ConfigStore::new(&req.output_path).save(&config)?;
        tracing::info!("Wrote {} config to '{}'", req.architecture, req.output_path);
        Ok(config)
    }
}

fn apply_overrides(config: &mut ArchitectureConfig, hidden_size: Option<usize>, num_layers: Option<usize>) {
    match config {
        ArchitectureConfig::Mlp(c) => {
            if let Some(h) = hidden_size { c.hidden_size = h; }
            if let Some(n) = num_layers  { c.num_layers = n; }
        }
        ArchitectureConfig::Recurrent(c) => {
            if let Some(h) = hidden_size { c.hidden_size = h; }
            if let Some(n) = num_layers  { c.num_layers = n; }
        }
        ArchitectureConfig::WaveNet(c) => {
            if let Some(h) = hidden_size { c.hidden_size = h; }
            if num_layers.is_some() {
                tracing::warn!("--num-layers has no effect on wavenet; set dilation_depth / n_repeat in the file");
            }
        }
        ArchitectureConfig::Linear(_) => {
            if hidden_size.is_some() || num_layers.is_some() {
                tracing::warn!("linear model has no hidden layers; size overrides ignored");
            }
        }
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn request(architecture: ArchitectureKind, output_path: String) -> InitConfigRequest {
        InitConfigRequest {
            architecture,
            input_dim:   40,
            classes:     4,
            output_path,
            hidden_size: None,
            num_layers:  None,
        }
    }

    #[test]
    fn test_writes_loadable_config() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("wavenet.json").display().to_string();

        InitConfigUseCase::new(request(ArchitectureKind::WaveNet, path.clone())).execute().unwrap();

        let loaded = ConfigStore::new(&path).load().unwrap();
        assert_eq!(loaded.kind(), ArchitectureKind::WaveNet);
        assert_eq!(loaded.input_dim(), 40);
    }

    #[test]
    fn test_overrides_are_applied() {
        let dir = tempfile::tempdir().unwrap();
        let mut req = request(ArchitectureKind::Mlp, dir.path().join("mlp.json").display().to_string());
        req.hidden_size = Some(256);
        req.num_layers  = Some(3);

        match InitConfigUseCase::new(req).execute().unwrap() {
            ArchitectureConfig::Mlp(c) => {
                assert_eq!(c.hidden_size, 256);
                assert_eq!(c.num_layers, 3);
            }
            other => panic!("expected an MLP config, got {:?}", other.kind()),
        }
    }

    #[test]
    fn test_invalid_override_is_not_written() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("mlp.json");
        let mut req = request(ArchitectureKind::Mlp, path.display().to_string());
        req.num_layers = Some(1);

        assert!(InitConfigUseCase::new(req).execute().is_err());
        assert!(!path.exists());
    }
}
