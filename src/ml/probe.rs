// ============================================================
// Layer 5 — Model Probe
// ============================================================
// Builds a model from its config and pushes one random batch
// through it. This is the cheapest end-to-end check that a
// config file describes a model that actually runs:
//
//   config → init on device → random [batch, frames, features]
//          → forward → output shape + parameter count
//
// Weights are freshly initialised; the probe never loads or
// saves a checkpoint.

use anyhow::{ensure, Result};
use burn::{prelude::*, tensor::Distribution};
use serde::Serialize;

use crate::domain::architecture::ArchitectureKind;
use crate::ml::model::{ArchitectureConfig, EmotionIdModel};

/// What a probe run found out about a model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProbeReport {
    pub architecture:    ArchitectureKind,
    pub num_params:      usize,
    pub input_shape:     [usize; 3],
    pub output_shape:    [usize; 3],
    pub receptive_field: Option<usize>,
    pub max_padding:     Option<usize>,
}

pub fn probe_model<B: Backend>(
    config:     &ArchitectureConfig,
    batch_size: usize,
    frames:     usize,
    device:     &B::Device,
) -> Result<ProbeReport> {
    config.validate()?;
    ensure!(batch_size > 0, "probe batch size must be positive");
    ensure!(frames > 0, "probe needs at least one frame");

    let model: EmotionIdModel<B> = config.init(device);
    tracing::debug!("Built {} model with {} parameters", model.kind(), model.num_params());

    let input_shape = [batch_size, frames, config.input_dim()];
    let input  = Tensor::<B, 3>::random(input_shape, Distribution::Normal(0.0, 1.0), device);
    let output = model.forward(input);
    let output_shape = output.dims();

    ensure!(
        output_shape == [batch_size, frames, config.output_classes()],
        "{} model produced {:?}, expected [{}, {}, {}]",
        model.kind(), output_shape, batch_size, frames, config.output_classes()
    );

    Ok(ProbeReport {
        architecture:    model.kind(),
        num_params:      model.num_params(),
        input_shape,
        output_shape,
        receptive_field: model.receptive_field(),
        max_padding:     model.max_padding(),
    })
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::ml::{testing::TestBackend, wavenet::WaveNetClassifierConfig};

    #[test]
    fn test_probe_reports_shapes() {
        let device = Default::default();
        let config = ArchitectureConfig::WaveNet(
            WaveNetClassifierConfig::new(10, 4)
                .with_hidden_size(8)
                .with_dilation_depth(2)
                .with_n_repeat(2),
        );

        let report = probe_model::<TestBackend>(&config, 3, 16, &device).unwrap();
        assert_eq!(report.architecture, ArchitectureKind::WaveNet);
        assert_eq!(report.input_shape, [3, 16, 10]);
        assert_eq!(report.output_shape, [3, 16, 4]);
        // dilations [1, 2, 1, 2] → 1 + 6
        assert_eq!(report.receptive_field, Some(7));
        assert!(report.num_params > 0);
    }

    #[test]
    fn test_probe_rejects_empty_batch() {
        let device = Default::default();
        let config = ArchitectureConfig::with_defaults(ArchitectureKind::Linear, 4, 2);
        assert!(probe_model::<TestBackend>(&config, 0, 5, &device).is_err());
        assert!(probe_model::<TestBackend>(&config, 1, 0, &device).is_err());
    }

    #[test]
    fn test_probe_rejects_invalid_config() {
        let device = Default::default();
        let config = ArchitectureConfig::with_defaults(ArchitectureKind::Mlp, 0, 2);
        let err    = probe_model::<TestBackend>(&config, 1, 5, &device).unwrap_err();
        assert!(err.to_string().contains("input_dim"));
    }
}
