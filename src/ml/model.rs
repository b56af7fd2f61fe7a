// ============================================================
// Layer 5 — Architecture dispatch
// ============================================================
// ArchitectureConfig is what gets written to disk: one JSON
// object tagged with the architecture name, e.g.
//
//   {
//     "architecture": "wavenet",
//     "in_channels": 40,
//     "output_classes": 4,
//     "hidden_size": 64,
//     ...
//   }
//
// init() turns it into an EmotionIdModel, an enum over the
// four Burn modules, so callers can hold "some classifier"
// without knowing which one was configured.

use anyhow::Result;
use burn::prelude::*;
use serde::{Deserialize, Serialize};

use crate::domain::architecture::ArchitectureKind;
use crate::ml::{
    classifier::FrameClassifier,
    linear::{LinearClassifier, LinearClassifierConfig},
    mlp::{MlpClassifier, MlpClassifierConfig},
    recurrent::{RecurrentClassifier, RecurrentClassifierConfig},
    wavenet::{WaveNetClassifier, WaveNetClassifierConfig},
};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "architecture", rename_all = "snake_case")]
pub enum ArchitectureConfig {
    Mlp(MlpClassifierConfig),
    Linear(LinearClassifierConfig),
    Recurrent(RecurrentClassifierConfig),
    #[serde(rename = "wavenet")]
    WaveNet(WaveNetClassifierConfig),
}

impl ArchitectureConfig {
    /// Default hyper-parameters for `kind`, sized for the given
    /// feature and class counts.
    pub fn with_defaults(kind: ArchitectureKind, input_dim: usize, classes: usize) -> Self {
        match kind {
            ArchitectureKind::Mlp       => Self::Mlp(MlpClassifierConfig::new(input_dim, classes)),
            ArchitectureKind::Linear    => Self::Linear(LinearClassifierConfig::new(input_dim, classes)),
            ArchitectureKind::Recurrent => Self::Recurrent(RecurrentClassifierConfig::new(input_dim, classes)),
            ArchitectureKind::WaveNet   => Self::WaveNet(WaveNetClassifierConfig::new(input_dim, classes)),
        }
    }

    pub fn kind(&self) -> ArchitectureKind {
        match self {
            Self::Mlp(_)       => ArchitectureKind::Mlp,
            Self::Linear(_)    => ArchitectureKind::Linear,
            Self::Recurrent(_) => ArchitectureKind::Recurrent,
            Self::WaveNet(_)   => ArchitectureKind::WaveNet,
        }
    }

    /// Size of the per-frame feature vector the model expects.
    pub fn input_dim(&self) -> usize {
        match self {
            Self::Mlp(c)       => c.input_dim,
            Self::Linear(c)    => c.input_dim,
            Self::Recurrent(c) => c.feature_dim,
            Self::WaveNet(c)   => c.in_channels,
        }
    }

    pub fn output_classes(&self) -> usize {
        match self {
            Self::Mlp(c)       => c.output_classes,
            Self::Linear(c)    => c.output_classes,
            Self::Recurrent(c) => c.num_emotions,
            Self::WaveNet(c)   => c.output_classes,
        }
    }

    pub fn validate(&self) -> Result<()> {
        match self {
            Self::Mlp(c)       => c.validate(),
            Self::Linear(c)    => c.validate(),
            Self::Recurrent(c) => c.validate(),
            Self::WaveNet(c)   => c.validate(),
        }
    }

    pub fn init<B: Backend>(&self, device: &B::Device) -> EmotionIdModel<B> {
        match self {
            Self::Mlp(c)       => EmotionIdModel::Mlp(c.init(device)),
            Self::Linear(c)    => EmotionIdModel::Linear(c.init(device)),
            Self::Recurrent(c) => EmotionIdModel::Recurrent(c.init(device)),
            Self::WaveNet(c)   => EmotionIdModel::WaveNet(c.init(device)),
        }
    }
}

/// One of the four classifiers, built from an [`ArchitectureConfig`].
#[derive(Debug)]
pub enum EmotionIdModel<B: Backend> {
    Mlp(MlpClassifier<B>),
    Linear(LinearClassifier<B>),
    Recurrent(RecurrentClassifier<B>),
    WaveNet(WaveNetClassifier<B>),
}

impl<B: Backend> EmotionIdModel<B> {
    pub fn kind(&self) -> ArchitectureKind {
        match self {
            Self::Mlp(_)       => ArchitectureKind::Mlp,
            Self::Linear(_)    => ArchitectureKind::Linear,
            Self::Recurrent(_) => ArchitectureKind::Recurrent,
            Self::WaveNet(_)   => ArchitectureKind::WaveNet,
        }
    }

    /// frames: [batch, time, features] → [batch, time, classes]
    pub fn forward(&self, frames: Tensor<B, 3>) -> Tensor<B, 3> {
        self.forward_frames(frames)
    }

    pub fn num_params(&self) -> usize {
        match self {
            Self::Mlp(m)       => m.num_params(),
            Self::Linear(m)    => m.num_params(),
            Self::Recurrent(m) => m.num_params(),
            Self::WaveNet(m)   => m.num_params(),
        }
    }

    /// Only the convolutional model has a bounded receptive field.
    pub fn receptive_field(&self) -> Option<usize> {
        match self {
            Self::WaveNet(m) => Some(m.receptive_field()),
            _                => None,
        }
    }

    pub fn max_padding(&self) -> Option<usize> {
        match self {
            Self::WaveNet(m) => Some(m.max_padding()),
            _                => None,
        }
    }
}

impl<B: Backend> FrameClassifier<B> for EmotionIdModel<B> {
    fn forward_frames(&self, frames: Tensor<B, 3>) -> Tensor<B, 3> {
        match self {
            Self::Mlp(m)       => m.forward_frames(frames),
            Self::Linear(m)    => m.forward_frames(frames),
            Self::Recurrent(m) => m.forward_frames(frames),
            Self::WaveNet(m)   => m.forward_frames(frames),
        }
    }

    fn output_classes(&self) -> usize {
        match self {
            Self::Mlp(m)       => m.output_classes(),
            Self::Linear(m)    => m.output_classes(),
            Self::Recurrent(m) => m.output_classes(),
            Self::WaveNet(m)   => m.output_classes(),
        }
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::ml::testing::{random_frames, TestBackend};

    /// Small enough to build quickly, one per architecture.
    fn small_configs() -> Vec<ArchitectureConfig> {
        vec![
            ArchitectureConfig::Mlp(MlpClassifierConfig::new(6, 3).with_hidden_size(16).with_num_layers(3)),
            ArchitectureConfig::Linear(LinearClassifierConfig::new(6, 3)),
            ArchitectureConfig::Recurrent(RecurrentClassifierConfig::new(6, 3).with_hidden_size(8)),
            ArchitectureConfig::WaveNet(
                WaveNetClassifierConfig::new(6, 3)
                    .with_hidden_size(8)
                    .with_dilation_depth(3)
                    .with_n_repeat(1),
            ),
        ]
    }

    #[test]
    fn test_every_architecture_scores_every_frame() {
        let device = Default::default();
        for config in small_configs() {
            config.validate().unwrap();
            let model: EmotionIdModel<TestBackend> = config.init(&device);
            assert_eq!(model.kind(), config.kind());

            let output = model.forward(random_frames([2, 9, 6], &device));
            assert_eq!(output.dims(), [2, 9, 3], "{}", config.kind());
            assert_eq!(model.output_classes(), 3);
            assert!(model.num_params() > 0);
        }
    }

    #[test]
    fn test_receptive_field_only_for_wavenet() {
        let device = Default::default();
        for config in small_configs() {
            let model: EmotionIdModel<TestBackend> = config.init(&device);
            match config.kind() {
                // 1 + (1 + 2 + 4)
                ArchitectureKind::WaveNet => {
                    assert_eq!(model.receptive_field(), Some(8));
                    assert_eq!(model.max_padding(), Some(2));
                }
                _ => assert_eq!(model.receptive_field(), None),
            }
        }
    }

    #[test]
    fn test_json_is_tagged_with_architecture() {
        let config = ArchitectureConfig::with_defaults(ArchitectureKind::WaveNet, 40, 4);
        let json   = serde_json::to_value(&config).unwrap();
        assert_eq!(json["architecture"], "wavenet");
        assert_eq!(json["in_channels"], 40);
        assert_eq!(json["dilation_depth"], 6);

        let back: ArchitectureConfig = serde_json::from_value(json).unwrap();
        assert_eq!(back.kind(), ArchitectureKind::WaveNet);
        assert_eq!(back.input_dim(), 40);
    }

    #[test]
    fn test_defaults_cover_every_kind() {
        for kind in ArchitectureKind::ALL {
            let config = ArchitectureConfig::with_defaults(kind, 20, 5);
            assert_eq!(config.kind(), kind);
            assert_eq!(config.input_dim(), 20);
            assert_eq!(config.output_classes(), 5);
            config.validate().unwrap();
        }
    }
}
