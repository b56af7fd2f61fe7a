// ============================================================
// Layer 5 — MLP Classifier
// ============================================================
// GlobalNormalization → Linear → ReLU
//                     → (num_layers − 2) × [Linear → ReLU]
//                     → Linear to class scores
//
// Burn's Linear works on the last dimension of any rank, so
// the [batch, time, features] input never needs reshaping.

use anyhow::{ensure, Result};
use burn::{
    nn::{Linear, LinearConfig},
    prelude::*,
    tensor::activation::relu,
};

use crate::ml::{
    classifier::FrameClassifier,
    normalization::{GlobalNormalization, GlobalNormalizationConfig},
};

#[derive(Config, Debug)]
pub struct MlpClassifierConfig {
    pub input_dim:      usize,
    pub output_classes: usize,
    /// Number of Linear layers, including the output layer
    #[config(default = 2)]
    pub num_layers:     usize,
    #[config(default = 1024)]
    pub hidden_size:    usize,
}

impl MlpClassifierConfig {
    pub fn validate(&self) -> Result<()> {
        ensure!(self.input_dim > 0, "MLP input_dim must be positive");
        ensure!(self.output_classes > 0, "MLP output_classes must be positive");
        ensure!(self.hidden_size > 0, "MLP hidden_size must be positive");
        ensure!(
            self.num_layers > 1,
            "MLP needs at least 2 layers (got {})", self.num_layers
        );
        Ok(())
    }

    /// # Panics
    /// If `num_layers < 2`; call [`Self::validate`] first for a recoverable error.
    pub fn init<B: Backend>(&self, device: &B::Device) -> MlpClassifier<B> {
        assert!(self.num_layers > 1, "MLP needs at least 2 layers");

        let mut hidden = Vec::with_capacity(self.num_layers - 1);
        hidden.push(LinearConfig::new(self.input_dim, self.hidden_size).init(device));
        hidden.extend(
            (0..self.num_layers - 2)
                .map(|_| LinearConfig::new(self.hidden_size, self.hidden_size).init(device)),
        );

        MlpClassifier {
            normalize:      GlobalNormalizationConfig::new(self.input_dim).init(device),
            hidden,
            output:         LinearConfig::new(self.hidden_size, self.output_classes).init(device),
            output_classes: self.output_classes,
        }
    }
}

#[derive(Module, Debug)]
pub struct MlpClassifier<B: Backend> {
    pub normalize:      GlobalNormalization<B>,
    pub hidden:         Vec<Linear<B>>,
    pub output:         Linear<B>,
    pub output_classes: usize,
}

impl<B: Backend> MlpClassifier<B> {
    /// frames: [batch, time, input_dim] → [batch, time, output_classes]
    pub fn forward(&self, frames: Tensor<B, 3>) -> Tensor<B, 3> {
        let mut x = self.normalize.forward(frames);
        for layer in &self.hidden {
            x = relu(layer.forward(x));
        }
        self.output.forward(x)
    }
}

impl<B: Backend> FrameClassifier<B> for MlpClassifier<B> {
    fn forward_frames(&self, frames: Tensor<B, 3>) -> Tensor<B, 3> {
        self.forward(frames)
    }

    fn output_classes(&self) -> usize {
        self.output_classes
    }
}
