// ============================================================
// Layer 5 — Linear Classifier
// ============================================================
// The baseline: GlobalNormalization followed by a single
// Linear projection from features to class scores.

use anyhow::{ensure, Result};
use burn::{
    nn::{Linear, LinearConfig},
    prelude::*,
};

use crate::ml::{
    classifier::FrameClassifier,
    normalization::{GlobalNormalization, GlobalNormalizationConfig},
};

#[derive(Config, Debug)]
pub struct LinearClassifierConfig {
    pub input_dim:      usize,
    pub output_classes: usize,
}

impl LinearClassifierConfig {
    pub fn validate(&self) -> Result<()> {
        ensure!(self.input_dim > 0, "linear input_dim must be positive");
        ensure!(self.output_classes > 0, "linear output_classes must be positive");
        Ok(())
    }

    pub fn init<B: Backend>(&self, device: &B::Device) -> LinearClassifier<B> {
        LinearClassifier {
            normalize:      GlobalNormalizationConfig::new(self.input_dim).init(device),
            linear:         LinearConfig::new(self.input_dim, self.output_classes).init(device),
            output_classes: self.output_classes,
        }
    }
}

#[derive(Module, Debug)]
pub struct LinearClassifier<B: Backend> {
    pub normalize:      GlobalNormalization<B>,
    pub linear:         Linear<B>,
    pub output_classes: usize,
}

impl<B: Backend> LinearClassifier<B> {
    pub fn forward(&self, frames: Tensor<B, 3>) -> Tensor<B, 3> {
        self.linear.forward(self.normalize.forward(frames))
    }
}

impl<B: Backend> FrameClassifier<B> for LinearClassifier<B> {
    fn forward_frames(&self, frames: Tensor<B, 3>) -> Tensor<B, 3> {
        self.forward(frames)
    }

    fn output_classes(&self) -> usize {
        self.output_classes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ml::testing::{random_frames, TestBackend};

    #[test]
    fn test_output_shape() {
        let device = Default::default();
        let model  = LinearClassifierConfig::new(13, 5).init::<TestBackend>(&device);

        let output = model.forward(random_frames([2, 11, 13], &device));
        assert_eq!(output.dims(), [2, 11, 5]);
        assert_eq!(model.linear.num_params(), 13 * 5 + 5);
    }

    #[test]
    fn test_frames_are_scored_independently() {
        let device = Default::default();
        let model  = LinearClassifierConfig::new(4, 3).init::<TestBackend>(&device);
        let frames = random_frames::<TestBackend>([1, 6, 4], &device);

        let whole  = model.forward(frames.clone());
        let single = model.forward(frames.slice([0..1, 2..3, 0..4]));
        let picked = whole.slice([0..1, 2..3, 0..3]);

        let diff: f32 = (picked - single).abs().max().into_scalar();
        assert!(diff < 1e-6);
    }

    #[test]
    fn test_zero_classes_is_rejected() {
        assert!(LinearClassifierConfig::new(4, 0).validate().is_err());
    }
}
