// ============================================================
// Layer 5 — WaveNet Classifier
// ============================================================
// GlobalNormalization
//   → [batch, time, features] transposed to [batch, features, time]
//   → 1×1 conv (features → hidden) → ReLU
//   → ResidualStack over the dilation schedule
//   → 1×1 conv (hidden → classes)
//   → transposed back to [batch, time, classes]
//
// With `masked = true` every convolution is causal, so the
// score for frame t depends only on frames ≤ t and the model
// can run on a live stream. `masked = false` centres each
// kernel instead (same padding).

use anyhow::{ensure, Result};
use burn::{
    prelude::*,
    tensor::activation::relu,
};

use crate::domain::dilation::{DilationSchedule, PaddingMode};
use crate::ml::{
    classifier::FrameClassifier,
    conv::{DilatedConv1d, DilatedConv1dConfig},
    normalization::{GlobalNormalization, GlobalNormalizationConfig},
    residual::{ResidualStack, ResidualStackConfig},
};

#[derive(Config, Debug)]
pub struct WaveNetClassifierConfig {
    pub in_channels:    usize,
    pub output_classes: usize,
    #[config(default = 64)]
    pub hidden_size:    usize,
    /// Layers per dilation cycle: dilations kernel_size^0 .. kernel_size^(depth−1)
    #[config(default = 6)]
    pub dilation_depth: usize,
    /// How many times the dilation cycle repeats
    #[config(default = 5)]
    pub n_repeat:       usize,
    #[config(default = 2)]
    pub kernel_size:    usize,
    /// Causal convolutions when true, same padding otherwise
    #[config(default = true)]
    pub masked:         bool,
}

impl WaveNetClassifierConfig {
    pub fn validate(&self) -> Result<()> {
        ensure!(self.in_channels > 0, "WaveNet in_channels must be positive");
        ensure!(self.output_classes > 0, "WaveNet output_classes must be positive");
        ensure!(self.hidden_size > 0, "WaveNet hidden_size must be positive");
        ensure!(self.kernel_size > 0, "WaveNet kernel_size must be positive");
        ensure!(self.dilation_depth > 0, "WaveNet dilation_depth must be positive");
        ensure!(self.n_repeat > 0, "WaveNet n_repeat must be positive");
        ensure!(
            self.kernel_size
                .checked_pow(self.dilation_depth.saturating_sub(1) as u32)
                .is_some(),
            "WaveNet dilation kernel_size^{} overflows", self.dilation_depth - 1
        );
        ensure!(
            self.schedule().checked_receptive_field().is_some(),
            "WaveNet receptive field overflows (kernel_size {}, dilation_depth {}, n_repeat {})",
            self.kernel_size, self.dilation_depth, self.n_repeat
        );
        Ok(())
    }

    pub fn schedule(&self) -> DilationSchedule {
        DilationSchedule::new(self.kernel_size, self.dilation_depth, self.n_repeat)
    }

    pub fn padding_mode(&self) -> PaddingMode {
        if self.masked { PaddingMode::Causal } else { PaddingMode::Same }
    }

    pub fn init<B: Backend>(&self, device: &B::Device) -> WaveNetClassifier<B> {
        let schedule = self.schedule();
        let padding  = self.padding_mode();

        let input = DilatedConv1dConfig::new(self.in_channels, self.hidden_size, 1)
            .with_padding(padding)
            .init(device);
        let stack = ResidualStackConfig::new(self.hidden_size, self.hidden_size, schedule.dilations().to_vec())
            .with_kernel_size(self.kernel_size)
            .with_padding(padding)
            .init(device);
        let output = DilatedConv1dConfig::new(self.hidden_size, self.output_classes, 1)
            .with_padding(padding)
            .init(device);

        WaveNetClassifier {
            normalize:       GlobalNormalizationConfig::new(self.in_channels).init(device),
            input,
            stack,
            output,
            output_classes:  self.output_classes,
            receptive_field: schedule.receptive_field(),
            max_padding:     schedule.max_padding(),
        }
    }
}

#[derive(Module, Debug)]
pub struct WaveNetClassifier<B: Backend> {
    pub normalize:       GlobalNormalization<B>,
    pub input:           DilatedConv1d<B>,
    pub stack:           ResidualStack<B>,
    pub output:          DilatedConv1d<B>,
    pub output_classes:  usize,
    pub receptive_field: usize,
    pub max_padding:     usize,
}

impl<B: Backend> WaveNetClassifier<B> {
    /// frames: [batch, time, in_channels] → [batch, time, output_classes]
    pub fn forward(&self, frames: Tensor<B, 3>) -> Tensor<B, 3> {
        let x = self.normalize.forward(frames).swap_dims(1, 2);
        let x = relu(self.input.forward(x));
        let x = self.stack.forward(x);
        self.output.forward(x).swap_dims(1, 2)
    }

    /// Input frames that influence one output frame.
    pub fn receptive_field(&self) -> usize {
        self.receptive_field
    }

    pub fn max_padding(&self) -> usize {
        self.max_padding
    }
}

impl<B: Backend> FrameClassifier<B> for WaveNetClassifier<B> {
    fn forward_frames(&self, frames: Tensor<B, 3>) -> Tensor<B, 3> {
        self.forward(frames)
    }

    fn output_classes(&self) -> usize {
        self.output_classes
    }
}
