// ============================================================
// Layer 5 — WaveNet Residual Block and Stack
// ============================================================
// One residual block:
//
//          x ──────────────────────────────┐
//          │                               │
//   dilated conv (res → 2·res)             │
//          │                               │
//   tanh(first half) · σ(second half)      │
//          │                               │
//          ├── 1×1 conv (res → res) ───── (+) → next block
//          │
//          └── 1×1 conv (res → skip) ────────→ skip output
//
// The stack runs one block per dilation in the schedule and
// returns ReLU(Σ skip outputs).
//
// Reference: van den Oord et al. (2016) WaveNet §2.3–2.4

use burn::{
    prelude::*,
    tensor::activation::{relu, sigmoid, tanh},
};

use crate::domain::dilation::PaddingMode;
use crate::ml::conv::{DilatedConv1d, DilatedConv1dConfig};

// ─── ResidualBlock ────────────────────────────────────────────────────────────
#[derive(Config, Debug)]
pub struct ResidualBlockConfig {
    pub res_channels:  usize,
    pub skip_channels: usize,
    pub dilation:      usize,
    #[config(default = 2)]
    pub kernel_size:   usize,
    #[config(default = "PaddingMode::Causal")]
    pub padding:       PaddingMode,
}

impl ResidualBlockConfig {
    pub fn init<B: Backend>(&self, device: &B::Device) -> ResidualBlock<B> {
        let dilated = DilatedConv1dConfig::new(self.res_channels, 2 * self.res_channels, self.kernel_size)
            .with_dilation(self.dilation)
            .with_padding(self.padding)
            .init(device);
        let residual = DilatedConv1dConfig::new(self.res_channels, self.res_channels, 1)
            .with_padding(self.padding)
            .init(device);
        let skip = DilatedConv1dConfig::new(self.res_channels, self.skip_channels, 1)
            .with_padding(self.padding)
            .init(device);

        ResidualBlock { dilated, residual, skip, res_channels: self.res_channels }
    }
}

#[derive(Module, Debug)]
pub struct ResidualBlock<B: Backend> {
    pub dilated:      DilatedConv1d<B>,
    pub residual:     DilatedConv1d<B>,
    pub skip:         DilatedConv1d<B>,
    pub res_channels: usize,
}

impl<B: Backend> ResidualBlock<B> {
    /// x: [batch, res, time] → (next block input [batch, res, time],
    ///                          skip [batch, skip, time])
    pub fn forward(&self, x: Tensor<B, 3>) -> (Tensor<B, 3>, Tensor<B, 3>) {
        let [batch, _, time] = x.dims();
        let c = self.res_channels;

        let h      = self.dilated.forward(x.clone());
        let filter = h.clone().slice([0..batch, 0..c, 0..time]);
        let gate   = h.slice([0..batch, c..2 * c, 0..time]);
        let gated  = tanh(filter) * sigmoid(gate);

        let skip = self.skip.forward(gated.clone());
        let out  = self.residual.forward(gated) + x;
        (out, skip)
    }
}

// ─── ResidualStack ────────────────────────────────────────────────────────────
#[derive(Config, Debug)]
pub struct ResidualStackConfig {
    pub res_channels:  usize,
    pub skip_channels: usize,
    /// One block per entry, in order
    pub dilations:     Vec<usize>,
    #[config(default = 2)]
    pub kernel_size:   usize,
    #[config(default = "PaddingMode::Causal")]
    pub padding:       PaddingMode,
}

impl ResidualStackConfig {
    pub fn init<B: Backend>(&self, device: &B::Device) -> ResidualStack<B> {
        let blocks = self
            .dilations
            .iter()
            .map(|&dilation| {
                ResidualBlockConfig::new(self.res_channels, self.skip_channels, dilation)
                    .with_kernel_size(self.kernel_size)
                    .with_padding(self.padding)
                    .init(device)
            })
            .collect();
        ResidualStack { blocks, skip_channels: self.skip_channels }
    }
}

#[derive(Module, Debug)]
pub struct ResidualStack<B: Backend> {
    pub blocks:        Vec<ResidualBlock<B>>,
    pub skip_channels: usize,
}

impl<B: Backend> ResidualStack<B> {
    /// x: [batch, res, time] → [batch, skip, time]
    pub fn forward(&self, x: Tensor<B, 3>) -> Tensor<B, 3> {
        let [batch, _, time] = x.dims();
        let mut skips = Tensor::zeros([batch, self.skip_channels, time], &x.device());

        let mut x = x;
        for block in &self.blocks {
            let (next, skip) = block.forward(x);
            skips = skips + skip;
            x = next;
        }
        relu(skips)
    }
}
