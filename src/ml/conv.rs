// ============================================================
// Layer 5 — Dilated Conv1d with explicit padding
// ============================================================
// Burn's Conv1d pads both sides equally, which cannot express
// a causal convolution (all padding on the left) or "same"
// padding for an even kernel. The wrapped Conv1d therefore
// runs unpadded and the time axis is zero-padded by hand:
//
//   [batch, channels, left | time | right] → Conv1d (valid)
//   → [batch, channels_out, time]
//
// The (left, right) amounts come from domain::dilation.

use burn::{
    nn::conv::{Conv1d, Conv1dConfig},
    prelude::*,
};

use crate::domain::dilation::{conv_padding, PaddingMode};

#[derive(Config, Debug)]
pub struct DilatedConv1dConfig {
    pub channels_in:  usize,
    pub channels_out: usize,
    pub kernel_size:  usize,
    #[config(default = 1)]
    pub dilation:     usize,
    #[config(default = "PaddingMode::Causal")]
    pub padding:      PaddingMode,
}

impl DilatedConv1dConfig {
    pub fn init<B: Backend>(&self, device: &B::Device) -> DilatedConv1d<B> {
        let (left_pad, right_pad) = conv_padding(self.kernel_size, self.dilation, self.padding);
        let conv = Conv1dConfig::new(self.channels_in, self.channels_out, self.kernel_size)
            .with_dilation(self.dilation)
            .init(device);
        DilatedConv1d { conv, left_pad, right_pad }
    }
}

#[derive(Module, Debug)]
pub struct DilatedConv1d<B: Backend> {
    pub conv:      Conv1d<B>,
    pub left_pad:  usize,
    pub right_pad: usize,
}

impl<B: Backend> DilatedConv1d<B> {
    /// input: [batch, channels_in, time] → [batch, channels_out, time]
    pub fn forward(&self, input: Tensor<B, 3>) -> Tensor<B, 3> {
        self.conv.forward(pad_time(input, self.left_pad, self.right_pad))
    }
}

/// Zero-pad the last (time) axis.
fn pad_time<B: Backend>(input: Tensor<B, 3>, left: usize, right: usize) -> Tensor<B, 3> {
    if left == 0 && right == 0 {
        return input;
    }
    let [batch, channels, _] = input.dims();
    let device = input.device();

    let mut parts = Vec::with_capacity(3);
    if left > 0 {
        parts.push(Tensor::zeros([batch, channels, left], &device));
    }
    parts.push(input);
    if right > 0 {
        parts.push(Tensor::zeros([batch, channels, right], &device));
    }
    Tensor::cat(parts, 2)
}
