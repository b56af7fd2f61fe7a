// ============================================================
// Layer 3 — Dilation Schedule
// ============================================================
// The arithmetic behind the WaveNet-style residual stack.
//
// A dilated convolution with kernel size k and dilation d
// looks at k inputs spaced d steps apart, so one layer widens
// the window of inputs an output can see by d·(k−1) steps.
//
// The schedule doubles (for k = 2) the dilation at every
// layer, then starts over:
//
//   depth = 4, repeat = 2, k = 2
//   dilations = [1, 2, 4, 8, 1, 2, 4, 8]
//
// Receptive field = 1 + Σ d·(k−1)
//   = 1 + 2·(1 + 2 + 4 + 8) = 31 frames
//
// Reference: van den Oord et al. (2016) WaveNet

use serde::{Deserialize, Serialize};

/// How a convolution pads the time axis so that the output keeps
/// the input's length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaddingMode {
    /// All padding on the left: output frame t only sees frames <= t
    Causal,
    /// Padding split across both sides, the extra step on the left
    Same,
}

/// The ordered list of dilations for every residual layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DilationSchedule {
    kernel_size: usize,
    dilations:   Vec<usize>,
}

impl DilationSchedule {
    /// `kernel_size^i` for `i in 0..dilation_depth`, repeated `n_repeat` times.
    pub fn new(kernel_size: usize, dilation_depth: usize, n_repeat: usize) -> Self {
        let cycle: Vec<usize> = (0..dilation_depth)
            .map(|i| kernel_size.pow(i as u32))
            .collect();
        let dilations = cycle
            .iter()
            .copied()
            .cycle()
            .take(cycle.len() * n_repeat)
            .collect();
        Self { kernel_size, dilations }
    }

    pub fn kernel_size(&self) -> usize {
        self.kernel_size
    }

    pub fn dilations(&self) -> &[usize] {
        &self.dilations
    }

    pub fn len(&self) -> usize {
        self.dilations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dilations.is_empty()
    }

    /// Number of input frames that influence one output frame.
    /// Saturates at `usize::MAX`.
    pub fn receptive_field(&self) -> usize {
        self.checked_receptive_field().unwrap_or(usize::MAX)
    }

    /// [`receptive_field`](Self::receptive_field), or `None` if it overflows `usize`.
    pub fn checked_receptive_field(&self) -> Option<usize> {
        let taps = self.kernel_size.saturating_sub(1);
        self.dilations
            .iter()
            .try_fold(1usize, |field, &d| field.checked_add(d.checked_mul(taps)?))
    }

    /// Padding needed on each side by the widest (last) layer when the
    /// padding is split symmetrically.
    pub fn max_padding(&self) -> usize {
        self.dilations
            .last()
            .map(|&d| (d * self.kernel_size.saturating_sub(1)).div_ceil(2))
            .unwrap_or(0)
    }

    /// (left, right) zero padding for one layer with this kernel size.
    pub fn padding(&self, dilation: usize, mode: PaddingMode) -> (usize, usize) {
        conv_padding(self.kernel_size, dilation, mode)
    }
}

/// (left, right) zero padding that keeps a dilated convolution's output
/// as long as its input.
pub fn conv_padding(kernel_size: usize, dilation: usize, mode: PaddingMode) -> (usize, usize) {
    let total = dilation * kernel_size.saturating_sub(1);
    match mode {
        PaddingMode::Causal => (total, 0),
        PaddingMode::Same   => (total.div_ceil(2), total / 2),
    }
}
