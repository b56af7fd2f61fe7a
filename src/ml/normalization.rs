// ============================================================
// Layer 5 — Global Normalization
// ============================================================
// Normalises every feature with statistics gathered over ALL
// frames the layer has seen during training, not just the
// current batch.
//
// Unlike BatchNorm there is no momentum: the running mean is
// the exact mean of every training frame so far, and the
// running squared difference is accumulated with Welford's
// update so the variance stays numerically stable:
//
//   n'    = n + frames
//   mean' = mean + (mean_batch − mean) · frames / n'
//   sq'   = sq + Σ (x − mean)(x − mean')
//   var   = sq' / n'
//
// The frame count is an integer kept on the host. It is stored as
// two f32 words (high, low) in base 2^24 so every count below 2^48
// is exact in the record.
//
// Training mode is detected the same way Burn's own BatchNorm
// does it: statistics only move when the backend tracks
// gradients (B::ad_enabled()).
//
// Reference: Welford (1962), Ioffe & Szegedy (2015) BatchNorm

use burn::{
    module::RunningState,
    prelude::*,
};

/// Largest power of two below which every integer is exact in f32.
const COUNT_BASE: u64 = 1 << 24;

#[derive(Config, Debug)]
pub struct GlobalNormalizationConfig {
    /// Size of the last (feature) dimension
    pub feature_dim: usize,
    /// Divide by the running standard deviation as well as centring
    #[config(default = false)]
    pub scale: bool,
    /// Added to the variance before the square root
    #[config(default = 1e-5)]
    pub epsilon: f64,
}

impl GlobalNormalizationConfig {
    pub fn init<B: Backend>(&self, device: &B::Device) -> GlobalNormalization<B> {
        GlobalNormalization {
            running_mean:    RunningState::new(Tensor::zeros([self.feature_dim], device)),
            running_sq_diff: RunningState::new(Tensor::zeros([self.feature_dim], device)),
            frames_seen:     RunningState::new(Tensor::zeros([2], device)),
            scale:           self.scale,
            epsilon:         self.epsilon,
        }
    }
}

#[derive(Module, Debug)]
pub struct GlobalNormalization<B: Backend> {
    pub running_mean:    RunningState<Tensor<B, 1>>,
    pub running_sq_diff: RunningState<Tensor<B, 1>>,
    /// Frame count as `[high, low]` words, see [`COUNT_BASE`]
    pub frames_seen:     RunningState<Tensor<B, 1>>,
    pub scale:           bool,
    pub epsilon:         f64,
}

impl<B: Backend> GlobalNormalization<B> {
    /// input: [batch, time, features] → same shape
    pub fn forward(&self, input: Tensor<B, 3>) -> Tensor<B, 3> {
        let [_, _, features] = input.dims();

        let (mean, sq_diff) = if B::ad_enabled() {
            self.update_statistics(&input)
        } else {
            (self.running_mean.value(), self.running_sq_diff.value())
        };

        let centred = input - mean.reshape([1, 1, features]);
        if !self.scale {
            return centred;
        }

        // A fresh layer has seen no frames; clamp so the variance is 0, not NaN.
        let seen     = self.frames_seen().max(1);
        let variance = sq_diff.div_scalar(seen as f64);
        let std = variance.add_scalar(self.epsilon).sqrt();
        centred / std.reshape([1, 1, features])
    }

    /// Total number of frames folded into the statistics so far.
    pub fn frames_seen(&self) -> u64 {
        let words = self
            .frames_seen
            .value_sync()
            .into_data()
            .convert::<f32>()
            .to_vec::<f32>()
            .unwrap_or_default();

        match words.as_slice() {
            [high, low] => (*high as u64) * COUNT_BASE + *low as u64,
            _ => 0,
        }
    }

    pub fn running_mean(&self) -> Tensor<B, 1> {
        self.running_mean.value_sync()
    }

    fn update_statistics(&self, input: &Tensor<B, 3>) -> (Tensor<B, 1>, Tensor<B, 1>) {
        let [batch, time, features] = input.dims();
        let frames = (batch * time) as u64;

        let mean    = self.running_mean.value_sync();
        let sq_diff = self.running_sq_diff.value_sync();
        if frames == 0 {
            return (mean, sq_diff);
        }

        let device = input.device();
        let input  = input.clone().detach();
        let total  = self.frames_seen().saturating_add(frames);
        let weight = frames as f64 / total as f64;

        let batch_mean = input.clone().sum_dim(0).sum_dim(1).reshape([features]).div_scalar(frames as f64);
        let new_mean   = mean.clone() + (batch_mean - mean.clone()).mul_scalar(weight);

        let new_sq_diff = if self.scale {
            let before = input.clone() - mean.reshape([1, 1, features]);
            let after  = input - new_mean.clone().reshape([1, 1, features]);
            sq_diff + (before * after).sum_dim(0).sum_dim(1).reshape([features])
        } else {
            sq_diff
        };

        self.running_mean.update(new_mean.clone().detach());
        self.running_sq_diff.update(new_sq_diff.clone().detach());
        self.frames_seen.update(count_words(total, &device));

        (new_mean, new_sq_diff)
    }
}

fn count_words<B: Backend>(count: u64, device: &B::Device) -> Tensor<B, 1> {
    let high = (count / COUNT_BASE) as f32;
    let low  = (count % COUNT_BASE) as f32;
    Tensor::from_floats([high, low], device)
}
