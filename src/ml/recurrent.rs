// ============================================================
// Layer 5 — Recurrent (GRU) Classifier
// ============================================================
// GlobalNormalization → num_layers stacked GRUs → Linear
//
// Burn's Gru is a single batch-first layer that returns every
// hidden state, so the stack is built by hand:
//   - layer i reads state[i] and emits [batch, time, hidden]
//   - its last time step becomes the new state[i]
//   - dropout sits between layers, never after the last one
//
// Hidden state layout: [num_layers, batch, hidden_size]
//
// Two ways to drive the model:
//   RecurrentClassifier::forward(x, state) — pure, the caller
//     owns the state and gets the updated one back
//   RecurrentSession::forward(x) — keeps the state between
//     calls and resets it when the batch size changes, which
//     is how streaming windows of one utterance are scored
//
// Reference: Cho et al. (2014) GRU

use anyhow::{ensure, Result};
use burn::{
    nn::{
        gru::{Gru, GruConfig},
        Dropout, DropoutConfig,
        Linear, LinearConfig,
    },
    prelude::*,
};

use crate::ml::{
    classifier::FrameClassifier,
    normalization::{GlobalNormalization, GlobalNormalizationConfig},
};

#[derive(Config, Debug)]
pub struct RecurrentClassifierConfig {
    pub feature_dim:  usize,
    pub num_emotions: usize,
    #[config(default = 128)]
    pub hidden_size:  usize,
    #[config(default = 2)]
    pub num_layers:   usize,
    /// Dropout between stacked GRU layers (training only)
    #[config(default = 0.1)]
    pub dropout:      f64,
}

impl RecurrentClassifierConfig {
    pub fn validate(&self) -> Result<()> {
        ensure!(self.feature_dim > 0, "recurrent feature_dim must be positive");
        ensure!(self.num_emotions > 0, "recurrent num_emotions must be positive");
        ensure!(self.hidden_size > 0, "recurrent hidden_size must be positive");
        ensure!(self.num_layers > 0, "recurrent model needs at least one GRU layer");
        ensure!(
            (0.0..1.0).contains(&self.dropout),
            "dropout must be in [0, 1) (got {})", self.dropout
        );
        Ok(())
    }

    /// # Panics
    /// If `num_layers` is 0.
    pub fn init<B: Backend>(&self, device: &B::Device) -> RecurrentClassifier<B> {
        assert!(self.num_layers > 0, "recurrent model needs at least one GRU layer");

        let layers = (0..self.num_layers)
            .map(|i| {
                let d_input = if i == 0 { self.feature_dim } else { self.hidden_size };
                GruConfig::new(d_input, self.hidden_size, true).init(device)
            })
            .collect();

        RecurrentClassifier {
            normalize:    GlobalNormalizationConfig::new(self.feature_dim).init(device),
            layers,
            dropout:      DropoutConfig::new(self.dropout).init(),
            output:       LinearConfig::new(self.hidden_size, self.num_emotions).init(device),
            hidden_size:  self.hidden_size,
            num_emotions: self.num_emotions,
        }
    }
}

#[derive(Module, Debug)]
pub struct RecurrentClassifier<B: Backend> {
    pub normalize:    GlobalNormalization<B>,
    pub layers:       Vec<Gru<B>>,
    pub dropout:      Dropout,
    pub output:       Linear<B>,
    pub hidden_size:  usize,
    pub num_emotions: usize,
}

impl<B: Backend> RecurrentClassifier<B> {
    pub fn num_layers(&self) -> usize {
        self.layers.len()
    }

    /// All-zero state for `batch_size` sequences.
    pub fn zero_state(&self, batch_size: usize, device: &B::Device) -> Tensor<B, 3> {
        Tensor::zeros([self.num_layers(), batch_size, self.hidden_size], device)
    }

    /// frames: [batch, time, features], state: [num_layers, batch, hidden]
    /// → (scores [batch, time, num_emotions], new state)
    ///
    /// A zero-length window returns an empty score tensor and the
    /// incoming state unchanged.
    pub fn forward(
        &self,
        frames: Tensor<B, 3>,
        state:  Option<Tensor<B, 3>>,
    ) -> (Tensor<B, 3>, Tensor<B, 3>) {
        let x = self.normalize.forward(frames);
        let [batch, window, _] = x.dims();
        let device = x.device();
        let state  = state.unwrap_or_else(|| self.zero_state(batch, &device));

        if window == 0 {
            return (Tensor::zeros([batch, 0, self.num_emotions], &device), state);
        }

        let hidden = self.hidden_size;
        let last   = self.layers.len() - 1;
        let mut x  = x;
        let mut final_states = Vec::with_capacity(self.layers.len());

        for (i, gru) in self.layers.iter().enumerate() {
            let layer_state = state
                .clone()
                .slice([i..i + 1, 0..batch, 0..hidden])
                .reshape([batch, hidden]);
            let outputs = gru.forward(x, Some(layer_state));

            final_states.push(
                outputs
                    .clone()
                    .slice([0..batch, window - 1..window, 0..hidden])
                    .reshape([batch, hidden]),
            );
            x = if i < last { self.dropout.forward(outputs) } else { outputs };
        }

        (self.output.forward(x), Tensor::stack(final_states, 0))
    }
}

impl<B: Backend> FrameClassifier<B> for RecurrentClassifier<B> {
    fn forward_frames(&self, frames: Tensor<B, 3>) -> Tensor<B, 3> {
        self.forward(frames, None).0
    }

    fn output_classes(&self) -> usize {
        self.num_emotions
    }
}

// ─── RecurrentSession ─────────────────────────────────────────────────────────
/// A recurrent model plus the hidden state carried between calls.
///
/// The carried state is detached before every call, so gradients
/// never flow back into earlier windows.
#[derive(Debug)]
pub struct RecurrentSession<B: Backend> {
    model:        RecurrentClassifier<B>,
    hidden_state: Tensor<B, 3>,
}

impl<B: Backend> RecurrentSession<B> {
    /// Starts with a zero state for a single sequence.
    pub fn new(model: RecurrentClassifier<B>, device: &B::Device) -> Self {
        let hidden_state = model.zero_state(1, device);
        Self { model, hidden_state }
    }

    pub fn reset_state(&mut self, batch_size: usize) {
        let device = self.hidden_state.device();
        self.hidden_state = self.model.zero_state(batch_size, &device);
    }

    /// Batch size the carried state was built for.
    pub fn batch_size(&self) -> usize {
        self.hidden_state.dims()[1]
    }

    pub fn hidden_state(&self) -> &Tensor<B, 3> {
        &self.hidden_state
    }

    pub fn model(&self) -> &RecurrentClassifier<B> {
        &self.model
    }

    pub fn into_model(self) -> RecurrentClassifier<B> {
        self.model
    }

    /// Score the next window, continuing from the carried state.
    pub fn forward(&mut self, frames: Tensor<B, 3>) -> Tensor<B, 3> {
        let [batch_size, _, _] = frames.dims();
        if batch_size != self.batch_size() {
            tracing::debug!(
                "Batch size changed {} → {}, resetting hidden state",
                self.batch_size(), batch_size
            );
            self.reset_state(batch_size);
        }

        let (scores, state) = self.model.forward(frames, Some(self.hidden_state.clone().detach()));
        self.hidden_state = state;
        scores
    }
}
