// ============================================================
// Layer 5 — ML / Model Layer (Burn)
// ============================================================
// This layer contains ALL Burn framework specific code.
// No other layer imports from burn directly — only this one.
//
// What's in this layer:
//
//   normalization.rs — GlobalNormalization, shared by every
//                      model as its first step
//   mlp.rs           — normalisation + stacked Linear/ReLU
//   linear.rs        — normalisation + one Linear
//   recurrent.rs     — stacked GRUs, plus RecurrentSession
//                      which carries hidden state across calls
//   conv.rs          — Conv1d with causal / same padding
//   residual.rs      — gated residual blocks and the stack
//   wavenet.rs       — the dilated-convolution classifier
//   model.rs         — ArchitectureConfig / EmotionIdModel
//                      dispatch over the four classifiers
//   probe.rs         — one random forward pass per config
//
// All models map [batch, time, features] → [batch, time, classes].
//
// Reference: Burn Book §3 (Building Blocks)

pub mod backend;
pub mod classifier;
pub mod conv;
pub mod linear;
pub mod mlp;
pub mod model;
pub mod normalization;
pub mod probe;
pub mod recurrent;
pub mod residual;
pub mod wavenet;

#[cfg(test)]
pub(crate) mod testing;

pub use classifier::FrameClassifier;
pub use model::{ArchitectureConfig, EmotionIdModel};
pub use recurrent::RecurrentSession;
