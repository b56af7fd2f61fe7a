//! Frame-level emotion classifiers built on Burn.
//!
//! Four architectures share one contract: per-frame features
//! `[batch, time, features]` in, per-frame class scores
//! `[batch, time, classes]` out.
//!
//! - [`ml::mlp::MlpClassifier`]: stacked Linear/ReLU layers
//! - [`ml::linear::LinearClassifier`]: a single projection
//! - [`ml::recurrent::RecurrentClassifier`]: stacked GRUs, with
//!   [`ml::RecurrentSession`] carrying hidden state across calls
//! - [`ml::wavenet::WaveNetClassifier`]: gated residual stack of
//!   dilated (optionally causal) convolutions
//!
//! Every model starts with [`ml::normalization::GlobalNormalization`].

#![recursion_limit = "256"]

pub mod application;
pub mod cli;
pub mod domain;
pub mod infra;
pub mod ml;
