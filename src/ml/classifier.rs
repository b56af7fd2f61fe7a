// ============================================================
// Layer 5 — FrameClassifier trait
// ============================================================
// Every architecture maps per-frame features to per-frame
// class scores:
//
//   [batch, time, features] → [batch, time, classes]
//
// Programming against this trait lets the probe and the tests
// treat all four models the same way.

use burn::prelude::*;

pub trait FrameClassifier<B: Backend> {
    /// Score every frame. Recurrent models start from a zero state.
    fn forward_frames(&self, frames: Tensor<B, 3>) -> Tensor<B, 3>;

    /// Width of the last output dimension.
    fn output_classes(&self) -> usize;
}
