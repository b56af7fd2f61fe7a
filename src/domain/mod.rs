// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Pure Rust types shared by every other layer.
//
// Rules for this layer:
//   - NO Burn framework types allowed here
//   - NO file I/O
//   - Only plain structs, enums and arithmetic
//
// Keeping the dilation arithmetic here means the receptive
// field and padding rules are tested without building a
// single tensor.

/// Names of the four classifier families
pub mod architecture;

/// Dilation schedules, receptive field and padding arithmetic
pub mod dilation;
