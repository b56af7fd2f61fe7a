// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// This layer orchestrates the other layers to accomplish one
// goal each (writing a config, describing a model).
//
// Rules for this layer:
//   - No model or tensor code here (that's Layer 5)
//   - No printing here (that's Layer 1)
//   - Only workflow coordination
//
// Reference: Clean Architecture pattern

// Writing a starting config for an architecture
pub mod init_config_use_case;

// Loading a config and probing the model it builds
pub mod describe_use_case;
