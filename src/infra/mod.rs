// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Cross-cutting concerns that don't belong to any single
// business layer:
//
//   config_store.rs — Saving and loading model configs
//                     as JSON so a model can be rebuilt
//                     exactly from a file.
//
// Reference: Rust Book §7 (Modules)
//            Rust Book §9 (Error Handling with anyhow)

/// Model config persistence
pub mod config_store;
