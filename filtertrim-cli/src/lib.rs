// All trimming logic is in filtertrim-core
// This CLI acts as a thin wrapper around the core library

// CLI-specific modules
pub mod args;
pub mod logging;

// Re-export core types for convenience
pub use filtertrim_core::*;

// Re-export CLI utilities
pub use args::Args;
