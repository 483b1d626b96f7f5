// Filtertrim Core Library
//
// Trims adblock-style filter lists to a maximum number of rules while keeping
// the leading comment header. `ListTrimmer` is the main entry point.

pub mod classifier;
pub mod config;
pub mod document;
pub mod error;
pub mod processor;
pub mod storage;
pub mod types;

// Re-export main types and functions for easy use
pub use classifier::LineClassifier;
pub use config::TrimConfig;
pub use document::{split_lines, FilterList, TrimmedList};
pub use error::{Result, TrimError};
pub use processor::ListTrimmer;
pub use storage::{FileStorage, ListStorage, MemoryStorage};
pub use types::*;
