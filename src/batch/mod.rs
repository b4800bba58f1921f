//! # Batch Module
//!
//! Finds the images in a directory and converts each one independently.

pub mod engine;
pub mod scanner;

// Re-exports for convenience
pub use engine::{BatchEngine, BatchReport, Converted, Converter, Failure};
pub use scanner::{is_candidate, output_path_for, scan_directory, ConversionJob};
