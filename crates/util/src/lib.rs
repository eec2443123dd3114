//! ormtypes-util - Utility functions for ormtypes
//!
//! This crate provides the collection and text helpers the column types are
//! built on: index-driven sorting and lenient fixed-width scanning.

pub mod scan;
pub mod sort;

// Re-exports for convenience
pub use scan::{scan_fixed_ints, ScanField};
pub use sort::{insertion_sort, is_sorted, Sortable};
