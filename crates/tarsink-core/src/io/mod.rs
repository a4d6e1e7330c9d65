//! I/O utilities for archive streams.
//!
//! This module provides the reader wrappers used to sniff and decode
//! incoming archive streams.

pub mod peek;

// Re-export main types for convenience
pub use peek::PeekReader;
