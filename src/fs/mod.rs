//! Filesystem utilities for campgen.
//!
//! Reports and session state are written atomically so a failed save never
//! leaves a half-written file behind.

pub mod atomic;

pub use atomic::{atomic_write, atomic_write_file};
