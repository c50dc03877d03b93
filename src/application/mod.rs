//! Application layer orchestrating payload encoding and symbol rendering.
//!
//! `GiroCodeService` owns the rendering collaborator and applies the output
//! format post-processing on top of the pure domain encoder.

pub mod service;
