//! Configuration and frame export shared by the `rasw` binary.

pub mod config;
pub mod export;
