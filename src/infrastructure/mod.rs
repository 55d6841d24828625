//! Infrastructure layer.

pub mod config;
