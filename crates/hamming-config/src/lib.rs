//! Configuration for the Hamming tool
//!
//! This crate provides configuration loading and parsing:
//! - TOML configuration file parsing
//! - Tool configuration structures

pub mod tool_config;
pub mod toml_config;

pub use tool_config::*;
pub use toml_config::*;
