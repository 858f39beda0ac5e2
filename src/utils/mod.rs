//! Shared text and number helpers used by both cipher stages.

pub mod alphabet;
pub mod modular;
