//! Subcommand implementations.

pub mod sign;
pub mod verify;
