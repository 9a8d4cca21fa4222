//! Built-in commands, one submodule per category.

pub mod clock;
pub mod config;
