//! Command line interface for Purser.

pub mod args;
pub mod commands;
pub mod output;
