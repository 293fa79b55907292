//! optargs-help, a builder for conventional `--help` output.
#![no_std]

extern crate alloc;

pub mod help;
pub mod wrap;

pub use help::Help;
