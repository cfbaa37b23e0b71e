#![doc = include_str!("../README.md")]

pub mod command;
mod compiler;
pub mod expectations;
pub mod printer;

pub use compiler::*;
