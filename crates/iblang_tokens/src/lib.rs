#![doc = include_str!("../README.md")]

pub mod diagnostics;
pub mod spanned;
pub mod token;
pub mod token_stream;

pub use token_stream::TokenStream;
