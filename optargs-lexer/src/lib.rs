//! optargs-lexer, a lexer that breaks an argument vector into option and
//! positional tokens.
#![no_std]

pub mod lexer;
pub mod token;

pub use lexer::{Error, Lexer};
pub use token::Token;
