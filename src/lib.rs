//! Interpreter for a line-oriented scripting language:
//! `scanner` (text → tokens), `parser` (tokens → operations), `interpreter` (execution).

pub mod ast;
pub mod error;
pub mod interpreter;
pub mod parser;
pub mod scanner;

// Re-export error types for convenience
pub use error::{CompileError, RuntimeError};
