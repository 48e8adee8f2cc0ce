pub mod lexer;
pub mod token;

use token::Token;

/// Scan script text into a list of tokens.
pub fn scan(source: &str) -> Vec<Token> {
    lexer::scan_all(source)
}
