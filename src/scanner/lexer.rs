use winnow::prelude::*;
use winnow::stream::{LocatingSlice, Location};
use winnow::token::{one_of, take_till};

use crate::scanner::token::{Span, Token};

type Input<'a> = LocatingSlice<&'a str>;

/// Only spaces and newlines separate tokens; tabs and carriage returns stay in the word.
fn is_delimiter(c: char) -> bool {
    c == ' ' || c == '\n'
}

fn delimiter<'a>(input: &mut Input<'a>) -> ModalResult<()> {
    one_of(is_delimiter).void().parse_next(input)
}

/// Text up to the next delimiter; empty when a delimiter follows directly.
fn word<'a>(input: &mut Input<'a>) -> ModalResult<Token> {
    let start = input.current_token_start();
    take_till(0.., is_delimiter)
        .parse_next(input)
        .map(|text: &str| Token::new(text, Span::new(start, text.len())))
}

/// Split source into tokens.
///
/// Every delimiter ends a token, so a run of delimiters yields empty tokens. A final
/// word without a trailing delimiter is kept when it is non-empty.
pub fn scan_all(source: &str) -> Vec<Token> {
    let mut input = LocatingSlice::new(source);
    let mut tokens = Vec::new();

    while let Ok(token) = word(&mut input) {
        if delimiter(&mut input).is_ok() {
            tokens.push(token);
        } else {
            if !token.value.is_empty() {
                tokens.push(token);
            }
            break;
        }
    }

    log::debug!("scanned {} token(s) from {} byte(s)", tokens.len(), source.len());
    tokens
}
