use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Span {
    pub offset: usize,
    pub len: usize,
}

impl Span {
    pub fn new(offset: usize, len: usize) -> Self {
        Self { offset, len }
    }

    /// Smallest span covering both `self` and `other`.
    pub fn to(self, other: Span) -> Self {
        let end = (other.offset + other.len).max(self.offset + self.len);
        Self::new(self.offset, end - self.offset)
    }
}

impl From<Span> for miette::SourceSpan {
    fn from(span: Span) -> Self {
        miette::SourceSpan::new(span.offset.into(), span.len)
    }
}

/// A whitespace-delimited word of script text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub value: String,
    pub span: Span,
}

impl Token {
    pub fn new(value: impl Into<String>, span: Span) -> Self {
        Self {
            value: value.into(),
            span,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' @{}", self.value, self.span.offset)
    }
}

/// Statement keywords. Matching is exact and case-sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumString, strum::Display)]
#[strum(serialize_all = "UPPERCASE")]
pub enum Keyword {
    Declare,
    Set,
    Print,
    Increment,
    Decrement,
    If,
    Endif,
}

impl Keyword {
    /// Number of tokens following the keyword that are consumed as operands.
    pub fn arity(self) -> usize {
        match self {
            Self::Endif => 0,
            Self::Declare | Self::Print => 1,
            Self::Set | Self::Increment | Self::Decrement => 2,
            Self::If => 3,
        }
    }
}

pub fn keyword_kind(word: &str) -> Option<Keyword> {
    word.parse().ok()
}
