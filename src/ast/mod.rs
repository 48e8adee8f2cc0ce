pub mod printer;

use std::fmt;

use serde::Serialize;

use crate::scanner::token::Span;

/// A parsed script: operations in source order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Script {
    pub operations: Vec<Operation>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Operation {
    Declare(DeclareOp),
    Assign(AssignOp),
    Increment(AdjustOp),
    Decrement(AdjustOp),
    Print(PrintOp),
    BranchStart(BranchStartOp),
    BranchEnd(BranchEndOp),
}

impl Operation {
    pub fn span(&self) -> Span {
        match self {
            Self::Declare(d) => d.span,
            Self::Assign(a) => a.span,
            Self::Increment(adj) | Self::Decrement(adj) => adj.span,
            Self::Print(p) => p.span,
            Self::BranchStart(b) => b.span,
            Self::BranchEnd(e) => e.span,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeclareOp {
    pub name: String,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssignOp {
    pub name: String,
    pub value: String,
    pub span: Span,
}

/// Shared payload of INCREMENT and DECREMENT.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdjustOp {
    pub name: String,
    pub delta: String,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrintOp {
    pub name: String,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BranchStartOp {
    pub target: String,
    pub operator: CompareOp,
    pub comparison: String,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BranchEndOp {
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, strum::EnumString)]
pub enum CompareOp {
    #[strum(serialize = "<")]
    Less,
    #[strum(serialize = ">")]
    Greater,
    #[strum(serialize = "==")]
    Equal,
    #[strum(serialize = "!=")]
    NotEqual,
    /// Any other operator text; the comparison counts as a match.
    #[strum(default)]
    Unrecognized(String),
}

impl CompareOp {
    /// Compare two integers. `None` for an unrecognized operator.
    pub fn evaluate(&self, left: i64, right: i64) -> Option<bool> {
        match self {
            Self::Less => Some(left < right),
            Self::Greater => Some(left > right),
            Self::Equal => Some(left == right),
            Self::NotEqual => Some(left != right),
            Self::Unrecognized(_) => None,
        }
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Less => write!(f, "<"),
            Self::Greater => write!(f, ">"),
            Self::Equal => write!(f, "=="),
            Self::NotEqual => write!(f, "!="),
            Self::Unrecognized(text) => write!(f, "{text}"),
        }
    }
}
