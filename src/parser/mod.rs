use crate::ast::*;
use crate::error::CompileError;
use crate::scanner::token::{Keyword, Span, Token, keyword_kind};

pub struct Parser {
    tokens: Vec<Token>,
    current: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, current: 0 }
    }

    /// Dispatch on keywords; any other token is skipped.
    pub fn parse(mut self) -> Result<Script, CompileError> {
        let mut operations = Vec::new();
        while !self.is_at_end() {
            let token = self.advance().clone();
            match keyword_kind(&token.value) {
                Some(keyword) => operations.push(self.operation(keyword, token.span)?),
                None => log::trace!("skipping unrecognized token {token}"),
            }
        }
        log::debug!("parsed {} operation(s)", operations.len());
        Ok(Script { operations })
    }

    fn operation(&mut self, keyword: Keyword, start: Span) -> Result<Operation, CompileError> {
        self.expect_operands(keyword, start)?;
        let op = match keyword {
            Keyword::Declare => {
                let name = self.operand();
                Operation::Declare(DeclareOp {
                    name,
                    span: self.span_from(start),
                })
            }
            Keyword::Set => {
                let name = self.operand();
                let value = self.operand();
                Operation::Assign(AssignOp {
                    name,
                    value,
                    span: self.span_from(start),
                })
            }
            Keyword::Print => {
                let name = self.operand();
                Operation::Print(PrintOp {
                    name,
                    span: self.span_from(start),
                })
            }
            Keyword::Increment => Operation::Increment(self.adjust(start)),
            Keyword::Decrement => Operation::Decrement(self.adjust(start)),
            Keyword::If => {
                let target = self.operand();
                let operator = self.operand();
                let comparison = self.operand();
                let operator = match operator.parse::<CompareOp>() {
                    Ok(op) => op,
                    Err(_) => CompareOp::Unrecognized(operator),
                };
                Operation::BranchStart(BranchStartOp {
                    target,
                    operator,
                    comparison,
                    span: self.span_from(start),
                })
            }
            Keyword::Endif => Operation::BranchEnd(BranchEndOp { span: start }),
        };
        Ok(op)
    }

    fn adjust(&mut self, start: Span) -> AdjustOp {
        let name = self.operand();
        let delta = self.operand();
        AdjustOp {
            name,
            delta,
            span: self.span_from(start),
        }
    }

    /// Checked bounds test: the keyword needs `arity` more tokens.
    fn expect_operands(&self, keyword: Keyword, start: Span) -> Result<(), CompileError> {
        let arity = keyword.arity();
        let found = self.tokens.len() - self.current;
        if found >= arity {
            return Ok(());
        }
        let span = self.tokens.last().map_or(start, |last| start.to(last.span));
        Err(CompileError::malformed(
            format!(
                "'{keyword}' expects {arity} operand{}, found {found}",
                if arity == 1 { "" } else { "s" }
            ),
            span.offset,
            span.len.max(1),
        ))
    }

    /// Take the next token as an operand. Only called after `expect_operands`.
    fn operand(&mut self) -> String {
        self.advance().value.clone()
    }

    fn advance(&mut self) -> &Token {
        let token = &self.tokens[self.current];
        self.current += 1;
        token
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.tokens.len()
    }

    fn span_from(&self, start: Span) -> Span {
        start.to(self.tokens[self.current - 1].span)
    }
}
