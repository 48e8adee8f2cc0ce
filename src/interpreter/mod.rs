pub mod branch;
pub mod memory;
pub mod value;

use std::io::Write;

use crate::ast::*;
use crate::error::RuntimeError;
use crate::interpreter::branch::{BranchMode, BranchState};
use crate::interpreter::memory::Memory;
use crate::interpreter::value::to_integer;

/// Execution settings.
#[derive(Debug, Clone, Copy, Default)]
pub struct Options {
    pub branch_mode: BranchMode,
    /// Reject non-integer operands and unrecognized comparison operators instead of
    /// coercing them.
    pub strict: bool,
}

pub struct Interpreter {
    options: Options,
    memory: Memory,
    branches: BranchState,
    output: Vec<String>,
    /// Writer for print output (allows testing without stdout)
    writer: Box<dyn Write>,
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

impl Interpreter {
    pub fn new() -> Self {
        Self::with_options(Options::default())
    }

    pub fn with_options(options: Options) -> Self {
        Self::with_writer(options, Box::new(std::io::stdout()))
    }

    pub fn with_writer(options: Options, writer: Box<dyn Write>) -> Self {
        Self {
            options,
            memory: Memory::new(),
            branches: BranchState::new(options.branch_mode),
            output: Vec::new(),
            writer,
        }
    }

    /// Run every operation once, in order.
    pub fn interpret(&mut self, script: &Script) -> Result<(), RuntimeError> {
        for op in &script.operations {
            self.execute(op)?;
        }
        self.writer.flush()?;
        if self.branches.is_skipping() {
            log::debug!("script ended inside a skipped IF body");
        }
        Ok(())
    }

    /// Lines printed so far.
    pub fn output(&self) -> &[String] {
        &self.output
    }

    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    fn execute(&mut self, op: &Operation) -> Result<(), RuntimeError> {
        if self.branches.is_skipping() {
            match op {
                Operation::BranchStart(_) => self.branches.enter_skipped(),
                Operation::BranchEnd(_) => self.close_branch(),
                _ => log::trace!("skipped {op:?}"),
            }
            return Ok(());
        }

        log::trace!("execute {op:?}");
        match op {
            Operation::Declare(d) => self.memory.declare(&d.name),
            Operation::Assign(a) => self.memory.assign(&a.name, a.value.as_str()),
            Operation::Print(p) => {
                let text = self.memory.get(&p.name).to_string();
                writeln!(self.writer, "{text}")?;
                self.output.push(text);
            }
            Operation::Increment(adj) => {
                self.adjust(adj, i64::wrapping_add)?;
            }
            Operation::Decrement(adj) => {
                self.adjust(adj, i64::wrapping_sub)?;
            }
            Operation::BranchStart(b) => {
                let taken = self.evaluate_branch(b)?;
                log::debug!(
                    "IF {} {} {} -> {taken}",
                    b.target,
                    b.operator,
                    b.comparison
                );
                self.branches.enter(taken);
            }
            Operation::BranchEnd(_) => self.close_branch(),
        }
        Ok(())
    }

    fn adjust(&mut self, adj: &AdjustOp, apply: fn(i64, i64) -> i64) -> Result<(), RuntimeError> {
        let current = to_integer(self.memory.get(&adj.name), self.options.strict, adj.span)?;
        let delta = to_integer(&adj.delta, self.options.strict, adj.span)?;
        self.memory.assign(&adj.name, apply(current, delta).to_string());
        Ok(())
    }

    fn evaluate_branch(&self, b: &BranchStartOp) -> Result<bool, RuntimeError> {
        let target = to_integer(&b.target, self.options.strict, b.span)?;
        let comparison = to_integer(&b.comparison, self.options.strict, b.span)?;
        match b.operator.evaluate(target, comparison) {
            Some(result) => Ok(result),
            None if self.options.strict => Err(RuntimeError::with_span(
                format!("unrecognized comparison operator '{}'", b.operator),
                b.span,
            )),
            None => {
                log::debug!("unrecognized operator '{}' treated as a match", b.operator);
                Ok(true)
            }
        }
    }

    fn close_branch(&mut self) {
        let was_skipping = self.branches.is_skipping();
        self.branches.exit();
        if was_skipping && !self.branches.is_skipping() {
            log::debug!("ENDIF resumes execution");
        }
    }
}
