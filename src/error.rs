use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

use crate::scanner::token::Span;

// ============= Parse-time errors (with miette diagnostics) =============

#[derive(Error, Debug, Diagnostic)]
pub enum CompileError {
    #[error("malformed script: {message}")]
    #[diagnostic(
        code(script::malformed),
        help("every keyword must be followed by all of its operands")
    )]
    Malformed {
        message: String,
        #[label("here")]
        span: SourceSpan,
        #[source_code]
        src: miette::NamedSource<String>,
    },
}

impl CompileError {
    pub fn malformed(message: impl Into<String>, offset: usize, len: usize) -> Self {
        Self::Malformed {
            message: message.into(),
            span: SourceSpan::new(offset.into(), len),
            src: miette::NamedSource::new("input", String::new()),
        }
    }

    /// Attach source code for fancy miette diagnostics
    pub fn with_source_code(self, name: impl Into<String>, source: impl Into<String>) -> Self {
        match self {
            Self::Malformed { message, span, .. } => Self::Malformed {
                message,
                span,
                src: miette::NamedSource::new(name.into(), source.into()),
            },
        }
    }
}

// ============= Runtime errors (simple, no miette) =============

#[derive(Error, Debug)]
pub enum RuntimeError {
    #[error("Error: {message}")]
    Error { message: String, span: Option<Span> },

    #[error("Error: write output: {0}")]
    Output(#[from] std::io::Error),
}

impl RuntimeError {
    pub fn new(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
            span: None,
        }
    }

    pub fn with_span(message: impl Into<String>, span: Span) -> Self {
        Self::Error {
            message: message.into(),
            span: Some(span),
        }
    }

    /// Format error with line number (requires source code)
    pub fn display_with_line(&self, source: &str) -> String {
        match self {
            Self::Error {
                message,
                span: Some(span),
            } => {
                let line = offset_to_line(source, span.offset);
                format!("Error: line {line}: {message}")
            }
            Self::Error {
                message,
                span: None,
            } => format!("Error: {message}"),
            Self::Output(_) => self.to_string(),
        }
    }
}

/// Calculate line number from byte offset in source
fn offset_to_line(source: &str, offset: usize) -> usize {
    source.as_bytes()[..offset.min(source.len())]
        .iter()
        .filter(|&&b| b == b'\n')
        .count()
        + 1
}

// ============= Tests =============

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compile_error_implements_diagnostic() {
        let err = CompileError::malformed("test", 0, 1);
        let diag: &dyn Diagnostic = &err;
        assert_eq!(
            diag.code().map(|c| c.to_string()),
            Some("script::malformed".to_string())
        );
        assert!(diag.help().is_some());
    }

    #[test]
    fn compile_error_with_source() {
        let err = CompileError::malformed("'SET' expects 2 operands, found 1", 0, 5)
            .with_source_code("test.script", "SET x");
        let CompileError::Malformed { src, .. } = &err;
        assert_eq!(src.name(), "test.script");
        assert!(err.to_string().contains("'SET'"));
    }

    #[test]
    fn runtime_error_with_span() {
        let err = RuntimeError::with_span("type error", Span::new(10, 5));
        assert!(matches!(err, RuntimeError::Error { span: Some(_), .. }));
    }

    #[test]
    fn runtime_error_from_io() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err = RuntimeError::from(io);
        assert!(matches!(err, RuntimeError::Output(_)));
        assert!(err.display_with_line("").contains("pipe closed"));
    }

    #[test]
    fn offset_to_line_counts_script_lines() {
        let source = "SET x 1\nPRINT x\nENDIF";
        assert_eq!(offset_to_line(source, 4), 1); // x in SET
        assert_eq!(offset_to_line(source, 7), 1); // newline ending line 1
        assert_eq!(offset_to_line(source, 8), 2); // PRINT
        assert_eq!(offset_to_line(source, 16), 3); // ENDIF
    }

    #[test]
    fn offset_to_line_blank_lines() {
        let source = "DECLARE x\n\n\nPRINT x\n";
        assert_eq!(offset_to_line(source, 12), 4);
    }

    #[test]
    fn offset_to_line_past_end() {
        assert_eq!(offset_to_line("PRINT x", 100), 1);
    }

    #[test]
    fn runtime_error_display_with_line() {
        let source = "SET x 1\nINCREMENT x abc\n";
        let err = RuntimeError::with_span("'abc' is not an integer", Span::new(8, 9));
        assert_eq!(
            err.display_with_line(source),
            "Error: line 2: 'abc' is not an integer"
        );
    }

    #[test]
    fn runtime_error_display_no_span() {
        let err = RuntimeError::new("unrecognized comparison operator '?'");
        assert_eq!(
            err.display_with_line("dummy"),
            "Error: unrecognized comparison operator '?'"
        );
    }
}
