use crate::error::RuntimeError;
use crate::scanner::token::Span;

/// Interpret script text as a base-10 integer.
///
/// Values are untyped strings, so anything that does not parse (including the empty
/// string of an undefined variable and the `null` of a fresh declaration) becomes 0.
/// With `strict` set, such text is an error instead.
pub fn to_integer(text: &str, strict: bool, span: Span) -> Result<i64, RuntimeError> {
    match text.parse::<i64>() {
        Ok(n) => Ok(n),
        Err(_) if strict => Err(RuntimeError::with_span(
            format!("'{text}' is not an integer"),
            span,
        )),
        Err(e) => {
            log::debug!("coercing '{text}' to 0: {e}");
            Ok(0)
        }
    }
}
