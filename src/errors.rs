//! Error types with rich diagnostics using miette
//!
//! The shifter itself never fails. These errors come from the opt-in strict
//! mode and from reading and writing shape record files.

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Source context for error reporting
#[derive(Debug, Clone)]
pub struct SourceContext {
    /// Name of the source (filename, shape name or "<path>")
    pub name: String,
    /// The full source text
    pub source: String,
}

impl SourceContext {
    /// Create a new source context
    pub fn new(name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
        }
    }

    /// Create a NamedSource for miette
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.name, self.source.clone())
    }

    /// Span from `start` to the end of the source
    pub fn tail_span(&self, start: usize) -> SourceSpan {
        let start = start.min(self.source.len());
        (start, self.source.len() - start).into()
    }

    /// Byte offset of a 1-based line/column position
    pub fn offset_of(&self, line: usize, column: usize) -> usize {
        let line_start: usize = self
            .source
            .split_inclusive('\n')
            .take(line.saturating_sub(1))
            .map(str::len)
            .sum();
        (line_start + column.saturating_sub(1)).min(self.source.len())
    }
}

// ============================================================================
// Shift Errors
// ============================================================================

/// Trailing path data that strict mode refuses to drop
#[derive(Error, Diagnostic, Debug)]
pub enum ShiftError {
    #[error("operand before any command")]
    #[diagnostic(
        code(routeshift::shift::no_command),
        help("{discarded} trailing token(s) would be dropped")
    )]
    NoCommand {
        discarded: usize,
        #[source_code]
        src: NamedSource<String>,
        #[label("dropped from here")]
        span: SourceSpan,
    },

    #[error("`{command}` takes no operands")]
    #[diagnostic(
        code(routeshift::shift::unexpected_operands),
        help("{discarded} trailing token(s) would be dropped")
    )]
    UnexpectedOperands {
        command: char,
        discarded: usize,
        #[source_code]
        src: NamedSource<String>,
        #[label("dropped from here")]
        span: SourceSpan,
    },

    #[error("`{command}` needs {expected} operands, found {found}")]
    #[diagnostic(
        code(routeshift::shift::incomplete_tuple),
        help("{discarded} trailing token(s) would be dropped")
    )]
    IncompleteTuple {
        command: char,
        expected: usize,
        found: usize,
        discarded: usize,
        #[source_code]
        src: NamedSource<String>,
        #[label("incomplete tuple")]
        span: SourceSpan,
    },
}

// ============================================================================
// Record Errors
// ============================================================================

/// Errors reading or writing shape record files
#[derive(Error, Diagnostic, Debug)]
pub enum RecordError {
    #[error("failed to read {path}")]
    #[diagnostic(code(routeshift::records::io))]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid shape records: {message}")]
    #[diagnostic(code(routeshift::records::json))]
    Json {
        message: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("here")]
        span: SourceSpan,
    },

    #[error("failed to encode shape records")]
    #[diagnostic(code(routeshift::records::encode))]
    Encode(#[source] serde_json::Error),
}

impl RecordError {
    /// Wrap a serde_json decode error, pointing at the offending position
    pub fn json(ctx: &SourceContext, err: &serde_json::Error) -> Self {
        let offset = ctx.offset_of(err.line(), err.column());
        RecordError::Json {
            message: err.to_string(),
            src: ctx.named_source(),
            span: (offset, 0).into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_of_line_and_column() {
        let ctx = SourceContext::new("t.json", "[\n  {\"a\": 1},\n  x\n]");
        assert_eq!(ctx.offset_of(1, 1), 0);
        assert_eq!(ctx.offset_of(2, 3), 4);
        assert_eq!(&ctx.source[ctx.offset_of(3, 3)..ctx.offset_of(3, 4)], "x");
    }

    #[test]
    fn offset_is_clamped() {
        let ctx = SourceContext::new("t", "ab");
        assert_eq!(ctx.offset_of(9, 9), 2);
        assert_eq!(ctx.tail_span(10), SourceSpan::from((2, 0)));
    }

    #[test]
    fn tail_span_covers_rest() {
        let ctx = SourceContext::new("<path>", "M 10");
        assert_eq!(ctx.tail_span(2), SourceSpan::from((2, 2)));
    }
}
