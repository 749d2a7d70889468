//! Error types for vertex record parsing

use ariadne::{Color, Label, Report, ReportKind, Source};
use thiserror::Error;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    /// A line does not tokenize into `<int> <float> <float>`
    #[error("Malformed record at {span:?}: {message}")]
    MalformedRecord {
        span: Span,
        message: String,
        expected: Vec<String>,
    },

    /// A record carries a type code other than 1, 2 or 3
    #[error("Unknown vertex type {code} at {span:?} (expected 1, 2 or 3)")]
    UnknownVertexType { span: Span, code: i64 },
}

impl ParseError {
    /// Create an unknown vertex type error
    pub fn unknown_vertex_type(code: i64, span: Span) -> Self {
        Self::UnknownVertexType { span, code }
    }

    /// Source span of the offending text
    pub fn span(&self) -> &Span {
        match self {
            Self::MalformedRecord { span, .. } | Self::UnknownVertexType { span, .. } => span,
        }
    }

    /// Format the error with source context using ariadne
    pub fn format(&self, source: &str, filename: &str) -> String {
        let (message, label) = match self {
            ParseError::MalformedRecord {
                message, expected, ..
            } => {
                let expected_str = if expected.is_empty() {
                    String::new()
                } else {
                    format!("\nExpected: {}", expected.join(", "))
                };
                (message.clone(), format!("{}{}", message, expected_str))
            }
            ParseError::UnknownVertexType { code, .. } => (
                format!("Unknown vertex type {}", code),
                "vertex type must be 1 (anchor), 2 (quadratic control) or 3 (cubic control)"
                    .to_string(),
            ),
        };

        let span = self.span().clone();
        let mut buf = Vec::new();
        let written = Report::build(ReportKind::Error, filename, span.start)
            .with_message(&message)
            .with_label(
                Label::new((filename, span))
                    .with_message(label)
                    .with_color(Color::Red),
            )
            .finish()
            .write((filename, Source::from(source)), &mut buf);

        match written {
            Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
            Err(_) => self.to_string(),
        }
    }
}

impl<'a> From<chumsky::error::Rich<'a, crate::parser::lexer::Token>> for ParseError {
    fn from(err: chumsky::error::Rich<'a, crate::parser::lexer::Token>) -> Self {
        use chumsky::error::RichReason;

        // Format the message based on the reason
        let message = match err.reason() {
            RichReason::ExpectedFound { found, .. } => {
                let found_str = match found {
                    Some(tok) => format_token(tok),
                    None => "end of input".to_string(),
                };
                format!("Unexpected {}", found_str)
            }
            RichReason::Custom(msg) => msg.to_string(),
        };

        // Format expected tokens nicely
        let expected: Vec<String> = err
            .expected()
            .filter_map(|e| match e {
                chumsky::error::RichPattern::Token(tok) => Some(format_token(tok)),
                chumsky::error::RichPattern::Label(label) => Some(label.to_string()),
                chumsky::error::RichPattern::EndOfInput => Some("end of input".to_string()),
                chumsky::error::RichPattern::Identifier(s) => Some(format!("identifier '{}'", s)),
                chumsky::error::RichPattern::Any => Some("any token".to_string()),
                chumsky::error::RichPattern::SomethingElse => None,
            })
            .collect();

        ParseError::MalformedRecord {
            span: err.span().into_range(),
            message,
            expected,
        }
    }
}

/// Format a token for human-readable error messages
fn format_token(tok: &crate::parser::lexer::Token) -> String {
    use crate::parser::lexer::Token;
    match tok {
        Token::Integer(n) => format!("integer {}", n),
        Token::Float(v) => format!("number {}", v),
        Token::Newline => "end of line".to_string(),
        Token::Invalid(s) => format!("'{}'", s),
        Token::Comment => "comment".to_string(),
    }
}
