//! Lexer for vertex record text using logos

use logos::Logos;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\r]+")]
pub enum Token {
    // Records are line oriented, so line breaks are significant
    #[token("\n")]
    Newline,

    #[regex(r"[+-]?[0-9]+", |lex| lex.slice().parse::<i64>().ok(), priority = 3)]
    Integer(i64),

    #[regex(
        r"[+-]?([0-9]+\.[0-9]*|\.[0-9]+)([eE][+-]?[0-9]+)?|[+-]?[0-9]+[eE][+-]?[0-9]+",
        |lex| lex.slice().parse::<f64>().ok().filter(|v| v.is_finite()),
        priority = 3
    )]
    Float(f64),

    // Anything else that is not whitespace; kept so the grammar can report it
    #[regex(r"[^ \t\r\n#]", |lex| lex.slice().to_string())]
    Invalid(String),

    // Comments (skip)
    #[regex(r"#[^\n]*", logos::skip)]
    Comment,
}

/// Lex input string into tokens with spans
///
/// Numbers that do not fit their type (an integer overflow, or a float that
/// rounds to infinity) come back as `Invalid` so they surface as malformed
/// records.
pub fn lex(input: &str) -> impl Iterator<Item = (Token, Span)> + '_ {
    Token::lexer(input).spanned().map(|(tok, span)| match tok {
        Ok(t) => (t, span),
        Err(()) => (Token::Invalid(input[span.clone()].to_string()), span),
    })
}
