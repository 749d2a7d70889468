//! Record parser implementation using chumsky

use chumsky::input::{Stream, ValueInput};
use chumsky::prelude::*;

use crate::parser::ast::Record;
use crate::parser::lexer::Token;

/// Parse vertex record text into records
///
/// Each non-blank line must hold exactly `<integer> <number> <number>`.
/// Integers are accepted as coordinates; the type must be an integer.
pub fn parse(input: &str) -> Result<Vec<Record>, Vec<crate::ParseError>> {
    let len = input.len();

    // Create a logos lexer and convert to token stream
    let token_iter = crate::parser::lexer::lex(input).map(|(tok, span)| (tok, span.into()));

    // Turn the token iterator into a stream that chumsky can use
    let token_stream = Stream::from_iter(token_iter)
        // Split (Token, SimpleSpan) into token and span parts
        .map((len..len).into(), |(t, s): (_, _)| (t, s));

    records_parser()
        .parse(token_stream)
        .into_result()
        .map_err(|errs| errs.into_iter().map(|e| e.into()).collect())
}

/// Helper to extract span range from chumsky's MapExtra
fn span_range(e: &impl chumsky::span::Span<Offset = usize>) -> std::ops::Range<usize> {
    e.start()..e.end()
}

fn records_parser<'a, I>() -> impl Parser<'a, I, Vec<Record>, extra::Err<Rich<'a, Token>>> + Clone
where
    I: ValueInput<'a, Token = Token, Span = SimpleSpan>,
{
    let vertex_type = select! {
        Token::Integer(n) => n,
    }
    .labelled("vertex type");

    let coordinate = select! {
        Token::Float(v) => v,
        Token::Integer(n) => n as f64,
    }
    .labelled("coordinate");

    let record = vertex_type
        .then(coordinate.clone())
        .then(coordinate)
        .map_with(|((kind, x), y), e| Record {
            kind,
            x,
            y,
            span: span_range(&e.span()),
        });

    let line_break = just(Token::Newline).repeated().at_least(1);

    just(Token::Newline)
        .repeated()
        .ignore_then(
            record
                .separated_by(line_break)
                .allow_trailing()
                .collect::<Vec<_>>(),
        )
        .then_ignore(end())
}
