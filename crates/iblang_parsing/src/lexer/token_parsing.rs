use iblang_tokens::token::TokenKind;
use nom::branch::alt;
use nom::bytes::complete::{is_not, tag, take_till, take_until};
use nom::character::complete::{alpha1, alphanumeric1, char, digit0, digit1, multispace1, none_of};
use nom::combinator::{all_consuming, consumed, map_parser, recognize, rest, value};
use nom::error::{context, VerboseError};
use nom::multi::{many0, many0_count};
use nom::sequence::{delimited, pair, preceded, tuple};
use nom::IResult;

type Result<'a, O> = IResult<&'a str, O, VerboseError<&'a str>>;

/// Parses a single token, returning the lexeme alongside its kind
pub fn parse_token(src: &str) -> Result<(&str, TokenKind)> {
    context(
        "token",
        consumed(alt((
            parse_word,
            parse_literal,
            parse_punctuation,
            parse_operator,
        ))),
    )(src)
}

/// Recognizes whitespace and comments. Never fails, an empty match is fine.
pub fn parse_insignificant(src: &str) -> Result<&str> {
    context(
        "insignificant",
        recognize(many0(alt((
            context("whitespace", multispace1),
            context(
                "block comment",
                recognize(delimited(tag("/*"), take_until("*/"), tag("*/"))),
            ),
            // runs to the end of input
            context("block comment", recognize(preceded(tag("/*"), rest))),
            context(
                "line comment",
                recognize(preceded(tag("//"), take_till(|c| c == '\n'))),
            ),
        )))),
    )(src)
}

fn recognize_identifier(src: &str) -> Result<&str> {
    recognize(pair(
        alt((alpha1, tag("_"))),
        many0_count(alt((alphanumeric1, tag("_")))),
    ))(src)
}

fn parse_word(src: &str) -> Result<TokenKind> {
    context(
        "word",
        map_parser(recognize_identifier, alt((parse_keyword, parse_identifier))),
    )(src)
}

fn all_consuming_tag<'a>(keyword: &'static str) -> impl FnMut(&'a str) -> Result<'a, &'a str> {
    move |i| all_consuming(tag(keyword))(i)
}

fn parse_keyword(src: &str) -> Result<TokenKind> {
    context(
        "keyword",
        alt((
            value(TokenKind::KeywordFunc, all_consuming_tag("func")),
            value(TokenKind::KeywordIf, all_consuming_tag("if")),
            value(TokenKind::KeywordElse, all_consuming_tag("else")),
            value(TokenKind::KeywordReturn, all_consuming_tag("return")),
        )),
    )(src)
}

fn parse_identifier(src: &str) -> Result<TokenKind> {
    context(
        "identifier",
        value(TokenKind::Identifier, recognize_identifier),
    )(src)
}

fn parse_literal(src: &str) -> Result<TokenKind> {
    context(
        "literal",
        alt((
            value(
                TokenKind::FloatLiteral,
                recognize(tuple((digit1, char('.'), digit0))),
            ),
            value(TokenKind::IntegerLiteral, digit1),
            value(TokenKind::StringLiteral, parse_quoted('"', "\"\\\n")),
            value(TokenKind::CharLiteral, parse_quoted('\'', "'\\\n")),
        )),
    )(src)
}

/// A quoted run on a single line. Escapes are accepted but left as written.
fn parse_quoted<'a>(
    quote: char,
    forbidden: &'static str,
) -> impl FnMut(&'a str) -> Result<'a, &'a str> {
    move |input| {
        recognize(delimited(
            char(quote),
            many0_count(alt((
                is_not(forbidden),
                recognize(pair(char('\\'), none_of("\n"))),
            ))),
            char(quote),
        ))(input)
    }
}

fn parse_punctuation(src: &str) -> Result<TokenKind> {
    context(
        "punctuation",
        alt((
            value(TokenKind::OpenParenthesis, char('(')),
            value(TokenKind::CloseParenthesis, char(')')),
            value(TokenKind::OpenScope, char('{')),
            value(TokenKind::CloseScope, char('}')),
            value(TokenKind::Comma, char(',')),
        )),
    )(src)
}

fn parse_operator(src: &str) -> Result<TokenKind> {
    context(
        "operator",
        alt((
            alt((
                value(TokenKind::Equal, tag("==")),
                value(TokenKind::NotEqual, tag("!=")),
                value(TokenKind::LessThanOrEqual, tag("<=")),
                value(TokenKind::GreaterThanOrEqual, tag(">=")),
                value(TokenKind::And, tag("&&")),
                value(TokenKind::Or, tag("||")),
            )),
            alt((
                value(TokenKind::Assignment, char('=')),
                value(TokenKind::Not, char('!')),
                value(TokenKind::LessThan, char('<')),
                value(TokenKind::GreaterThan, char('>')),
                value(TokenKind::Add, char('+')),
                value(TokenKind::Subtract, char('-')),
                value(TokenKind::Multiply, char('*')),
                value(TokenKind::Divide, char('/')),
                value(TokenKind::Modulo, char('%')),
            )),
        )),
    )(src)
}
