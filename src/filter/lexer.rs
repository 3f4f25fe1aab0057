// Copyright (c) 2026 - The scm-inventory Authors
//! Filter expression lexer

use std::fmt;

use chumsky::prelude::*;

/// Lexical tokens of the filter language
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Token {
    Str(String),
    Ident(String),
    KwAnd,
    KwOr,
    KwNot,
    KwIn,
    KwContains,
    True,
    False,
    CmpEq,
    CmpNeq,
    LParen,
    RParen,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Str(s) => write!(f, "string `{}`", s),
            Token::Ident(s) => write!(f, "identifier `{}`", s),
            Token::KwAnd => write!(f, "'and'"),
            Token::KwOr => write!(f, "'or'"),
            Token::KwNot => write!(f, "'not'"),
            Token::KwIn => write!(f, "'in'"),
            Token::KwContains => write!(f, "'contains'"),
            Token::True => write!(f, "'true'"),
            Token::False => write!(f, "'false'"),
            Token::CmpEq => write!(f, "'=='"),
            Token::CmpNeq => write!(f, "'!='"),
            Token::LParen => write!(f, "'('"),
            Token::RParen => write!(f, "')'"),
        }
    }
}

pub(crate) fn lexer(
) -> impl Parser<char, Vec<(Token, std::ops::Range<usize>)>, Error = Simple<char>> {
    let dquoted = just('"')
        .ignore_then(filter(|c| *c != '"').repeated().collect::<String>())
        .then_ignore(just('"'));
    let squoted = just('\'')
        .ignore_then(filter(|c| *c != '\'').repeated().collect::<String>())
        .then_ignore(just('\''));
    let string = dquoted.or(squoted).map(Token::Str);

    let symbol = filter(|c: &char| c.is_ascii_alphanumeric() || *c == '_')
        .repeated()
        .at_least(1)
        .collect::<String>();
    let ident = symbol.clone().map(Token::Ident);

    let make_keyword = |word: &'static str, token: Token| {
        symbol.clone().try_map(move |raw: String, span| {
            if raw == word {
                Ok(token.clone())
            } else {
                Err(Simple::expected_input_found(span, None, None))
            }
        })
    };
    let keyword = choice::<_, Simple<char>>(vec![
        make_keyword("and", Token::KwAnd).boxed(),
        make_keyword("or", Token::KwOr).boxed(),
        make_keyword("not", Token::KwNot).boxed(),
        make_keyword("in", Token::KwIn).boxed(),
        make_keyword("contains", Token::KwContains).boxed(),
        make_keyword("true", Token::True).boxed(),
        make_keyword("false", Token::False).boxed(),
    ]);

    let op = choice::<_, Simple<char>>(vec![
        just("==").to(Token::CmpEq).boxed(),
        just("!=").to(Token::CmpNeq).boxed(),
        just("(").to(Token::LParen).boxed(),
        just(")").to(Token::RParen).boxed(),
    ]);

    choice::<_, Simple<char>>((keyword, string, op, ident))
        .map_with_span(|tok, span| (tok, span))
        .padded()
        .repeated()
        .then_ignore(end())
}
