// Copyright (c) 2026 - The scm-inventory Authors
//! Filter expression parser
//!
//! Grammar, loosest-binding first:
//!
//! ```text
//! expr       := and ("or" and)*
//! and        := unary ("and" unary)*
//! unary      := "not" atom | atom
//! atom       := comparison | "true" | "false" | "(" expr ")"
//! comparison := operand ("==" | "!=") operand
//!             | operand "not"? "in" operand
//!             | operand "contains" operand
//! operand    := string-literal | attribute-name
//! ```

use chumsky::prelude::*;
use chumsky::Stream;
use thiserror::Error;

use crate::filter::ast::{CmpOp, Expr, Operand};
use crate::filter::lexer::{lexer, Token};

/// The filter expression failed to parse
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid filter expression at offset {offset}: {message}")]
pub struct FilterParseError {
    pub offset: usize,
    pub message: String,
}

/// Parse a filter expression into its AST
pub fn parse_expr(source: &str) -> Result<Expr, FilterParseError> {
    let (tokens, lex_errs) = lexer().parse_recovery(source);
    if let Some(err) = lex_errs.into_iter().next() {
        return Err(FilterParseError {
            offset: err.span().start,
            message: err.to_string(),
        });
    }

    let tokens = tokens.unwrap_or_default();
    if tokens.is_empty() {
        return Err(FilterParseError {
            offset: 0,
            message: "empty filter expression".to_string(),
        });
    }

    let span_end = source.len()..source.len() + 1;
    let stream = Stream::from_iter(span_end, tokens.into_iter());

    expr_parser()
        .parse(stream)
        .map_err(|errs| match errs.into_iter().next() {
            Some(err) => FilterParseError {
                offset: err.span().start,
                message: err.to_string(),
            },
            None => FilterParseError {
                offset: 0,
                message: "unparsable filter expression".to_string(),
            },
        })
}

fn expr_parser() -> impl Parser<Token, Expr, Error = Simple<Token>> {
    let ident = select! { Token::Ident(s) => s };
    let string = select! { Token::Str(s) => s };

    let operand = choice::<_, Simple<Token>>((
        string.map(Operand::Literal),
        ident.map(Operand::Attr),
    ));

    let cmp_op = choice::<_, Simple<Token>>((
        just(Token::CmpEq).to(CmpOp::Eq),
        just(Token::CmpNeq).to(CmpOp::Neq),
    ));

    let bool_value =
        choice::<_, Simple<Token>>((just(Token::True).to(true), just(Token::False).to(false)));

    let comparison = choice::<_, Simple<Token>>((
        operand
            .clone()
            .then(cmp_op)
            .then(operand.clone())
            .map(|((lhs, op), rhs)| Expr::Cmp { lhs, op, rhs }),
        operand
            .clone()
            .then_ignore(just(Token::KwNot).then(just(Token::KwIn)))
            .then(operand.clone())
            .map(|(needle, list)| Expr::Not(Box::new(Expr::In { needle, list }))),
        operand
            .clone()
            .then_ignore(just(Token::KwIn))
            .then(operand.clone())
            .map(|(needle, list)| Expr::In { needle, list }),
        operand
            .clone()
            .then_ignore(just(Token::KwContains))
            .then(operand.clone())
            .map(|(list, needle)| Expr::In { needle, list }),
    ));

    let expr = recursive(|expr| {
        let atom = choice::<_, Simple<Token>>((
            comparison,
            bool_value.map(Expr::Bool),
            expr.delimited_by(just(Token::LParen), just(Token::RParen)),
        ));
        let unary = choice::<_, Simple<Token>>((
            just(Token::KwNot)
                .ignore_then(atom.clone())
                .map(|e| Expr::Not(Box::new(e))),
            atom,
        ));
        let and = unary
            .separated_by(just(Token::KwAnd))
            .at_least(1)
            .map(|mut items| {
                if items.len() == 1 {
                    items.remove(0)
                } else {
                    Expr::And(items)
                }
            });
        and.separated_by(just(Token::KwOr))
            .at_least(1)
            .map(|mut items| {
                if items.len() == 1 {
                    items.remove(0)
                } else {
                    Expr::Or(items)
                }
            })
    });

    expr.then_ignore(end())
}
