// Copyright (c) 2026 - The scm-inventory Authors
//! Filter expression evaluation against a host attribute bag

use thiserror::Error;

use crate::domain::{AttrValue, HostAttributes};
use crate::filter::ast::{CmpOp, Expr, Operand};

/// The filter expression could not be evaluated for a host
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FilterError {
    #[error("unknown attribute '{0}'")]
    UnknownAttribute(String),

    #[error("attribute '{0}' is list-valued and cannot be compared with == or !=")]
    ListComparison(String),

    #[error("membership target '{0}' is not list-valued")]
    ScalarMembershipTarget(String),

    #[error("membership needle '{0}' is list-valued")]
    ListNeedle(String),
}

pub(crate) fn eval(expr: &Expr, attrs: &HostAttributes) -> Result<bool, FilterError> {
    match expr {
        Expr::Bool(value) => Ok(*value),
        Expr::Cmp { lhs, op, rhs } => {
            let lhs = resolve_scalar(lhs, attrs)?;
            let rhs = resolve_scalar(rhs, attrs)?;
            Ok(match op {
                CmpOp::Eq => lhs == rhs,
                CmpOp::Neq => lhs != rhs,
            })
        }
        Expr::In { needle, list } => {
            let needle = match resolve(needle, attrs)? {
                AttrValue::Str(s) => s,
                AttrValue::List(_) => {
                    return Err(FilterError::ListNeedle(operand_name(needle)))
                }
            };
            match resolve(list, attrs)? {
                AttrValue::List(items) => Ok(items.iter().any(|item| item == needle)),
                AttrValue::Str(_) => {
                    Err(FilterError::ScalarMembershipTarget(operand_name(list)))
                }
            }
        }
        Expr::Not(inner) => Ok(!eval(inner, attrs)?),
        Expr::And(items) => {
            for item in items {
                if !eval(item, attrs)? {
                    return Ok(false);
                }
            }
            Ok(true)
        }
        Expr::Or(items) => {
            for item in items {
                if eval(item, attrs)? {
                    return Ok(true);
                }
            }
            Ok(false)
        }
    }
}

fn resolve<'a>(operand: &'a Operand, attrs: &'a HostAttributes) -> Result<AttrValue<'a>, FilterError> {
    match operand {
        Operand::Literal(value) => Ok(AttrValue::Str(value)),
        Operand::Attr(name) => attrs
            .get(name)
            .ok_or_else(|| FilterError::UnknownAttribute(name.clone())),
    }
}

fn resolve_scalar<'a>(
    operand: &'a Operand,
    attrs: &'a HostAttributes,
) -> Result<&'a str, FilterError> {
    match resolve(operand, attrs)? {
        AttrValue::Str(s) => Ok(s),
        AttrValue::List(_) => Err(FilterError::ListComparison(operand_name(operand))),
    }
}

fn operand_name(operand: &Operand) -> String {
    match operand {
        Operand::Literal(value) => value.clone(),
        Operand::Attr(name) => name.clone(),
    }
}
