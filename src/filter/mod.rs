// Copyright (c) 2026 - The scm-inventory Authors
//! Host filter expressions
//!
//! A filter is a small boolean expression over the named attributes of a
//! host, compiled once per run and evaluated per host. The language is
//! deliberately closed: string literals, attribute lookup, `==`/`!=`,
//! `in`/`not in`/`contains` membership against list-valued attributes,
//! and `and`/`or`/`not`. The expression string comes from external
//! configuration, so the evaluator has no access to the filesystem,
//! environment, or anything beyond the supplied attribute bag.
//!
//! # Example
//!
//! ```rust
//! use scm_inventory::filter::FilterPredicate;
//! # use scm_inventory::domain::HostAttributes;
//!
//! let pred = FilterPredicate::compile(
//!     "cluster_name == 'prod' and 'HDFS' in service_names",
//! )?;
//! # let attrs = HostAttributes {
//! #     host_id: "id".into(), host_name: "h".into(), ip_address: "1.2.3.4".into(),
//! #     cluster_name: "prod".into(),
//! #     role_names: vec!["HDFS-DATANODE".into()], service_names: vec!["HDFS".into()],
//! # };
//! assert!(pred.matches(&attrs)?);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod ast;
mod eval;
mod lexer;
mod parser;

pub use ast::{CmpOp, Expr, Operand};
pub use eval::FilterError;
pub use parser::FilterParseError;

use crate::domain::HostAttributes;

/// A compiled host filter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterPredicate {
    expr: Expr,
}

impl FilterPredicate {
    /// Compile a filter expression
    ///
    /// Fails on an empty or syntactically invalid expression. A caller
    /// wanting "no filter" should carry `None` instead of compiling an
    /// empty string.
    pub fn compile(source: &str) -> Result<Self, FilterParseError> {
        let expr = parser::parse_expr(source)?;
        Ok(Self { expr })
    }

    /// Evaluate the filter against one host
    pub fn matches(&self, attrs: &HostAttributes) -> Result<bool, FilterError> {
        eval::eval(&self.expr, attrs)
    }
}
