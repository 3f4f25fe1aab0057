// Copyright (c) 2026 - The scm-inventory Authors
//! Group-name templates
//!
//! A group name is rendered from a small format template: `{}` (or `{0}`)
//! substitutes the seed value for the dimension being grouped (the cluster
//! name, a service name, or a role name), `{field}` substitutes a host
//! attribute by name, and `{{` / `}}` produce literal braces. The default
//! template is the identity `{}`, which renders the seed unchanged.
//!
//! A template that references an attribute the host does not carry fails
//! loudly instead of substituting an empty string.

use thiserror::Error;

use crate::domain::{AttrValue, HostAttributes};

/// Default (identity) group-name template
pub const IDENTITY_TEMPLATE: &str = "{}";

/// A template failed to render
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TemplateError {
    #[error("unknown field '{0}'")]
    UnknownField(String),

    #[error("unclosed '{{' placeholder")]
    UnclosedPlaceholder,

    #[error("unmatched '}}'")]
    UnmatchedBrace,
}

/// A group-name format template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupTemplate {
    raw: String,
}

impl GroupTemplate {
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    /// The identity template, rendering the seed unchanged
    pub fn identity() -> Self {
        Self::new(IDENTITY_TEMPLATE)
    }

    /// The template source string
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Render the template with a seed value and a host's attributes
    pub fn render(&self, seed: &str, attrs: &HostAttributes) -> Result<String, TemplateError> {
        let mut out = String::with_capacity(self.raw.len() + seed.len());
        let mut chars = self.raw.chars().peekable();

        while let Some(ch) = chars.next() {
            match ch {
                '{' => {
                    if chars.peek() == Some(&'{') {
                        chars.next();
                        out.push('{');
                        continue;
                    }
                    let mut name = String::new();
                    loop {
                        match chars.next() {
                            Some('}') => break,
                            Some(c) => name.push(c),
                            None => return Err(TemplateError::UnclosedPlaceholder),
                        }
                    }
                    if name.is_empty() || name == "0" {
                        out.push_str(seed);
                    } else {
                        match attrs.get(&name) {
                            Some(AttrValue::Str(value)) => out.push_str(value),
                            Some(AttrValue::List(items)) => out.push_str(&items.join(",")),
                            None => return Err(TemplateError::UnknownField(name)),
                        }
                    }
                }
                '}' => {
                    if chars.peek() == Some(&'}') {
                        chars.next();
                        out.push('}');
                    } else {
                        return Err(TemplateError::UnmatchedBrace);
                    }
                }
                other => out.push(other),
            }
        }

        Ok(out)
    }
}

impl Default for GroupTemplate {
    fn default() -> Self {
        Self::identity()
    }
}
