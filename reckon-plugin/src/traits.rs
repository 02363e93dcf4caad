//! Operation plugin traits

use reckon_core::{CalcError, Value};
use serde::Serialize;

use crate::EvalContext;

/// Metadata about an operation argument
#[derive(Debug, Clone, Serialize)]
pub struct ArgMeta {
    pub name: &'static str,
    pub typ: &'static str,
    pub description: &'static str,
    pub optional: bool,
}

impl ArgMeta {
    pub const fn required(name: &'static str, typ: &'static str, description: &'static str) -> Self {
        Self {
            name,
            typ,
            description,
            optional: false,
        }
    }

    pub const fn optional(name: &'static str, typ: &'static str, description: &'static str) -> Self {
        Self {
            name,
            typ,
            description,
            optional: true,
        }
    }
}

/// Metadata for an operation plugin
#[derive(Debug, Clone, Serialize)]
pub struct OperationMeta {
    pub name: &'static str,
    pub description: &'static str,
    pub usage: &'static str,
    pub args: &'static [ArgMeta],
    pub returns: &'static str,
    pub examples: &'static [&'static str],
    pub category: &'static str,
    pub related: &'static [&'static str],
}

/// A single calculator operation
///
/// Operations are pure: they read their arguments and the context, and
/// either produce a `Value` or a structured error. Side effects (history,
/// display) belong to the caller.
pub trait OperationPlugin: Send + Sync {
    fn meta(&self) -> OperationMeta;
    fn call(&self, args: &[Value], ctx: &EvalContext) -> Result<Value, CalcError>;
}
