//! Evaluation context
//!
//! Session settings owned by the front end and read by operations: the
//! decimal display toggle, the matrix size ceiling, and named bindings.

use std::collections::HashMap;

use reckon_core::Value;

/// Default ceiling on matrix dimensions
///
/// The recursive determinant is factorial-time; the front end keeps input
/// sizes small enough for it to stay instant.
pub const DEFAULT_MAX_DIM: usize = 8;

/// Evaluation context passed to operations
#[derive(Debug, Clone)]
pub struct EvalContext {
    pub show_decimals: bool,
    pub max_dim: usize,
    pub variables: HashMap<String, Value>,
}

impl EvalContext {
    pub fn new() -> Self {
        Self {
            show_decimals: true,
            max_dim: DEFAULT_MAX_DIM,
            variables: HashMap::new(),
        }
    }

    pub fn with_show_decimals(mut self, show_decimals: bool) -> Self {
        self.show_decimals = show_decimals;
        self
    }

    pub fn with_max_dim(mut self, max_dim: usize) -> Self {
        self.max_dim = max_dim.max(1);
        self
    }

    /// Look up a named binding
    pub fn get_variable(&self, name: &str) -> Option<&Value> {
        self.variables.get(name)
    }

    /// Create or replace a named binding
    pub fn set_variable(&mut self, name: impl Into<String>, value: Value) {
        self.variables.insert(name.into(), value);
    }
}

impl Default for EvalContext {
    fn default() -> Self {
        Self::new()
    }
}
