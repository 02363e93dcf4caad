//! Operation registry

use std::collections::HashMap;
use std::fmt::Write as _;
use std::sync::Arc;

use reckon_core::{CalcError, Value};

use crate::{EvalContext, OperationMeta, OperationPlugin};

/// Central operation registry
///
/// Lookup is case-insensitive. Unknown names come back with a
/// "did you mean" suggestion when something similar is registered.
pub struct OperationRegistry {
    operations: HashMap<String, Arc<dyn OperationPlugin>>,
}

impl OperationRegistry {
    pub fn new() -> Self {
        Self {
            operations: HashMap::new(),
        }
    }

    pub fn with_operation<O: OperationPlugin + 'static>(mut self, op: O) -> Self {
        let name = op.meta().name.to_lowercase();
        self.operations.insert(name, Arc::new(op));
        self
    }

    pub fn get_operation(&self, name: &str) -> Option<&dyn OperationPlugin> {
        self.operations.get(&name.to_lowercase()).map(|op| op.as_ref())
    }

    pub fn call_operation(
        &self,
        name: &str,
        args: &[Value],
        ctx: &EvalContext,
    ) -> Result<Value, CalcError> {
        match self.get_operation(name) {
            Some(op) => op.call(args, ctx),
            None => Err(self.unknown_operation(name)),
        }
    }

    /// Render help for one operation, or an index of all of them
    pub fn help(&self, name: Option<&str>) -> Result<String, CalcError> {
        match name {
            Some(n) => self.help_for(n),
            None => Ok(self.general_help()),
        }
    }

    /// All registered metadata, optionally filtered by category
    pub fn list_operations(&self, category: Option<&str>) -> Vec<OperationMeta> {
        let mut metas: Vec<OperationMeta> = self
            .operations
            .values()
            .map(|op| op.meta())
            .filter(|m| category.map_or(true, |c| m.category == c))
            .collect();
        metas.sort_by_key(|m| m.name);
        metas
    }

    fn help_for(&self, name: &str) -> Result<String, CalcError> {
        let meta = self
            .get_operation(name)
            .map(|op| op.meta())
            .ok_or_else(|| self.unknown_operation(name))?;

        let mut out = String::new();
        let _ = writeln!(out, "{} — {}", meta.name, meta.description);
        let _ = writeln!(out, "usage: {}", meta.usage);
        for arg in meta.args {
            let opt = if arg.optional { " (optional)" } else { "" };
            let _ = writeln!(out, "  {}: {}{} — {}", arg.name, arg.typ, opt, arg.description);
        }
        let _ = writeln!(out, "returns: {}", meta.returns);
        for example in meta.examples {
            let _ = writeln!(out, "example: {}", example);
        }
        if !meta.related.is_empty() {
            let _ = writeln!(out, "related: {}", meta.related.join(", "));
        }
        Ok(out)
    }

    fn general_help(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Available operations:");
        for meta in self.list_operations(None) {
            let _ = writeln!(out, "  {:<12} {}", meta.name, meta.description);
        }
        let _ = writeln!(out, "Use help <operation> for details.");
        out
    }

    fn unknown_operation(&self, name: &str) -> CalcError {
        let similar = self.find_similar_operations(name);
        let err = CalcError::undefined_operation(name);
        if similar.is_empty() {
            err
        } else {
            let hints: Vec<&str> = similar.iter().take(3).map(|s| s.as_str()).collect();
            err.with_suggestion(format!("did you mean {}?", hints.join(", ")))
        }
    }

    /// Find operation names similar to the given name (for error hints)
    fn find_similar_operations(&self, name: &str) -> Vec<String> {
        let name_lower = name.to_lowercase();
        let mut matches: Vec<(String, usize)> = self
            .operations
            .keys()
            .filter_map(|candidate| {
                let score = Self::similarity_score(&name_lower, candidate);
                if score > 0 {
                    Some((candidate.clone(), score))
                } else {
                    None
                }
            })
            .collect();

        matches.sort_by(|a, b| b.1.cmp(&a.1));
        matches.into_iter().map(|(n, _)| n).collect()
    }

    /// Calculate similarity score between two names
    fn similarity_score(query: &str, candidate: &str) -> usize {
        let mut score = 0;

        if candidate.starts_with(query) {
            score += 100;
        } else if candidate.contains(query) {
            score += 50;
        } else if query.contains(candidate) {
            score += 30;
        }

        let query_chars: std::collections::HashSet<char> = query.chars().collect();
        let candidate_chars: std::collections::HashSet<char> = candidate.chars().collect();
        let common = query_chars.intersection(&candidate_chars).count();
        score += common * 2;

        let len_diff = (query.len() as i32 - candidate.len() as i32).unsigned_abs() as usize;
        if len_diff < 5 && score > 0 {
            score += 5 - len_diff;
        }

        score
    }
}

impl Default for OperationRegistry {
    fn default() -> Self {
        Self::new()
    }
}
