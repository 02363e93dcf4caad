//! Reckon CLI
//!
//! Line-oriented front end for the matrix calculator. It stands in for
//! the browser view: it owns the display preference, the size ceiling,
//! the named bindings, and the session history, and calls the engine one
//! operation per line.
//!
//! Commands:
//! - `A = 1 2; 3 4`      bind a matrix (rows split on ';' or newline)
//! - `add A B`           also: subtract, multiply (aliases: sub, mul)
//! - `transpose A`
//! - `det A`             prints the value and the worked derivation
//! - `solve A b`         b is a 1×n or n×1 binding
//! - `template 3 3`      print an all-zero starting grid
//! - `decimals on|off`   toggle two-digit decimal display
//! - `history`           also: `history clear`, `history json`
//! - `help [operation]`
//! - `quit`

use std::env;
use std::io::{self, BufRead, IsTerminal, Write};

use reckon_core::{Matrix, Value};
use reckon_matrix::{
    determinant, format_matrix, format_value, load_matrix_library, parse_matrix, template,
    FormatOptions, History,
};
use reckon_plugin::{EvalContext, OperationRegistry, DEFAULT_MAX_DIM};
use tracing::{debug, info, warn};

fn main() -> io::Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let show_decimals = !args.iter().any(|a| a == "--no-decimals");
    let quiet = args.iter().any(|a| a == "--quiet");

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let max_dim = max_dim_from_env();
    info!(max_dim, show_decimals, "starting session");

    let mut session = Session::new(show_decimals, max_dim);
    let interactive = io::stdin().is_terminal() && !quiet;

    if interactive {
        println!("reckon matrix calculator — 'help' lists operations, 'quit' leaves");
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut line = String::new();
    loop {
        if interactive {
            print!("reckon> ");
            stdout.flush()?;
        }
        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        match session.eval_line(&line) {
            Outcome::Quit => break,
            Outcome::Reply(reply) => {
                if !reply.is_empty() {
                    println!("{reply}");
                }
            }
        }
    }

    Ok(())
}

/// Session ceiling on matrix dimensions, overridable via environment
fn max_dim_from_env() -> usize {
    env::var("RECKON_MAX_DIM")
        .ok()
        .and_then(|v| v.parse::<usize>().ok())
        .map(|n| n.max(1))
        .unwrap_or(DEFAULT_MAX_DIM)
}

enum Outcome {
    Reply(String),
    Quit,
}

struct Session {
    registry: OperationRegistry,
    ctx: EvalContext,
    history: History,
}

impl Session {
    fn new(show_decimals: bool, max_dim: usize) -> Self {
        Self {
            registry: load_matrix_library(OperationRegistry::new()),
            ctx: EvalContext::new()
                .with_show_decimals(show_decimals)
                .with_max_dim(max_dim),
            history: History::new(),
        }
    }

    fn format_options(&self) -> FormatOptions {
        FormatOptions {
            show_decimals: self.ctx.show_decimals,
        }
    }

    fn eval_line(&mut self, line: &str) -> Outcome {
        let line = line.trim();
        if line.is_empty() {
            return Outcome::Reply(String::new());
        }

        if let Some((name, text)) = split_assignment(line) {
            return self.assign(name, text);
        }

        let mut parts = line.split_whitespace();
        let command = match parts.next() {
            Some(c) => c.to_lowercase(),
            None => return Outcome::Reply(String::new()),
        };
        let operands: Vec<&str> = parts.collect();

        match command.as_str() {
            "quit" | "exit" => Outcome::Quit,
            "help" => self.help(operands.first().copied()),
            "decimals" => self.toggle_decimals(operands.first().copied()),
            "history" => self.show_history(operands.first().copied()),
            "template" => self.print_template(&operands),
            _ => self.run_operation(&command, &operands),
        }
    }

    fn assign(&mut self, name: &str, text: &str) -> Outcome {
        match parse_matrix(text) {
            Ok(m) => {
                let max = self.ctx.max_dim;
                if m.rows() > max || m.cols() > max {
                    return Outcome::Reply(format!(
                        "matrix exceeds the {max}×{max} input ceiling"
                    ));
                }
                let shape = format!("{}×{}", m.rows(), m.cols());
                self.ctx.set_variable(name, Value::Matrix(m));
                Outcome::Reply(format!("{name}: {shape} matrix"))
            }
            Err(e) => Outcome::Reply(format!("parse error: {e}")),
        }
    }

    fn run_operation(&mut self, command: &str, operands: &[&str]) -> Outcome {
        let name = canonical(command);

        let mut args = Vec::with_capacity(operands.len());
        for operand in operands {
            match self.ctx.get_variable(operand) {
                Some(value) => args.push(value.clone()),
                None => return Outcome::Reply(format!("unknown variable '{operand}'")),
            }
        }

        debug!(operation = name, args = args.len(), "dispatching");
        match self.registry.call_operation(name, &args, &self.ctx) {
            Ok(result) => {
                self.record(name, &args, &result);
                let mut reply = format_value(&result, &self.format_options());
                if name == "determinant" {
                    if let Some(Value::Matrix(a)) = args.first() {
                        if let Ok(det) = determinant(a) {
                            reply.push_str("\n\nDetails (Determinant):\n");
                            reply.push_str(&det.steps);
                        }
                    }
                }
                Outcome::Reply(reply)
            }
            Err(e) => {
                warn!(operation = name, code = e.code(), "operation failed");
                let mut reply = format!("error: {e}");
                if let reckon_core::CalcError::UndefinedOperation {
                    suggestion: Some(hint),
                    ..
                } = &e
                {
                    reply.push_str(&format!(" ({hint})"));
                }
                Outcome::Reply(reply)
            }
        }
    }

    fn record(&mut self, name: &str, args: &[Value], result: &Value) {
        let operand_a = match args.first() {
            Some(Value::Matrix(a)) => a.clone(),
            _ => return,
        };
        let operand_b = match name {
            "add" | "subtract" | "multiply" => match args.get(1) {
                Some(Value::Matrix(b)) => Some(b.clone()),
                _ => None,
            },
            // Solve stores b the way the history pane shows it: as a column
            "solve" => args.get(1).and_then(rhs_as_column),
            _ => None,
        };
        self.history
            .record(op_label(name), operand_a, operand_b, result.clone());
    }

    fn help(&self, name: Option<&str>) -> Outcome {
        match self.registry.help(name) {
            Ok(text) => Outcome::Reply(text.trim_end().to_string()),
            Err(e) => Outcome::Reply(format!("error: {e}")),
        }
    }

    fn toggle_decimals(&mut self, setting: Option<&str>) -> Outcome {
        match setting {
            Some("on") => {
                self.ctx.show_decimals = true;
                Outcome::Reply("decimals on".to_string())
            }
            Some("off") => {
                self.ctx.show_decimals = false;
                Outcome::Reply("decimals off".to_string())
            }
            _ => Outcome::Reply("usage: decimals on|off".to_string()),
        }
    }

    fn show_history(&mut self, subcommand: Option<&str>) -> Outcome {
        match subcommand {
            Some("clear") => {
                self.history.clear();
                Outcome::Reply("history cleared".to_string())
            }
            Some("json") => match serde_json::to_string_pretty(self.history.entries()) {
                Ok(json) => Outcome::Reply(json),
                Err(e) => Outcome::Reply(format!("error: {e}")),
            },
            Some(other) => Outcome::Reply(format!("unknown history subcommand '{other}'")),
            None => {
                if self.history.is_empty() {
                    return Outcome::Reply("history is empty".to_string());
                }
                let opts = self.format_options();
                let mut out = String::new();
                for entry in self.history.entries() {
                    out.push_str(&format!("[{}] {}\n", entry.id, entry.operation));
                    out.push_str(&format!(
                        "  A: {}\n",
                        one_line(&format_matrix(&entry.operand_a, &opts))
                    ));
                    if let Some(b) = &entry.operand_b {
                        out.push_str(&format!("  B: {}\n", one_line(&format_matrix(b, &opts))));
                    }
                    out.push_str(&format!(
                        "  result: {}\n",
                        one_line(&format_value(&entry.result, &opts))
                    ));
                }
                Outcome::Reply(out.trim_end().to_string())
            }
        }
    }

    fn print_template(&self, operands: &[&str]) -> Outcome {
        let dims: Vec<usize> = operands.iter().filter_map(|s| s.parse().ok()).collect();
        match dims.as_slice() {
            [rows, cols] => {
                Outcome::Reply(format_matrix(&template(*rows, *cols), &self.format_options()))
            }
            _ => Outcome::Reply("usage: template <rows> <cols>".to_string()),
        }
    }
}

/// `name = matrix text`, where name is a bare identifier
fn split_assignment(line: &str) -> Option<(&str, &str)> {
    let (lhs, rhs) = line.split_once('=')?;
    let name = lhs.trim();
    if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return None;
    }
    Some((name, rhs))
}

fn canonical(command: &str) -> &str {
    match command {
        "sub" => "subtract",
        "mul" => "multiply",
        "det" => "determinant",
        other => other,
    }
}

/// History labels follow the calculator page buttons
fn op_label(name: &str) -> &str {
    match name {
        "add" => "A + B",
        "subtract" => "A − B",
        "multiply" => "A × B",
        "transpose" => "Transpose(A)",
        "determinant" => "det(A)",
        "solve" => "Solve (Gaussian)",
        other => other,
    }
}

/// Store the solve right-hand side as an n×1 column matrix
fn rhs_as_column(value: &Value) -> Option<Matrix> {
    match value {
        Value::Vector(v) => Some(v.to_column_matrix()),
        Value::Matrix(m) => m
            .to_vector()
            .map(|v| v.to_column_matrix())
            .or_else(|| Some(m.clone())),
        Value::Scalar(_) => None,
    }
}

fn one_line(formatted: &str) -> String {
    formatted.replace('\n', " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reply(outcome: Outcome) -> String {
        match outcome {
            Outcome::Reply(s) => s,
            Outcome::Quit => panic!("unexpected quit"),
        }
    }

    #[test]
    fn test_assign_and_add() {
        let mut session = Session::new(true, DEFAULT_MAX_DIM);
        reply(session.eval_line("a = 1 2; 3 4"));
        reply(session.eval_line("b = 5 6; 7 8"));

        let out = reply(session.eval_line("add a b"));
        assert_eq!(out, "6 8;\n10 12");
        assert_eq!(session.history.len(), 1);
        assert_eq!(session.history.entries()[0].operation, "A + B");
    }

    #[test]
    fn test_det_prints_details() {
        let mut session = Session::new(true, DEFAULT_MAX_DIM);
        reply(session.eval_line("a = 1 2; 3 4"));

        let out = reply(session.eval_line("det a"));
        assert!(out.starts_with("-2"));
        assert!(out.contains("Details (Determinant):"));
        assert!(out.contains("det(A) = a·d − b·c"));
    }

    #[test]
    fn test_solve_records_column_rhs() {
        let mut session = Session::new(true, DEFAULT_MAX_DIM);
        reply(session.eval_line("a = 2 1; 1 3"));
        reply(session.eval_line("b = 3 5"));

        let out = reply(session.eval_line("solve a b"));
        assert_eq!(out, "0.80 1.40");

        let entry = &session.history.entries()[0];
        let b = entry.operand_b.as_ref().unwrap();
        assert_eq!((b.rows(), b.cols()), (2, 1));
    }

    #[test]
    fn test_failed_operation_adds_no_history() {
        let mut session = Session::new(true, DEFAULT_MAX_DIM);
        reply(session.eval_line("a = 1 2; 3 4"));
        reply(session.eval_line("b = 1 2 3; 4 5 6"));

        let out = reply(session.eval_line("add a b"));
        assert!(out.starts_with("error:"));
        assert!(session.history.is_empty());
    }

    #[test]
    fn test_assignment_respects_ceiling() {
        let mut session = Session::new(true, 2);
        let out = reply(session.eval_line("a = 1 2 3; 4 5 6"));
        assert!(out.contains("ceiling"));
        assert!(session.ctx.get_variable("a").is_none());
    }

    #[test]
    fn test_decimals_toggle_changes_formatting() {
        let mut session = Session::new(true, DEFAULT_MAX_DIM);
        reply(session.eval_line("a = 2 1; 1 3"));
        reply(session.eval_line("b = 3 5"));

        reply(session.eval_line("decimals off"));
        let out = reply(session.eval_line("solve a b"));
        assert_eq!(out, "0.8 1.4");
    }

    #[test]
    fn test_unknown_operation_suggests() {
        let mut session = Session::new(true, DEFAULT_MAX_DIM);
        let out = reply(session.eval_line("addd"));
        assert!(out.contains("unknown operation"));
        assert!(out.contains("add"));
    }

    #[test]
    fn test_history_clear() {
        let mut session = Session::new(true, DEFAULT_MAX_DIM);
        reply(session.eval_line("a = 1 2; 3 4"));
        reply(session.eval_line("det a"));
        assert_eq!(session.history.len(), 1);

        reply(session.eval_line("history clear"));
        assert!(session.history.is_empty());
    }

    #[test]
    fn test_template_command() {
        let mut session = Session::new(true, DEFAULT_MAX_DIM);
        let out = reply(session.eval_line("template 2 3"));
        assert_eq!(out, "0 0 0;\n0 0 0");
    }

    #[test]
    fn test_quit() {
        let mut session = Session::new(true, DEFAULT_MAX_DIM);
        assert!(matches!(session.eval_line("quit"), Outcome::Quit));
    }
}
