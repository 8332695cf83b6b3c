//! Terminal rendering for quadsolve.
//!
//! Produces the equation template, prompts, root lines and severity
//! banners as plain strings. Writing them out is left to the session
//! console, which keeps everything here free of I/O.
//!
//! Colour is applied with raw ANSI escapes and can be switched off
//! entirely (`--no-color`, `NO_COLOR`, or a non-TTY stdout).

use crate::equation::coefficients::{Coefficients, Slot, Snapshot};
use crate::equation::solver::Roots;
use crate::{QuadraticError, Severity};

/// Terminal (human-readable) formatter
#[derive(Debug, Clone)]
pub struct TerminalFormatter {
    color: bool,
}

impl TerminalFormatter {
    pub fn new(color: bool) -> Self {
        TerminalFormatter { color }
    }

    fn colorize(&self, text: &str, color_code: &str) -> String {
        if self.color {
            format!("\x1b[{}m{}\x1b[0m", color_code, text)
        } else {
            text.to_string()
        }
    }

    /// Foreground/background pair for a severity.
    fn severity_code(severity: Severity) -> &'static str {
        match severity {
            Severity::Error => "97;41",
            Severity::Warning => "30;43",
            Severity::Notification => "30;42",
        }
    }

    /// Render `a * x^2 + b * x + c = 0` with the known coefficients filled in.
    pub fn equation(&self, coefficients: &Coefficients) -> String {
        format!(
            "{} * x^2 {} * x {} = 0",
            format_term(Slot::A, coefficients.get(Slot::A)),
            format_term(Slot::B, coefficients.get(Slot::B)),
            format_term(Slot::C, coefficients.get(Slot::C)),
        )
    }

    pub fn prompt(&self, slot: Slot) -> String {
        format!("{}: ", slot)
    }

    pub fn roots(&self, roots: &Roots) -> String {
        roots.to_string()
    }

    /// Framed message followed by optional `name = value` rows.
    ///
    /// ```text
    /// -----------------------------
    /// Cannot parse the variable "x".
    /// -----------------------------
    /// a = 1
    /// ```
    pub fn banner(&self, message: &str, severity: Severity, snapshot: Option<&Snapshot>) -> String {
        let code = Self::severity_code(severity);
        let separator = "-".repeat(message.chars().count());

        let mut lines = vec![separator.clone(), message.to_string(), separator];
        if let Some(snapshot) = snapshot {
            for (slot, value) in snapshot.entries() {
                lines.push(format!("{} = {}", slot, value));
            }
        }

        let mut output = String::new();
        for line in lines {
            output.push_str(&self.colorize(&line, code));
            output.push('\n');
        }
        output
    }

    /// Banner for an error, using its severity and attached snapshot.
    pub fn error_banner(&self, error: &QuadraticError) -> String {
        self.banner(&error.to_string(), error.severity(), error.snapshot())
    }
}

/// One term of the template. `a` carries only a minus sign; `b` and `c`
/// fold their sign into the joining operator. Unset slots show the symbol.
fn format_term(slot: Slot, value: Option<i32>) -> String {
    match value {
        None if slot.is_leading() => slot.to_string(),
        None => format!("+ {}", slot),
        Some(v) => {
            let sign = match (v < 0, slot.is_leading()) {
                (true, _) => "- ",
                (false, true) => "",
                (false, false) => "+ ",
            };
            format!("{}{}", sign, v.unsigned_abs())
        }
    }
}
