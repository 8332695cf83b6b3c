//! Scripted session runner and broken I/O doubles.

use std::io::{self, Cursor, Write};

use quadsolve::{run, QuadraticError, Roots, SessionConfig};

/// A session fed from a fixed list of input lines.
#[derive(Debug, Clone)]
pub struct ScriptedSession {
    pub lines: Vec<String>,
    pub config: SessionConfig,
}

impl ScriptedSession {
    /// Plain output: no colour, no equation redraw.
    pub fn new(lines: &[&str]) -> Self {
        ScriptedSession {
            lines: lines.iter().map(|s| s.to_string()).collect(),
            config: SessionConfig {
                color: false,
                redraw_equation: false,
            },
        }
    }

    pub fn with_redraw(mut self) -> Self {
        self.config.redraw_equation = true;
        self
    }

    pub fn with_color(mut self) -> Self {
        self.config.color = true;
        self
    }

    fn input(&self) -> Cursor<Vec<u8>> {
        let mut text = String::new();
        for line in &self.lines {
            text.push_str(line);
            text.push('\n');
        }
        Cursor::new(text.into_bytes())
    }

    /// Run the session and return its result together with everything
    /// written to the console.
    pub fn run(&self) -> (Result<Roots, QuadraticError>, String) {
        let mut output = Vec::new();
        let result = run(self.config.clone(), self.input(), &mut output);
        let text = String::from_utf8(output).expect("console output is UTF-8");
        (result, text)
    }
}

/// Expected uncoloured banner for `message` followed by `rows`.
pub fn plain_banner(message: &str, rows: &[&str]) -> String {
    let separator = "-".repeat(message.chars().count());
    let mut text = format!("{}\n{}\n{}\n", separator, message, separator);
    for row in rows {
        text.push_str(row);
        text.push('\n');
    }
    text
}

/// Writer that fails every operation.
#[derive(Debug, Default)]
pub struct FailingWriter;

impl Write for FailingWriter {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "stdout closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "stdout closed"))
    }
}
