use std::io::{self, Write};

use thiserror::Error;

/// Problems found while scanning. None of them stop the scan.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ScanError {
    #[error("Unexpected character")]
    UnexpectedCharacter {
        character: char,
        line: usize,
    },
    #[error("Unterminated string.")]
    UnterminatedString {
        line: usize,
    },
    #[error("Unterminated block comment.")]
    UnterminatedBlockComment {
        line: usize,
    },
}

impl ScanError {
    /// The line the error was detected on.
    pub fn line(&self) -> usize {
        match self {
            ScanError::UnexpectedCharacter { line, .. }
            | ScanError::UnterminatedString { line }
            | ScanError::UnterminatedBlockComment { line } => *line,
        }
    }
}

/// Receives diagnostics from the scanner.
///
/// Implementations must not panic or otherwise fail back into the caller;
/// the scanner keeps going after every report.
pub trait Reporter {
    fn report(&mut self, line: usize, message: &str);
}

/// Writes `[line N] Error: message` to stderr and remembers that it did so.
#[derive(Debug, Default)]
pub struct ConsoleReporter {
    had_error: bool,
}

impl ConsoleReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn had_error(&self) -> bool {
        self.had_error
    }

    /// Clears the error flag, e.g. between prompt lines.
    pub fn reset(&mut self) {
        self.had_error = false;
    }
}

impl Reporter for ConsoleReporter {
    fn report(&mut self, line: usize, message: &str) {
        // A closed stderr is not worth failing the scan over.
        let _ = writeln!(io::stderr(), "[line {}] Error: {}", line, message);
        self.had_error = true;
    }
}

/// A reported diagnostic, kept as a value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    pub line: usize,
    pub message: String,
}

/// Stores every report in order instead of printing it.
#[derive(Debug, Default)]
pub struct CollectingReporter {
    pub diagnostics: Vec<Diagnostic>,
}

impl CollectingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn had_error(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}

impl Reporter for CollectingReporter {
    fn report(&mut self, line: usize, message: &str) {
        self.diagnostics.push(Diagnostic {
            line,
            message: message.to_owned(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_match_reported_text() {
        let unexpected = ScanError::UnexpectedCharacter { character: '@', line: 4 };
        assert_eq!(unexpected.to_string(), "Unexpected character");
        assert_eq!(unexpected.line(), 4);

        assert_eq!(ScanError::UnterminatedString { line: 1 }.to_string(), "Unterminated string.");
        assert_eq!(
            ScanError::UnterminatedBlockComment { line: 9 }.to_string(),
            "Unterminated block comment."
        );
        assert_eq!(ScanError::UnterminatedBlockComment { line: 9 }.line(), 9);
    }

    #[test]
    fn collecting_reporter_keeps_order() {
        let mut reporter = CollectingReporter::new();
        assert!(!reporter.had_error());

        reporter.report(2, "first");
        reporter.report(1, "second");

        assert!(reporter.had_error());
        assert_eq!(
            reporter.diagnostics,
            vec![
                Diagnostic { line: 2, message: "first".into() },
                Diagnostic { line: 1, message: "second".into() },
            ]
        );
    }

    #[test]
    fn console_reporter_flag_resets() {
        let mut reporter = ConsoleReporter::new();
        assert!(!reporter.had_error());

        reporter.report(1, "Unexpected character");
        assert!(reporter.had_error());

        reporter.reset();
        assert!(!reporter.had_error());
    }
}
