//! Single-pass scanner for Lox source code.
//!
//! ```
//! use loxscan::{scan, CollectingReporter, TokenType};
//!
//! let mut reporter = CollectingReporter::new();
//! let tokens = scan("print 1 + 2;", &mut reporter);
//!
//! assert_eq!(tokens[0].type_, TokenType::Print);
//! assert_eq!(tokens.last().map(|t| t.type_), Some(TokenType::Eof));
//! assert!(!reporter.had_error());
//! ```

pub mod error;
pub mod keywords;
pub mod scanner;
pub mod token;

pub use error::{CollectingReporter, ConsoleReporter, Diagnostic, Reporter, ScanError};
pub use keywords::{keyword, KEYWORDS};
pub use scanner::{scan, Scanner};
pub use token::{Literal, Token, TokenType};
