use std::cmp::Ordering;
use std::fmt;
use std::io::{self, Write};

/// Define the cause of a diagnostic message
/// Used to provide user options to suppress some specific kinds of warnings
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum DiagnosticCause {
    Divergence, // The two algorithms disagree
    Overflow,   // n! does not fit the integer width
    Inexact,    // An algorithm returned something other than n!
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Warning,
    Error,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Warning => f.write_str("warning"),
            Level::Error => f.write_str("error"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Algorithm {
    Recursive,
    Iterative,
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Recursive => f.write_str("recursive"),
            Algorithm::Iterative => f.write_str("iterative"),
        }
    }
}

/// A finding about one input of the checked range
#[derive(Clone, Debug, PartialEq)]
pub struct Diagnostic {
    pub input: i128,
    pub cause: DiagnosticCause,
    pub level: Level,
    pub message: String,
}

impl Diagnostic {
    pub fn new(input: i128, cause: DiagnosticCause, message: String) -> Self {
        Self {
            input,
            cause,
            level: Level::Warning,
            message,
        }
    }

    pub fn compare(x: &Diagnostic, y: &Diagnostic) -> Ordering {
        x.input.cmp(&y.input).then(x.cause.cmp(&y.cause))
    }

    pub fn emit<W: Write>(&self, err: &mut W) -> io::Result<()> {
        debug!("Emitting {:?} diagnostic for input {}", self.cause, self.input);
        writeln!(err, "{}", self)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: input {}: {}", self.level, self.input, self.message)
    }
}
