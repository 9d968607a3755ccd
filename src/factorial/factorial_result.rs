use failure::Error;
use failure::Fail;
use std::time::Duration;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Fail, PartialEq)]
pub enum FactorialError {
    #[fail(display = "{}! does not fit in a {}-bit integer", input, bits)]
    Overflow { input: i128, bits: u32 },
    #[fail(display = "Input {} is out of range for a {}-bit integer", input, bits)]
    InputOutOfRange { input: i128, bits: u32 },
    #[fail(display = "Unknown argument: {}", _0)]
    UnknownArgument(String),
    #[fail(display = "Empty range: {} is greater than {}", from, to)]
    InvalidRange { from: i128, to: i128 },
    #[fail(display = "{} diagnostics reported and warnings are denied", _0)]
    DeniedWarnings(usize),
}

/// Produced by a completed run of the equivalence checker
pub struct CheckInfo {
    pub check_time: Duration,
    pub inputs_checked: usize,
    pub diagnostics_emitted: usize,
}
