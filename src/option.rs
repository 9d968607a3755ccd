use crate::checker::diagnostics::DiagnosticCause;
use crate::factorial::factorial_result::{FactorialError, Result};
use crate::factorial::integer::{IntegerWidth, OverflowPolicy};

#[derive(Clone, Debug, PartialEq)]
pub struct FactorialOption {
    pub input: i128,
    pub width: IntegerWidth,
    pub overflow: OverflowPolicy,
    pub check: bool,
    pub check_from: i128,
    pub check_to: i128,
    pub deny_warnings: bool,
    pub suppressed_warnings: Option<Vec<DiagnosticCause>>,
    pub show_help: bool,
    pub show_version: bool,
}

impl Default for FactorialOption {
    fn default() -> Self {
        Self {
            input: 5,
            width: IntegerWidth::W32,
            overflow: OverflowPolicy::Wrapping,
            check: false,
            check_from: -3,
            check_to: 13,
            deny_warnings: false,
            suppressed_warnings: None,
            show_help: false,
            show_version: false,
        }
    }
}

impl FactorialOption {
    /// Parse the options out of `args`, failing on anything left unrecognised
    pub fn parse(mut args: Vec<String>) -> Result<Self> {
        let res = Self::from_args(&mut args);
        match args.into_iter().next() {
            Some(arg) => Err(FactorialError::UnknownArgument(arg).into()),
            None => Ok(res),
        }
    }

    /// Remove every recognised option from `args`
    pub fn from_args(args: &mut Vec<String>) -> Self {
        let mut indices_to_remove = vec![];
        let mut res = Self::default();
        for (i, arg) in args.iter().enumerate() {
            if !arg.starts_with("--") {
                continue;
            }
            let value = args.get(i + 1);
            let mut takes_value = true;
            match &arg[2..] {
                "check" => {
                    res.check = true;
                    takes_value = false;
                }
                "deny_warnings" => {
                    res.deny_warnings = true;
                    takes_value = false;
                }
                "help" => {
                    res.show_help = true;
                    takes_value = false;
                }
                "version" => {
                    res.show_version = true;
                    takes_value = false;
                }
                "input" => {
                    if let Some(input) = value.and_then(|v| v.parse().ok()) {
                        res.input = input;
                    } else {
                        warn!("Invalid input, use 5 as default");
                    }
                }
                "width" => {
                    if let Some(width) = value
                        .and_then(|v| v.parse().ok())
                        .and_then(IntegerWidth::from_bits)
                    {
                        res.width = width;
                    } else {
                        warn!("Unknown integer width, use 32 as default");
                    }
                }
                "overflow" => {
                    if let Some(overflow) = value.and_then(|v| Self::get_overflow_policy(v)) {
                        res.overflow = overflow;
                    } else {
                        warn!("Unknown overflow policy, use wrapping as default");
                    }
                }
                "check_from" => {
                    if let Some(check_from) = value.and_then(|v| v.parse().ok()) {
                        res.check_from = check_from;
                    } else {
                        warn!("Invalid start of the checked range, use -3 as default");
                    }
                }
                "check_to" => {
                    if let Some(check_to) = value.and_then(|v| v.parse().ok()) {
                        res.check_to = check_to;
                    } else {
                        warn!("Invalid end of the checked range, use 13 as default");
                    }
                }
                "suppress_warnings" => {
                    if let Some(suppressed_warnings) =
                        value.and_then(|v| Self::get_suppressed_warnings(v))
                    {
                        res.suppressed_warnings = Some(suppressed_warnings);
                    } else {
                        warn!("Invalid suppressed warning types, will not suppress any warnings by default");
                    }
                }
                _ => continue,
            }
            indices_to_remove.push(i);
            // A following flag is never consumed as a value
            if takes_value && value.map_or(false, |v| !v.starts_with("--")) {
                indices_to_remove.push(i + 1);
            }
        }
        indices_to_remove.reverse();
        Self::remove_multiple(args, &indices_to_remove);
        res
    }

    fn get_suppressed_warnings(arg: &str) -> Option<Vec<DiagnosticCause>> {
        let mut res = Vec::new();
        for ch in arg.chars() {
            match ch {
                'd' => res.push(DiagnosticCause::Divergence), // Algorithms disagree
                'o' => res.push(DiagnosticCause::Overflow),   // n! does not fit
                'i' => res.push(DiagnosticCause::Inexact),    // Result is not n!
                _ => return None,                             // Invalid flags
            }
        }
        if res.is_empty() {
            None
        } else {
            Some(res)
        }
    }

    fn get_overflow_policy(arg: &str) -> Option<OverflowPolicy> {
        match arg {
            "wrapping" => Some(OverflowPolicy::Wrapping),
            "saturating" => Some(OverflowPolicy::Saturating),
            "checked" => Some(OverflowPolicy::Checked),
            _ => None,
        }
    }

    // Indices must be in descending order, so every removal leaves the rest valid
    fn remove_multiple<T>(source: &mut Vec<T>, indices_to_remove: &[usize]) -> Vec<T> {
        indices_to_remove
            .iter()
            .copied()
            .map(|i| source.remove(i))
            .collect()
    }
}
