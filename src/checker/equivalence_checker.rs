use crate::checker::diagnostics::{Algorithm, Diagnostic, DiagnosticCause, Level};
use crate::checker::exact::exact_factorial;
use crate::factorial::factorial_result::{CheckInfo, FactorialError, Result};
use crate::factorial::integer::{FixedWidth, OverflowPolicy};
use crate::factorial::iterative::iterative_fact_with;
use crate::factorial::recursive::recursive_fact_with;
use crate::option::FactorialOption;
use std::io::Write;
use std::time::Instant;

/// Both algorithms applied to one input. `None` marks an overflow error.
#[derive(Clone, Debug, PartialEq)]
pub struct Evaluation<T> {
    pub input: T,
    pub recursive: Option<T>,
    pub iterative: Option<T>,
    /// `input!` when it fits in an `i128`
    pub exact: Option<i128>,
}

/// Runs both factorial algorithms over a range of inputs and reports where
/// they disagree with each other or with the mathematical factorial
pub struct EquivalenceChecker<'a, T> {
    pub options: &'a FactorialOption,
    pub from: T,
    pub to: T,
    pub evaluations: Vec<Evaluation<T>>,
    pub buffered_diagnostics: Vec<Diagnostic>,
}

impl<'a, T: FixedWidth> EquivalenceChecker<'a, T> {
    pub fn new(options: &'a FactorialOption) -> Result<Self> {
        let (from, to) = (options.check_from, options.check_to);
        if from > to {
            return Err(FactorialError::InvalidRange { from, to }.into());
        }
        Ok(Self {
            options,
            from: Self::bound(from)?,
            to: Self::bound(to)?,
            evaluations: Vec::new(),
            buffered_diagnostics: Vec::new(),
        })
    }

    fn bound(value: i128) -> Result<T> {
        T::narrow(value, OverflowPolicy::Checked).ok_or_else(|| {
            FactorialError::InputOutOfRange {
                input: value,
                bits: T::BITS,
            }
            .into()
        })
    }

    pub fn run(&mut self) -> Result<CheckInfo> {
        let timer = Instant::now();

        info!("====== Equivalence Checker starts ======");
        info!("Integer width: {} bits", T::BITS);
        info!("Overflow policy: {:?}", self.options.overflow);
        info!("Range: {} ..= {}", self.from, self.to);

        let mut diagnostics = Vec::new();
        for n in self.from.to_i128()..=self.to.to_i128() {
            let x = Self::bound(n)?;
            let evaluation = self.evaluate(x);
            debug!("Evaluation: {:?}", evaluation);
            diagnostics.extend(Self::check(&evaluation));
            self.evaluations.push(evaluation);
        }
        self.buffered_diagnostics = self.filter_diagnostics(diagnostics);

        info!("====== Equivalence Checker ends ======");

        Ok(CheckInfo {
            check_time: timer.elapsed(),
            inputs_checked: self.evaluations.len(),
            diagnostics_emitted: self.buffered_diagnostics.len(),
        })
    }

    pub fn evaluate(&self, x: T) -> Evaluation<T> {
        let policy = self.options.overflow;
        Evaluation {
            input: x,
            recursive: recursive_fact_with(x, policy).ok(),
            iterative: iterative_fact_with(x, policy).ok(),
            exact: exact_factorial(x.to_i128()),
        }
    }

    /// Compare the algorithms with each other, then with `n!`
    pub fn check(evaluation: &Evaluation<T>) -> Vec<Diagnostic> {
        let input = evaluation.input.to_i128();
        let mut res = Vec::new();

        if evaluation.recursive != evaluation.iterative {
            res.push(Diagnostic::new(
                input,
                DiagnosticCause::Divergence,
                format!(
                    "recursive gives {} but iterative gives {}",
                    show(evaluation.recursive),
                    show(evaluation.iterative)
                ),
            ));
        }

        // Negative inputs have no factorial to compare with
        if input < 0 {
            return res;
        }

        let expected = evaluation
            .exact
            .and_then(|exact| T::narrow(exact, OverflowPolicy::Checked));
        match expected {
            None => res.push(Diagnostic::new(
                input,
                DiagnosticCause::Overflow,
                format!("{}! does not fit in a {}-bit integer", input, T::BITS),
            )),
            Some(expected) => {
                let results = [
                    (Algorithm::Recursive, evaluation.recursive),
                    (Algorithm::Iterative, evaluation.iterative),
                ];
                for (algorithm, result) in results.iter() {
                    if *result != Some(expected) {
                        res.push(Diagnostic::new(
                            input,
                            DiagnosticCause::Inexact,
                            format!(
                                "{} gives {} but {}! is {}",
                                algorithm,
                                show(*result),
                                input,
                                expected
                            ),
                        ));
                    }
                }
            }
        }
        res
    }

    fn filter_diagnostics(&self, mut diagnostics: Vec<Diagnostic>) -> Vec<Diagnostic> {
        diagnostics.sort_by(Diagnostic::compare);

        // If `deny_warnings` flag is set, change all diagnoses' level to `error`
        if self.options.deny_warnings {
            for diag in &mut diagnostics {
                diag.level = Level::Error;
            }
        }

        // According to `suppress_warnings` flag, filter out warnings that users want to ignore
        match &self.options.suppressed_warnings {
            Some(suppressed_warnings) => diagnostics
                .into_iter()
                .filter(|diag| !suppressed_warnings.contains(&diag.cause))
                .collect(),
            None => diagnostics,
        }
    }

    pub fn emit_diagnostics<W: Write>(&self, err: &mut W) -> Result<()> {
        for diag in &self.buffered_diagnostics {
            diag.emit(err)?;
        }
        Ok(())
    }
}

fn show<T: FixedWidth>(result: Option<T>) -> String {
    match result {
        Some(value) => value.to_string(),
        None => String::from("overflow"),
    }
}
