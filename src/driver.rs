use crate::checker::equivalence_checker::EquivalenceChecker;
use crate::factorial::factorial_result::{FactorialError, Result};
use crate::factorial::integer::{FixedWidth, IntegerWidth};
use crate::factorial::iterative::iterative_fact_with;
use crate::factorial::recursive::recursive_fact_with;
use crate::option::FactorialOption;
use crate::utils;
use std::io::Write;

/// Exit status code used for a successful run and help output.
pub const EXIT_SUCCESS: i32 = 0;

/// Exit status code used for overflow errors, denied warnings and invalid flags.
pub const EXIT_FAILURE: i32 = 1;

pub const HELP: &str = r#"Computes a factorial recursively and iteratively

Usage:
    factorial [options]

Options:
    --input <n>                  Input of both algorithms (default 5)
    --width <8|16|32|64|128>     Integer width in bits (default 32)
    --overflow <policy>          wrapping, saturating or checked (default wrapping)
    --check                      Compare both algorithms over a range instead
    --check_from <n>             First input of the checked range (default -3)
    --check_to <n>               Last input of the checked range (default 13)
    --deny_warnings              Fail when the checker reports anything
    --suppress_warnings <dio>    Ignore divergence, overflow or inexact reports
    --help                       Show this message
    --version                    Show the version
"#;

pub fn version() -> String {
    format!("factorial {}", env!("CARGO_PKG_VERSION"))
}

/// Run the computation `options` selects, writing results to `out` and
/// diagnostics to `err`
pub fn run<O: Write, E: Write>(options: &FactorialOption, out: &mut O, err: &mut E) -> Result<()> {
    if options.show_help {
        write!(out, "{}", HELP)?;
        return Ok(());
    }
    if options.show_version {
        writeln!(out, "{}", version())?;
        return Ok(());
    }

    match options.width {
        IntegerWidth::W8 => run_with::<i8, O, E>(options, out, err),
        IntegerWidth::W16 => run_with::<i16, O, E>(options, out, err),
        IntegerWidth::W32 => run_with::<i32, O, E>(options, out, err),
        IntegerWidth::W64 => run_with::<i64, O, E>(options, out, err),
        IntegerWidth::W128 => run_with::<i128, O, E>(options, out, err),
    }
}

fn run_with<T: FixedWidth, O: Write, E: Write>(
    options: &FactorialOption,
    out: &mut O,
    err: &mut E,
) -> Result<()> {
    if options.check {
        check::<T, O, E>(options, out, err)
    } else {
        compute::<T, O>(options, out)
    }
}

fn compute<T: FixedWidth, O: Write>(options: &FactorialOption, out: &mut O) -> Result<()> {
    let x = T::narrow(options.input, options.overflow).ok_or_else(|| {
        FactorialError::InputOutOfRange {
            input: options.input,
            bits: T::BITS,
        }
    })?;
    if x.to_i128() != options.input {
        warn!("Input {} narrowed to {} for a {}-bit integer", options.input, x, T::BITS);
    }
    info!("Computing {}! with {:?} overflow", x, options.overflow);

    let recursive = recursive_fact_with(x, options.overflow)?;
    let iterative = iterative_fact_with(x, options.overflow)?;
    out.write_all(utils::format_lines(&[recursive, iterative]).as_bytes())?;
    Ok(())
}

fn check<T: FixedWidth, O: Write, E: Write>(
    options: &FactorialOption,
    out: &mut O,
    err: &mut E,
) -> Result<()> {
    let mut checker = EquivalenceChecker::<T>::new(options)?;
    let info = checker.run()?;
    info!(
        "Checked {} inputs in {} ms",
        info.inputs_checked,
        info.check_time.as_millis()
    );

    writeln!(out, "{}", utils::TABLE_HEADER)?;
    for evaluation in &checker.evaluations {
        writeln!(out, "{}", utils::format_row(evaluation))?;
    }

    checker.emit_diagnostics(err)?;

    if options.deny_warnings && info.diagnostics_emitted > 0 {
        return Err(FactorialError::DeniedWarnings(info.diagnostics_emitted).into());
    }
    Ok(())
}
