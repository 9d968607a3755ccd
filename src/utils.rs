use crate::checker::equivalence_checker::Evaluation;
use crate::factorial::integer::FixedWidth;
use itertools::Itertools;
use std::fmt::Display;

/// One value per line, each terminated by `\n` like `printf("%d\n")`
pub fn format_lines<I>(values: I) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    values.into_iter().map(|value| format!("{}\n", value)).join("")
}

pub const TABLE_HEADER: &str = "input\trecursive\titerative\texact";

/// A tab separated row of the equivalence table
pub fn format_row<T: FixedWidth>(evaluation: &Evaluation<T>) -> String {
    let result = |value: Option<T>| match value {
        Some(value) => value.to_string(),
        None => String::from("overflow"),
    };
    let exact = match evaluation.exact {
        Some(exact) => exact.to_string(),
        None => String::from("-"),
    };
    vec![
        evaluation.input.to_string(),
        result(evaluation.recursive),
        result(evaluation.iterative),
        exact,
    ]
    .into_iter()
    .join("\t")
}
