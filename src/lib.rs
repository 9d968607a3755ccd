#[macro_use]
extern crate lazy_static;

#[macro_use]
extern crate log;

// The two factorial algorithms and what they compute over
pub mod factorial {
    // For error handling
    pub mod factorial_result;
    // Fixed-width integers and overflow policies
    pub mod integer;
    // Loop-based factorial
    pub mod iterative;
    // Self-referential factorial
    pub mod recursive;
}

// Modules for comparing the two algorithms
pub mod checker {
    pub mod diagnostics;
    pub mod equivalence_checker;
    // Reference values of n!
    pub mod exact;
}

// Command line options and the program entry
pub mod driver;
pub mod option;

// Useful utilities
pub mod utils;

pub use crate::factorial::factorial_result::{FactorialError, Result};
pub use crate::factorial::integer::{FixedWidth, IntegerWidth, OverflowPolicy};
pub use crate::factorial::iterative::{iterative_fact, iterative_fact_with};
pub use crate::factorial::recursive::{recursive_fact, recursive_fact_with};
