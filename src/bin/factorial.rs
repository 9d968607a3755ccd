use log::info;

use factorial::driver::{self, EXIT_FAILURE, EXIT_SUCCESS};
use factorial::option::FactorialOption;
use std::env;
use std::io;
use std::process;

fn main() {
    // Initialize logger
    pretty_env_logger::init();

    let result = FactorialOption::parse(env::args().skip(1).collect()).and_then(|options| {
        info!("Factorial Option: {:?}", options);
        let stdout = io::stdout();
        let stderr = io::stderr();
        driver::run(&options, &mut stdout.lock(), &mut stderr.lock())
    });

    let exit_code = match result {
        Ok(_) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("fatal error: {}", e);
            EXIT_FAILURE
        }
    };

    process::exit(exit_code);
}
