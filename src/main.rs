//! quadsolve CLI entry point
//!
//! Prompts for the coefficients of `a*x^2 + b*x + c = 0` and prints its
//! real roots.

use quadsolve::cli::args::{Args, Command};
use quadsolve::version::get_build_info;
use quadsolve::{exit_code, logging, run, SessionConfig};

use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = match Args::parse() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("Run 'quadsolve --help' for usage information.");
            return ExitCode::from(2);
        }
    };

    if args.help {
        print_help();
        return ExitCode::SUCCESS;
    }

    match args.command {
        Command::Version => {
            println!("{}", get_build_info());
            ExitCode::SUCCESS
        }
        Command::Solve => run_solver(&args),
    }
}

fn print_help() {
    println!("{}", get_build_info().short());
    println!(
        r#"Interactive solver for a*x^2 + b*x + c = 0

USAGE:
    quadsolve [OPTIONS]

Enter the integer coefficients a, b and c when prompted. Invalid entries
are reported and asked for again; equations without real roots restart
the input.

OPTIONS:
    --no-color      Disable colored output
    --plain         Do not reprint the equation before each prompt
    -h, --help      Print this help message
    -V, --version   Print version information

ENVIRONMENT:
    NO_COLOR          Disable colored output when set
    QUADSOLVE_TRACE   Log filter for diagnostics on stderr (e.g. debug)

EXIT CODES:
    0   Equation solved
    1   Input closed or I/O error before a solution
    2   Usage or configuration error"#
    );
}

fn run_solver(args: &Args) -> ExitCode {
    let outcome = logging::init().and_then(|_| {
        let config = SessionConfig::from_args(args);
        let stdin = io::stdin();
        let stdout = io::stdout();
        run(config, stdin.lock(), stdout.lock())
    });

    if let Err(ref e) = outcome {
        eprintln!();
        eprintln!("Error: {}", e);
    }

    ExitCode::from(exit_code(&outcome))
}
