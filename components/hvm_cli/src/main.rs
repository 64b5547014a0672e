//! HVM command-line runner
//!
//! Entry point for the `hvm` binary. Parses CLI arguments and delegates to
//! the Runtime for execution.

use clap::error::ErrorKind;
use clap::Parser as ClapParser;
use hvm_cli::error::EXIT_SUCCESS;
use hvm_cli::{Cli, CliError, Runtime};
use std::io::{self, BufWriter};
use std::process;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            process::exit(EXIT_SUCCESS);
        }
        Err(e) => {
            let err = CliError::from(e);
            eprint!("{}", err);
            process::exit(err.exit_code());
        }
    };

    let runtime = Runtime::new()
        .with_trace(cli.trace)
        .with_print_program(cli.print_program)
        .with_stats(cli.stats);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let mut diag = io::stderr();

    match runtime.execute_args(&cli.program, cli.memory.as_deref(), &mut out, &mut diag) {
        Ok(_) => {}
        Err(e) => {
            // Keep program output ahead of the error message
            drop(out);
            eprintln!("Error: {}", e);
            process::exit(e.exit_code());
        }
    }
}
