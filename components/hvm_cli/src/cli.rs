//! Command-line arguments

use clap::Parser;

/// Run a program on the HVM stack machine.
///
/// A memory list may start with a minus sign: `hvm 0<p -5,3`.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "hvm", version)]
pub struct Cli {
    /// Program text, one instruction per character
    pub program: String,

    /// Initial memory as comma-separated integers, e.g. 105,13,-98
    #[arg(allow_hyphen_values = true)]
    pub memory: Option<String>,

    /// Print every executed instruction and the stack after it to stderr
    #[arg(short, long)]
    pub trace: bool,

    /// Print the decoded program to stderr before running it
    #[arg(long)]
    pub print_program: bool,

    /// Print execution statistics as JSON to stderr after the run
    #[arg(long)]
    pub stats: bool,
}
