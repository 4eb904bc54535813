use clap::{Parser, Subcommand};

mod check;
mod compile;
mod fmt;

pub fn exec() -> miette::Result<()> {
    env_logger::init();
    use Command::*;
    let cli = Cli::parse();
    match cli.command {
        Check(args) => check::exec(args),
        Compile(args) => compile::exec(args),
        Fmt(args) => fmt::exec(args),
    }
}

#[derive(Parser)]
#[clap(name = "vtc", version, author, about, long_about = None)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Check the union declarations and match blocks of a file
    Check(check::Args),
    /// Generate the JavaScript module for a file
    Compile(compile::Args),
    /// Format a code file
    Fmt(fmt::Args),
}
