mod cli;
mod commands;
mod util;

use clap::Parser;

use cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Check { trace } => commands::check::run(&trace),
        Command::Typesets { trace, types, json } => commands::typesets::run(&trace, types, json),
        Command::Path {
            trace,
            typeset,
            ty,
            json,
        } => commands::path::run(&trace, &typeset, &ty, json),
    }
}
