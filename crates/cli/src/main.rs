use std::process::ExitCode;

use clap::Parser;

mod commands;
mod printer;

use commands::{Cli, Command};
use fileshelf_runtime::logging;

fn main() -> ExitCode {
    logging::init().ok();

    let cli = Cli::parse();
    let root = commands::resolve_root(cli.root);

    match cli.command {
        Command::Scan(args) => commands::scan::run(args, &root),
        Command::Browse(args) => commands::browse::run(args, &root),
        Command::Extensions(args) => commands::extensions::run(args, &root),
        Command::Folders(args) => commands::folders::run(args, &root),
    }
}
