//! mailsieve CLI binary.

use clap::Parser;
use mailsieve::cli::{args::MailsieveArgs, commands::execute_command};
use std::process;

fn main() {
    let args = MailsieveArgs::parse();

    if let Err(e) = execute_command(args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
