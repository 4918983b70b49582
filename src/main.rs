use std::process;

use clap::Parser;

use tplex::cli::Args;

fn main() {
    let args = Args::parse();
    match tplex::run(args) {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {e:#}");
            process::exit(1);
        }
    }
}
