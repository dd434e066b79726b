use std::{env, process};

use ventureflow::{cli, init};

fn main() {
    init();

    if let Err(err) = cli::run_cli(env::args().skip(1)) {
        cli::output::error(&err);
        process::exit(1);
    }
}
