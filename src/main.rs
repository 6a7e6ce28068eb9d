use clap::Parser;
use tickbench::cli::{run, Cli};

fn main() -> std::process::ExitCode {
    run(Cli::parse())
}
