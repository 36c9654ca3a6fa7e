use anyhow::Result;
use clap::Parser;
use hexfmt_cli::{run, CommandLineArguments};

fn main() -> Result<()> {
    let arguments = CommandLineArguments::parse();
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    run(&arguments, &mut handle)
}
