use clap::Parser;
use dessertdash::cli::{Cli, init_logging, run};

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    init_logging(cli.config.as_deref());
    run(cli)
}
