use clap::Parser;

use logcheck::cli::{Cli, Commands};
use logcheck::commands::run_analyze;

fn main() {
    let cli = Cli::parse();

    let exit_code = match &cli.command {
        Commands::Analyze(args) => run_analyze(args, &cli),
    };

    std::process::exit(exit_code);
}
