use clap::Parser;
use people::cli::{self, Cli};
use people::config::Config;
use people::logging;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = Config::resolve(cli.db)?;
    cli::run(&config, cli.command)
}
