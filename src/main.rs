use clap::Parser;
use sqlswap::cli::{self, Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Translate(args) => cli::translate::run(args).await,
        Command::Serve(args) => cli::serve::run(args).await,
    }
}
