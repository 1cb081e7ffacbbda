use clap::Parser;

use clipmod::bootstrap::{run_app, Cli};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run_app(cli).await
}
