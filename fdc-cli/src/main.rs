//! FDC CLI - Focos de Calor dashboard for INPE daily hotspot data.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "fdc-cli",
    version,
    about = "Daily INPE fire hotspots in Brazil: map and per-state chart"
)]
struct Cli {
    #[command(subcommand)]
    command: fdc_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    fdc_cmd::run(cli.command).await
}
