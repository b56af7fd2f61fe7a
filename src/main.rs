use anyhow::Result;
use clap::Parser;
use emotion_id::cli::Cli;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("emotion_id=info")),
        )
        .init();

    let cli = Cli::parse();
    cli.run()
}
