use clap::Parser;
use eyre::Result;

mod commands;
mod opt;

fn main() -> Result<()> {
    color_eyre::install()?;

    // Logs go to stderr so they never interleave with prompts on stdout.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = opt::Cli::parse();
    commands::exec(cli.command)
}
