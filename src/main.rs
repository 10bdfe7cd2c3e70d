use anyhow::Result;
use clap::Parser;
use speaker_icons::config::Config;
use speaker_icons::generator::{Capability, IconGenerator};
use speaker_icons::logging;
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser)]
#[command(name = "speaker-icons")]
#[command(about = "Generate speaker placeholder icons for a browser extension", long_about = None)]
struct Cli {
    /// Directory to write icon-{size}.png files into (default: current directory)
    #[arg(short, long)]
    out_dir: Option<PathBuf>,

    /// Write text placeholders instead of rendering images
    #[arg(long)]
    placeholder: bool,

    /// Settings file to read
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Read ~/.speaker-icons/settings.yaml when no --config is given
    #[arg(long)]
    user_config: bool,

    /// Print diagnostics to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = Config::resolve(cli.config.as_deref(), cli.user_config)?;
    debug!("Using config: {:?}", config);

    // Flags override the settings file
    let out_dir = cli.out_dir.unwrap_or(config.output_dir);
    let capability = Capability::detect(cli.placeholder || config.force_placeholder);

    IconGenerator::new(out_dir, capability).run()?;

    Ok(())
}
