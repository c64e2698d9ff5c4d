//! Mapc - level map compiler
//!
//! Compiles a sectioned level text file into the binary `.map` artifact
//! loaded by the engine at runtime.

use std::fs;
use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use mapc_format::FORMAT_VERSION;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "mapc", version, about = "Compile a level text file into a binary .map artifact")]
struct Cli {
    /// Level source file.
    source: PathBuf,

    /// Destination path (defaults to the source path with a .map extension).
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Parse and encode without writing the artifact.
    #[arg(long)]
    check: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    info!("Using v{} of the map format", FORMAT_VERSION);

    let lines = mapc_level::read_lines(&cli.source)
        .with_context(|| format!("can't open {}", cli.source.display()))?;
    let mapping = mapc_level::partition(&lines)?;
    let artifact = mapc_format::encode_level(&mapping)?;

    if cli.check {
        info!("{}: ok ({} bytes)", cli.source.display(), artifact.len());
        return Ok(());
    }

    let out = cli
        .out
        .unwrap_or_else(|| cli.source.with_extension("map"));
    fs::write(&out, &artifact).with_context(|| format!("can't write {}", out.display()))?;
    info!("Wrote {} ({} bytes)", out.display(), artifact.len());

    Ok(())
}
