use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;

use toonstrip::{compose_strip, fetch_strip_images, CartoonStrip, FontSet, StripStyle};

#[derive(Parser, Debug)]
#[command(name = "toonstrip", version)]
struct Cli {
    /// Input cartoon strip JSON (upstream wire format, image urls populated).
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Directory holding the four strip fonts.
    #[arg(long)]
    fonts: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let strip = CartoonStrip::from_path(&cli.in_path)?;
    let fonts = FontSet::load_dir(&cli.fonts)?;
    let images = fetch_strip_images(&strip)?;
    let composed = compose_strip(&strip, &images, &fonts, &StripStyle::default())?;

    composed
        .save(&cli.out)
        .with_context(|| format!("write {}", cli.out.display()))?;
    tracing::info!(out = %cli.out.display(), "strip written");
    Ok(())
}
