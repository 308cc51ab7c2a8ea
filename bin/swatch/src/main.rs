//! Render colors given in NCS notation to a PNG image.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use image::{ImageBuffer, Rgba};
use ncs::Color;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

type Image = ImageBuffer<Rgba<u16>, Vec<u16>>;

#[derive(Parser)]
#[command(name = "ncs-swatch")]
#[command(about = "Render Natural Color System colors to a 16-bit PNG")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render one square swatch per color, side by side
    Strip {
        /// Colors in NCS notation, e.g. 2030-Y90R
        #[arg(required = true)]
        colors: Vec<String>,

        /// Output PNG file path
        #[arg(short, long, default_value = "swatches.png")]
        output: PathBuf,

        /// Edge length of each swatch in pixels
        #[arg(short, long, default_value_t = 100)]
        size: u32,
    },
    /// Render the whole hue circle for one nuance
    Hues {
        /// Blackness, 0 to 99
        #[arg(short, long, value_parser = clap::value_parser!(u8).range(0..=99))]
        blackness: u8,

        /// Chromaticness, 0 to 99
        #[arg(short, long, value_parser = clap::value_parser!(u8).range(0..=99))]
        chromaticness: u8,

        /// Output PNG file path
        #[arg(short, long, default_value = "hues.png")]
        output: PathBuf,

        /// Image width in pixels
        #[arg(long, default_value_t = 800)]
        width: u32,

        /// Image height in pixels
        #[arg(long, default_value_t = 100)]
        height: u32,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ncs=warn,ncs_swatch=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Strip {
            colors,
            output,
            size,
        } => strip(&colors, &output, size),
        Commands::Hues {
            blackness,
            chromaticness,
            output,
            width,
            height,
        } => hues(blackness, chromaticness, &output, width, height),
    }
}

fn strip(colors: &[String], output: &Path, size: u32) -> anyhow::Result<()> {
    let colors = colors
        .iter()
        .map(|text| Color::parse(text).with_context(|| format!("could not parse {text:?}")))
        .collect::<anyhow::Result<Vec<_>>>()?;

    for color in &colors {
        tracing::info!(color = %color, rgba = ?color.to_rgba(), "swatch");
    }

    let img = Image::from_fn(size * colors.len() as u32, size, |x, _| {
        colors[(x / size) as usize].into()
    });

    save(&img, output)
}

fn hues(
    blackness: u8,
    chromaticness: u8,
    output: &Path,
    width: u32,
    height: u32,
) -> anyhow::Result<()> {
    // Every hue in the circle, normalized by the parser.
    let colors = (0..400u16)
        .map(|hue| {
            let text = format!("{blackness:02}{chromaticness:02}-{}", hue_notation(hue));
            Color::parse(&text).with_context(|| format!("could not parse {text:?}"))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    tracing::info!(nuance = %colors[0], "rendering hue circle");

    let img = Image::from_fn(width, height, |x, _| {
        let index = (x as u64 * colors.len() as u64 / width as u64) as usize;
        colors[index].into()
    });

    save(&img, output)
}

fn hue_notation(hue: u16) -> String {
    let (lead, step) = ncs::Hue::band(hue);
    format!("{}{step:02}{}", lead.letter(), lead.next().letter())
}

fn save(img: &Image, output: &Path) -> anyhow::Result<()> {
    img.save(output)
        .with_context(|| format!("could not write image to {}", output.display()))?;
    tracing::info!(path = %output.display(), "wrote image");
    Ok(())
}
