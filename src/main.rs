use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use rds_rs::{generate, generate_with_rng, io, RdsOptions};

/// Create random dot stereograms.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Greyscale reference depth image (darker = lower, lighter = nearer)
    ref_image: PathBuf,

    /// Output file name; when omitted both images are shown interactively
    #[arg(long)]
    outfile: Option<PathBuf>,

    /// Levels of 3D depth
    #[arg(long, default_value_t = 24)]
    levels: i32,

    /// Create a stereogram for parallel viewing
    #[arg(long)]
    parallel: bool,

    /// Seed the noise generator for reproducible output
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let depth = io::load_depth_map(&args.ref_image)
        .with_context(|| format!("failed to load {}", args.ref_image.display()))?;
    info!("loaded {}x{} depth map", depth.width(), depth.height());

    let opts = RdsOptions {
        levels: args.levels,
        parallel: args.parallel,
    };
    let stereogram = match args.seed {
        Some(seed) => generate_with_rng(&depth, &opts, &mut StdRng::seed_from_u64(seed)),
        None => generate(&depth, &opts),
    }?;

    match args.outfile {
        Some(outfile) => io::save_stereogram(&stereogram, &outfile)
            .with_context(|| format!("failed to save {}", outfile.display()))?,
        None => {
            io::display_file(&args.ref_image)
                .with_context(|| format!("failed to show {}", args.ref_image.display()))?;
            io::display_stereogram(&stereogram).context("failed to show stereogram")?;
        }
    }
    Ok(())
}
