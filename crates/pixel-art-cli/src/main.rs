//! Pixel art converter CLI
//!
//! Pipeline: load image -> block pixelation (optionally snapped to the retro
//! palette) -> save in the format named by the output extension.
//!
//! Progress and errors are logged to stderr; set `RUST_LOG` to change the
//! verbosity (default `info`).

mod args;

use std::process::ExitCode;

use anyhow::Context;
use pixel_art_core::{pixelate, pixelate_with_palette, PixelBuffer, RETRO_PALETTE};

use args::Args;

fn run(args: &Args) -> anyhow::Result<()> {
    let mut image = PixelBuffer::new();
    image
        .load(&args.input)
        .with_context(|| format!("failed to load {}", args.input.display()))?;

    let block_size = args.block_size();
    if args.palette {
        pixelate_with_palette(&mut image, block_size, &RETRO_PALETTE);
    } else {
        pixelate(&mut image, block_size);
    }

    image
        .save(&args.output)
        .with_context(|| format!("failed to save {}", args.output.display()))?;
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    let args = match args::parse(std::env::args_os()) {
        Ok(args) => args,
        Err(code) => return code,
    };

    match run(&args) {
        Ok(()) => {
            log::info!("Conversion complete");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
