//! Command-line arguments.
//!
//! Arguments are sanitized before clap sees them so that unknown flags and
//! surplus positionals are ignored instead of rejected.

use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};

/// Default pixelation block size.
pub const DEFAULT_BLOCK_SIZE: i64 = 8;

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(
    name = "pixel-art-converter",
    version,
    args_override_self = true,
    about = "Convert an image into pixel art.",
    after_help = "Example:\n  pixel-art-converter input.png output.png -b 16 -p"
)]
pub struct Args {
    /// Input image (PNG, JPEG or BMP)
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output image; the extension selects PNG, JPEG (.jpg/.jpeg) or BMP
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Pixelation block size (values of 1 or less leave the image unchanged)
    #[arg(
        short,
        long,
        value_name = "N",
        default_value_t = DEFAULT_BLOCK_SIZE,
        allow_negative_numbers = true
    )]
    pub block_size: i64,

    /// Snap colors to the built-in 16-color retro palette
    #[arg(short, long)]
    pub palette: bool,
}

impl Args {
    /// Block size as the library expects it. Negative values become 0.
    pub fn block_size(&self) -> u32 {
        self.block_size.clamp(0, u32::MAX as i64) as u32
    }
}

const VALUE_FLAGS: &[&str] = &["-b", "--block-size"];
const SWITCH_FLAGS: &[&str] = &["-p", "--palette", "-h", "--help", "-V", "--version"];

/// Drop unknown flags and every positional after the first two.
///
/// A value flag at the very end, with nothing to consume, is dropped too.
pub fn sanitize(raw: impl IntoIterator<Item = OsString>) -> Vec<OsString> {
    let mut raw = raw.into_iter();
    let mut out: Vec<OsString> = raw.next().into_iter().collect();
    let mut positionals = 0;

    while let Some(arg) = raw.next() {
        let text = arg.to_string_lossy().into_owned();

        if VALUE_FLAGS.contains(&text.as_str()) {
            if let Some(value) = raw.next() {
                out.push(arg);
                out.push(value);
            }
        } else if SWITCH_FLAGS.contains(&text.as_str()) || text.starts_with("--block-size=") {
            out.push(arg);
        } else if text.starts_with('-') && text.len() > 1 {
            log::debug!("Ignoring unknown argument: {}", text);
        } else if positionals < 2 {
            positionals += 1;
            out.push(arg);
        } else {
            log::debug!("Ignoring extra argument: {}", text);
        }
    }

    out
}

/// Parse the process arguments.
///
/// On help or version output returns `Err(ExitCode::SUCCESS)`; on any usage
/// problem prints it and returns `Err(ExitCode::FAILURE)`.
pub fn parse(raw: impl IntoIterator<Item = OsString>) -> Result<Args, ExitCode> {
    match Args::try_parse_from(sanitize(raw)) {
        Ok(args) => Ok(args),
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                err.print().ok();
                Err(ExitCode::SUCCESS)
            }
            ErrorKind::MissingRequiredArgument => {
                Args::command().print_help().ok();
                Err(ExitCode::FAILURE)
            }
            _ => {
                err.print().ok();
                Err(ExitCode::FAILURE)
            }
        },
    }
}
