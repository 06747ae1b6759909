use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "img-press",
    about = "Lossy image re-encoding tool: decode, re-encode as JPEG, report the size win",
    long_about = "img-press re-encodes an image (JPEG, PNG, WebP) as JPEG at a chosen quality \
                  and reports the original size, compressed size, and compression ratio. \
                  Images keep their intrinsic dimensions; compression here means re-encoding, \
                  not resizing.",
    version = "0.1.0",
    after_help = "EXAMPLES:\n  \
    img-press compress photo.png -q 80\n  \
    img-press compress photo.png -q 60 -o small.jpg\n  \
    img-press compress photo.png -o ./out/\n  \
    img-press info photo.png"
)]
pub struct Args {
    #[arg(
        short = 'Q',
        long,
        global = true,
        help = "Suppress status output (errors still go to stderr)"
    )]
    pub quiet: bool,

    #[arg(short = 'v', long, global = true, help = "Print extra diagnostics")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(
        about = "Re-encode a single image as JPEG at a chosen quality",
        long_about = "Re-encode a single image as JPEG. The source may be any decodable \
                      raster format; output is always JPEG at the requested quality."
    )]
    Compress {
        #[arg(help = "Input image file path")]
        input: PathBuf,

        #[arg(
            short = 'o',
            long,
            help = "Output file or directory (default: compressed_<millis>.jpg in the current directory)",
            long_help = "Where to write the output. A directory gets a timestamped \
                         compressed_<millis>.jpg dropped into it; omitting the flag does the \
                         same in the current directory."
        )]
        output: Option<PathBuf>,

        #[arg(
            short = 'q',
            long,
            help = "Encoder quality (10-100, default: 80)",
            long_help = "JPEG encoder quality from 10 (smallest, roughest) to 100 (largest, \
                         closest to the source). Values outside the range are rejected."
        )]
        quality: Option<u8>,
    },

    #[command(
        about = "Show image dimensions, size, and a quality suggestion",
        long_about = "Decode an image and print its dimensions, declared type, byte size in \
                      human-readable form, and a suggested quality band for compression."
    )]
    Info {
        #[arg(help = "Image file path to analyze")]
        input: PathBuf,
    },
}
