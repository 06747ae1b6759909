use clap::Parser;
use img_press::cli::{Args, Commands};
use img_press::engine::CompressOptions;
use img_press::error::{CompressionError, Result};
use img_press::report::SizeReport;
use img_press::session::CompressSession;
use img_press::{acquire, info, logger, persist, show_image_info, verbose, warn};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logger::set_quiet_mode(args.quiet);
    logger::set_verbose_mode(args.verbose);

    match args.command {
        Commands::Compress {
            input,
            output,
            quality,
        } => {
            let options = CompressOptions::new(quality)?;
            compress_file(&input, output, options).await?;
        }
        Commands::Info { input } => {
            show_image_info(&input).await?;
        }
    }

    Ok(())
}

async fn compress_file(
    input: &Path,
    output: Option<PathBuf>,
    options: CompressOptions,
) -> Result<()> {
    info!("🗜️  Compressing image: {:?}", input);

    let source = acquire::read_source(input).await?;
    verbose!("Declared type: {}", source.mime_type());
    let original_size = source.byte_len();
    info!(
        "📊 Original size: {} ({} bytes)",
        img_press::format_size(original_size),
        original_size
    );

    let mut session = CompressSession::new();
    session.load_source(source);
    session.set_quality(options.quality);

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("Invalid progress template"),
    );
    pb.set_message(format!("Re-encoding at quality {}...", options.quality));

    session.compress().await?;
    pb.finish_with_message("✅ Compression complete");

    let compressed = session.compressed().ok_or(CompressionError::EmptyOutput)?;
    let report = SizeReport::new(original_size, compressed.byte_len());

    info!(
        "📈 Compressed size: {} ({} bytes)",
        report.compressed_display(),
        report.compressed_bytes
    );
    info!("🎯 Compression ratio: {}%", report.ratio);

    if report.ratio > 0 {
        info!("✅ Successfully reduced file size by {}%", report.ratio);
    } else {
        warn!("File size did not shrink ({}%)", report.ratio);
    }

    let output_path = persist::resolve_output_path(output);
    persist::save_compressed(compressed, &output_path).await?;
    info!("💾 Saved: {:?}", output_path);

    Ok(())
}
