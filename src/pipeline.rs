use tracing::info;

use crate::animated::{self, Ffmpeg, Transcoder};
use crate::cli::Mode;
use crate::config::StickerConfig;
use crate::error::Result;
use crate::staging::WorkingFiles;
use crate::still;

pub fn run(mode: Mode, data: &[u8], config: &StickerConfig) -> Result<Vec<u8>> {
    run_with_transcoder(mode, data, config, &Ffmpeg::new(config.ffmpeg.clone()))
}

/// Staged files are removed before this returns, whatever the outcome.
pub fn run_with_transcoder(
    mode: Mode,
    data: &[u8],
    config: &StickerConfig,
    transcoder: &dyn Transcoder,
) -> Result<Vec<u8>> {
    let files = WorkingFiles::stage(data)?;
    info!(?mode, bytes = data.len(), "converting sticker");

    let webp = match mode {
        Mode::Static => still::convert(files.input(), config)?,
        Mode::Animated => animated::convert(&files, config, transcoder)?,
    };

    info!(bytes = webp.len(), "sticker ready");
    Ok(webp)
}
