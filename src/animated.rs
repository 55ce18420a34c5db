use std::ffi::OsString;
use std::fs;
use std::path::Path;
use std::process::{Command, Output, Stdio};

use tracing::{debug, info, warn};

use crate::config::StickerConfig;
use crate::error::{AppError, Result};
use crate::staging::WorkingFiles;

#[derive(Debug, Clone, Copy)]
pub struct TranscodeRequest<'a> {
    pub input: &'a Path,
    pub output: &'a Path,
    pub dimension: u32,
}

/// Runs an external transcoder to completion.
pub trait Transcoder {
    fn run(&self, args: &[OsString]) -> Result<()>;
}

#[derive(Debug, Clone)]
pub struct Ffmpeg {
    program: String,
}

impl Ffmpeg {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Transcoder for Ffmpeg {
    fn run(&self, args: &[OsString]) -> Result<()> {
        debug!(program = %self.program, ?args, "running transcoder");

        let output = Command::new(&self.program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output()
            .map_err(|source| AppError::CommandSpawn {
                program: self.program.clone(),
                source,
            })?;

        ensure_command_success(&self.program, &output)
    }
}

pub fn transcode_args(request: &TranscodeRequest<'_>, config: &StickerConfig) -> Vec<OsString> {
    vec![
        "-y".into(),
        "-i".into(),
        request.input.into(),
        "-t".into(),
        config.max_duration_secs.to_string().into(),
        "-vf".into(),
        config.scale_filter(request.dimension).into(),
        "-loop".into(),
        "0".into(),
        "-vcodec".into(),
        "libwebp".into(),
        request.output.into(),
    ]
}

/// Transcodes at `dimension`, retrying once at `fallback_dimension` when the
/// result exceeds `size_limit`. The retry is returned whatever its size.
pub fn convert(
    files: &WorkingFiles,
    config: &StickerConfig,
    transcoder: &dyn Transcoder,
) -> Result<Vec<u8>> {
    let transcode_at = |dimension: u32| -> Result<u64> {
        let request = TranscodeRequest {
            input: files.input(),
            output: files.output(),
            dimension,
        };
        transcoder.run(&transcode_args(&request, config))?;
        Ok(fs::metadata(files.output())?.len())
    };

    let mut dimension = config.dimension;
    let mut bytes = transcode_at(dimension)?;
    if bytes > config.size_limit {
        warn!(bytes, "animation exceeds the size limit, downscaling");
        dimension = config.fallback_dimension;
        bytes = transcode_at(dimension)?;
    }
    info!(dimension, bytes, "animated sticker ready");

    Ok(fs::read(files.output())?)
}

pub fn tools_available(program: &str) -> bool {
    Command::new(program)
        .arg("-version")
        .stdin(Stdio::null())
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false)
}

fn ensure_command_success(program: &str, output: &Output) -> Result<()> {
    if output.status.success() {
        return Ok(());
    }

    let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
    Err(AppError::CommandFailed {
        program: program.to_string(),
        code: output.status.code(),
        stderr,
    })
}
