/// Encode parameters and ceilings for a sticker.
#[derive(Debug, Clone)]
pub struct StickerConfig {
    /// Largest accepted output, in bytes.
    pub size_limit: u64,
    pub dimension: u32,
    pub fallback_dimension: u32,
    /// Tried in order; the first encoding under `size_limit` wins.
    pub qualities: Vec<u8>,
    pub fallback_quality: u8,
    /// libwebp effort, 0 (fast) to 6 (smallest).
    pub method: u8,
    pub fps: u32,
    pub max_duration_secs: u32,
    pub ffmpeg: String,
}

impl Default for StickerConfig {
    fn default() -> Self {
        Self {
            size_limit: 1024 * 1024,
            dimension: 512,
            fallback_dimension: 256,
            qualities: vec![80, 60, 40, 20],
            fallback_quality: 20,
            method: 6,
            fps: 10,
            max_duration_secs: 6,
            ffmpeg: "ffmpeg".to_string(),
        }
    }
}

impl StickerConfig {
    pub fn scale_filter(&self, dimension: u32) -> String {
        format!(
            "fps={},scale={dimension}:{dimension}:flags=lanczos",
            self.fps
        )
    }
}
