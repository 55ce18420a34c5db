use clap::Parser;

pub const STATIC_MODE: &str = "static";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Static,
    Animated,
}

impl Mode {
    /// Anything other than `static` selects the animated path.
    pub fn from_arg(arg: Option<&str>) -> Self {
        match arg {
            None | Some(STATIC_MODE) => Mode::Static,
            Some(_) => Mode::Animated,
        }
    }
}

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Convert an image or short animation on stdin into a WEBP sticker on stdout"
)]
pub struct Cli {
    /// `static` (default) for still images, any other value for animations
    #[arg(value_name = "MODE", allow_hyphen_values = true)]
    pub mode: Option<String>,

    /// Ignored
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub rest: Vec<String>,
}

impl Cli {
    pub fn mode(&self) -> Mode {
        Mode::from_arg(self.mode.as_deref())
    }
}
