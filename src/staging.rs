use std::io::{Read, Write};
use std::path::Path;

use tempfile::{Builder, TempPath};
use tracing::debug;

use crate::error::Result;

pub const INPUT_SUFFIX: &str = ".dat";
pub const OUTPUT_SUFFIX: &str = ".webp";

pub fn read_all(mut reader: impl Read) -> Result<Vec<u8>> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;
    Ok(data)
}

/// Input copy and output candidate for one conversion. Both files are removed
/// when this is dropped; removal failures are ignored.
#[derive(Debug)]
pub struct WorkingFiles {
    input: TempPath,
    output: TempPath,
}

impl WorkingFiles {
    pub fn stage(data: &[u8]) -> Result<Self> {
        let mut input = Builder::new().suffix(INPUT_SUFFIX).tempfile()?;
        input.write_all(data)?;
        input.flush()?;
        let input = input.into_temp_path();

        let output = Builder::new().suffix(OUTPUT_SUFFIX).tempfile()?.into_temp_path();

        debug!(
            input = %input.display(),
            output = %output.display(),
            bytes = data.len(),
            "staged input"
        );

        Ok(Self { input, output })
    }

    pub fn input(&self) -> &Path {
        &self.input
    }

    pub fn output(&self) -> &Path {
        &self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_reader_to_end() {
        let data = read_all(&b"sticker bytes"[..]).unwrap();
        assert_eq!(data, b"sticker bytes");
    }

    #[test]
    fn stages_input_and_reserves_output() {
        let files = WorkingFiles::stage(b"payload").unwrap();

        assert_eq!(std::fs::read(files.input()).unwrap(), b"payload");
        assert!(files.output().exists());
        assert_eq!(std::fs::metadata(files.output()).unwrap().len(), 0);
        assert_ne!(files.input(), files.output());

        let input_name = files.input().to_string_lossy().into_owned();
        let output_name = files.output().to_string_lossy().into_owned();
        assert!(input_name.ends_with(INPUT_SUFFIX));
        assert!(output_name.ends_with(OUTPUT_SUFFIX));
    }

    #[test]
    fn removes_both_files_on_drop() {
        let files = WorkingFiles::stage(b"payload").unwrap();
        let input = files.input().to_path_buf();
        let output = files.output().to_path_buf();
        std::fs::write(&output, b"candidate").unwrap();

        drop(files);

        assert!(!input.exists());
        assert!(!output.exists());
    }

    #[test]
    fn drop_ignores_already_removed_files() {
        let files = WorkingFiles::stage(b"payload").unwrap();
        std::fs::remove_file(files.output()).unwrap();
        let input = files.input().to_path_buf();

        drop(files);

        assert!(!input.exists());
    }

    #[test]
    fn stages_are_unique() {
        let a = WorkingFiles::stage(b"a").unwrap();
        let b = WorkingFiles::stage(b"b").unwrap();
        assert_ne!(a.input(), b.input());
        assert_ne!(a.output(), b.output());
    }
}
