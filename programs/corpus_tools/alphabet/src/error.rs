use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NormalizeError {
    #[error("couldn't read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("couldn't write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    /// Line numbers start at 1.
    #[error("line {line} is not valid UTF-8")]
    Decode { line: usize },

    /// A read failure from a stream that has no path attached yet.
    #[error("read failed: {0}")]
    Stream(#[from] io::Error),
}

impl NormalizeError {
    /// Attaches the input path to a bare stream error.
    pub fn reading(self, path: &Path) -> Self {
        match self {
            NormalizeError::Stream(source) => NormalizeError::Read {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        }
    }
}
