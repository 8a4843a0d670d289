//! # Quest CLI
//!
//! Shared plumbing for the `generate-cards` and `validate-deck` binaries.
//!
//! ## Core Components
//!
//! - **reports**: Console, JSON and Markdown renderings of a validation report
//! - **OutputTarget**: Stdout or file sink for report output
//! - **init_logging**: `env_logger` setup honouring `RUST_LOG` and `-v`

pub mod reports;

pub use reports::*;

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Where the generator writes, and the validator reads, the graph document.
pub const DEFAULT_GRAPH_PATH: &str = "creative/quest/data/cv-cards.json";

/// Where the generator reads the career profile.
pub const DEFAULT_PROFILE_PATH: &str = "data/cv-data.yml";

/// Initialise `env_logger`. `RUST_LOG` wins; otherwise `verbose` selects `debug`
/// over `warn`.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

/// Read a UTF-8 file, naming it in the error.
pub fn read_to_string(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

/// Report sink: buffered stdout, or a file when a path is given.
pub enum OutputTarget {
    Stdout(BufWriter<std::io::Stdout>),
    File(BufWriter<File>),
}

impl OutputTarget {
    pub fn new(path: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = path {
            let file = File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            Ok(Self::File(BufWriter::new(file)))
        } else {
            Ok(Self::Stdout(BufWriter::new(stdout())))
        }
    }

    pub fn is_file(&self) -> bool {
        matches!(self, Self::File(_))
    }

    fn writer(&mut self) -> &mut dyn Write {
        match self {
            Self::Stdout(w) => w,
            Self::File(w) => w,
        }
    }
}

impl Write for OutputTarget {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.writer().write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.writer().flush()
    }
}
