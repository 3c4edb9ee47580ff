//! Output destinations for rendered reports.

use crate::error::Result;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

pub trait OutputSink {
    /// Persist `contents` under `name`.
    fn write(&mut self, name: &str, contents: &str) -> Result<()>;
}

/// Writes each artifact as a file in one directory.
#[derive(Debug, Clone)]
pub struct DirSink {
    dir: PathBuf,
    announce: bool,
    written: Vec<PathBuf>,
}

impl DirSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into(), announce: false, written: Vec::new() }
    }

    /// Print `Writing '<path>'` to stdout before each file.
    pub fn announce(mut self, announce: bool) -> Self {
        self.announce = announce;
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

impl OutputSink for DirSink {
    fn write(&mut self, name: &str, contents: &str) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(name);
        if self.announce {
            println!("Writing '{}'", path.display());
        }
        fs::write(&path, contents)?;
        tracing::debug!(path = %path.display(), bytes = contents.len(), "output written");
        self.written.push(path);
        Ok(())
    }
}

/// Keeps artifacts in memory, keyed by name.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    pub files: BTreeMap<String, String>,
}

impl MemorySink {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.files.get(name).map(String::as_str)
    }
}

impl OutputSink for MemorySink {
    fn write(&mut self, name: &str, contents: &str) -> Result<()> {
        self.files.insert(name.to_string(), contents.to_string());
        Ok(())
    }
}
