use log::{debug, warn};
use std::fs;
use std::io;
use std::path::PathBuf;

pub const DEFAULT_COUNTER: usize = 1;

/// Source of the run number used to name exported artifacts.
pub trait RunCounter {
    fn read(&self) -> usize;
    fn write(&mut self, value: usize) -> io::Result<()>;
}

/// Counter persisted as a plain integer in a text file.
#[derive(Clone, Debug)]
pub struct FileRunCounter {
    path: PathBuf,
}

impl FileRunCounter {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }
}

impl RunCounter for FileRunCounter {
    /// Falls back to [`DEFAULT_COUNTER`] when the file is missing or does not
    /// start with an integer.
    fn read(&self) -> usize {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) => {
                if e.kind() == io::ErrorKind::NotFound {
                    debug!("no counter at {}, starting fresh", self.path.display());
                } else {
                    warn!("could not read counter {}: {}", self.path.display(), e);
                }
                return DEFAULT_COUNTER;
            }
        };
        match content.split_whitespace().next().map(str::parse::<usize>) {
            Some(Ok(value)) => value,
            _ => {
                warn!(
                    "counter {} is not a number, using {}",
                    self.path.display(),
                    DEFAULT_COUNTER
                );
                DEFAULT_COUNTER
            }
        }
    }

    fn write(&mut self, value: usize) -> io::Result<()> {
        fs::write(&self.path, value.to_string())
    }
}

/// Counter kept in memory only.
#[derive(Clone, Copy, Debug)]
pub struct MemoryRunCounter(pub usize);

impl Default for MemoryRunCounter {
    fn default() -> Self {
        Self(DEFAULT_COUNTER)
    }
}

impl RunCounter for MemoryRunCounter {
    fn read(&self) -> usize {
        self.0
    }

    fn write(&mut self, value: usize) -> io::Result<()> {
        self.0 = value;
        Ok(())
    }
}

pub fn artifact_name(counter: usize) -> String {
    format!("graph_data({}).txt", counter)
}
