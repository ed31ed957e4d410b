use std::{
    fs::{self, OpenOptions},
    io::{self, Write},
    path::{Path, PathBuf},
};

use log::debug;
use serde::Serialize;

/// The pipeline's step output file. Each published value is one
/// `KEY=value` line appended to it.
#[derive(Debug, Clone)]
pub struct OutputFile {
    path: PathBuf,
}

impl OutputFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Serialize `value` as compact JSON and append it under `key`.
    pub fn append_json<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> io::Result<()> {
        let json = serde_json::to_string(value).map_err(io::Error::other)?;
        self.append_var(key, &json)
    }

    pub fn append_var(&self, key: &str, value: &str) -> io::Result<()> {
        if key.is_empty() || key.contains(['=', '\n']) {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("invalid output key {key:?}"),
            ));
        }
        if value.contains('\n') {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("value for {key} spans multiple lines"),
            ));
        }

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let mut line = String::with_capacity(key.len() + value.len() + 2);
        line.push_str(key);
        line.push('=');
        line.push_str(value);
        line.push('\n');

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        // A single write on an O_APPEND handle, so concurrent steps appending
        // to the same file do not interleave within a line.
        file.write_all(line.as_bytes())?;
        debug!(
            "[output] wrote {key} ({} bytes) to {}",
            value.len(),
            self.path.display()
        );

        Ok(())
    }
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
