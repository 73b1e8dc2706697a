// SPDX-License-Identifier: MIT OR Apache-2.0

//! Env file loader.
//!
//! This module provides `EnvFileLoader`, which reads a `KEY=VALUE` file line by
//! line and injects each assignment into an environment store.

use crate::adapters::ProcessEnv;
use crate::domain::{EnvError, EnvKey, Result};
use crate::ports::EnvStore;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Loads `KEY=VALUE` assignments from a text file into an environment store.
///
/// The file format is one assignment per line. Lines that are exactly empty or
/// whose first character is `#` are skipped; everything else must contain a `=`.
/// The line is split on the first `=`, and key and value are trimmed of
/// surrounding whitespace independently. Later duplicate keys overwrite earlier
/// ones.
///
/// Loading is best-effort up to the first error: a malformed line or a rejected
/// assignment aborts the scan, but assignments already applied stay applied. The
/// file handle is released on every exit path.
///
/// # Examples
///
/// ```rust,no_run
/// use envbind::service::EnvFileLoader;
///
/// # fn main() -> envbind::domain::Result<()> {
/// // Load into the process environment
/// let loader = EnvFileLoader::new();
/// loader.load(".env")?;
/// # Ok(())
/// # }
/// ```
pub struct EnvFileLoader {
    /// The store assignments are written to
    store: Box<dyn EnvStore>,
}

impl EnvFileLoader {
    /// Creates a loader that writes to the process environment.
    pub fn new() -> Self {
        Self::with_store(ProcessEnv::new())
    }

    /// Creates a loader that writes to the given store.
    ///
    /// # Examples
    ///
    /// ```
    /// use envbind::adapters::MemoryEnv;
    /// use envbind::service::EnvFileLoader;
    ///
    /// let loader = EnvFileLoader::with_store(MemoryEnv::new());
    /// ```
    pub fn with_store(store: impl EnvStore + 'static) -> Self {
        EnvFileLoader {
            store: Box::new(store),
        }
    }

    /// Returns the store this loader writes to.
    pub fn store(&self) -> &dyn EnvStore {
        self.store.as_ref()
    }

    /// Loads the file at `path`, returning the number of assignments applied.
    ///
    /// # Returns
    ///
    /// * `Ok(count)` - every line was skipped or applied
    /// * `Err(EnvError::FileOpen)` - the file could not be opened
    /// * `Err(EnvError::BadLine)` - a non-empty, non-comment line had no `=`
    /// * `Err(EnvError::SetVar)` - the store rejected an assignment
    /// * `Err(EnvError::FileRead)` - I/O failed mid-scan
    pub fn load<P: AsRef<Path>>(&self, path: P) -> Result<usize> {
        let path = path.as_ref();

        let file = File::open(path).map_err(|e| EnvError::FileOpen {
            path: path.to_path_buf(),
            source: e,
        })?;
        let reader = BufReader::new(file);

        let mut applied = 0usize;
        for (index, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| EnvError::FileRead {
                path: path.to_path_buf(),
                source: e,
            })?;

            // Skip check runs on the raw line, stripped of line endings only:
            // a line of spaces is not a comment and not blank.
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (key, value) = line.split_once('=').ok_or_else(|| EnvError::BadLine {
                path: path.to_path_buf(),
                line: index + 1,
                content: line.clone(),
            })?;

            self.store.set(&EnvKey::from(key.trim()), value.trim())?;
            applied += 1;
        }

        tracing::debug!(
            "loaded {} assignments from '{}' into store '{}'",
            applied,
            path.display(),
            self.store.name()
        );

        Ok(applied)
    }
}

impl Default for EnvFileLoader {
    fn default() -> Self {
        Self::new()
    }
}
