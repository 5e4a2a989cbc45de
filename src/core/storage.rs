/// Durable storage for rating ledgers, addressed by record name.
///
/// The engine only ever reads and overwrites whole records, so any
/// key-value or file-backed medium can sit behind [`LedgerStore`].

use parking_lot::Mutex;
use rustc_hash::FxHashMap;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::NamedTempFile;
use thiserror::Error;

const RECORD_EXTENSION: &str = "ron";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to read ledger record '{name}': {source}")]
    Read {
        name: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write ledger record '{name}': {source}")]
    Write {
        name: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to encode ledger record '{name}': {source}")]
    Encode {
        name: String,
        #[source]
        source: ron::Error,
    },
    #[error("failed to decode ledger record '{name}': {source}")]
    Decode {
        name: String,
        #[source]
        source: ron::error::SpannedError,
    },
}

/// Read and overwrite named blobs.
pub trait LedgerStore: Send {
    /// Returns `Ok(None)` when nothing has been stored under `name`.
    fn read(&self, name: &str) -> Result<Option<Vec<u8>>, StorageError>;

    /// Replace the record stored under `name`.
    fn write(&mut self, name: &str, contents: &[u8]) -> Result<(), StorageError>;
}

/// One `<name>.ron` file per record inside a directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn record_path(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{}.{}", name, RECORD_EXTENSION))
    }
}

impl LedgerStore for FileStore {
    fn read(&self, name: &str) -> Result<Option<Vec<u8>>, StorageError> {
        match std::fs::read(self.record_path(name)) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Read {
                name: name.to_string(),
                source,
            }),
        }
    }

    fn write(&mut self, name: &str, contents: &[u8]) -> Result<(), StorageError> {
        let write_err = |source: std::io::Error| StorageError::Write {
            name: name.to_string(),
            source,
        };

        std::fs::create_dir_all(&self.dir).map_err(write_err)?;

        // Write beside the target and rename over it so readers never
        // observe a partially written record.
        let mut temp_file = NamedTempFile::new_in(&self.dir).map_err(write_err)?;
        temp_file.write_all(contents).map_err(write_err)?;
        temp_file.flush().map_err(write_err)?;
        temp_file
            .persist(self.record_path(name))
            .map_err(|e| write_err(e.error))?;
        Ok(())
    }
}

/// Records kept in memory. Clones share the same records, so a test can
/// hand one clone to the engine and inspect the other.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: Arc<Mutex<FxHashMap<String, Vec<u8>>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a record, as if a previous run had written it.
    pub fn insert(&self, name: &str, contents: impl Into<Vec<u8>>) {
        self.records.lock().insert(name.to_string(), contents.into());
    }

    pub fn get(&self, name: &str) -> Option<Vec<u8>> {
        self.records.lock().get(name).cloned()
    }

    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }
}

impl LedgerStore for MemoryStore {
    fn read(&self, name: &str) -> Result<Option<Vec<u8>>, StorageError> {
        Ok(self.get(name))
    }

    fn write(&mut self, name: &str, contents: &[u8]) -> Result<(), StorageError> {
        self.insert(name, contents);
        Ok(())
    }
}
