//! Adapters between the comparison pipeline and the filesystem.

use serde::de::DeserializeOwned;
use std::fs;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use crate::error::CompareError;

/// Supplies one of the two input collections.
pub trait VectorSource {
    type Collection;

    fn load(&self) -> Result<Self::Collection, CompareError>;
}

/// Persists the rendered report.
pub trait ReportSink {
    fn write_report(&self, report: &str) -> Result<(), CompareError>;
}

/// Reads a whole JSON document from `path` and deserializes it as `T`.
pub struct JsonFileSource<T> {
    label: String,
    path: PathBuf,
    _collection: PhantomData<fn() -> T>,
}

impl<T> JsonFileSource<T> {
    pub fn new(label: impl Into<String>, path: impl AsRef<Path>) -> Self {
        Self {
            label: label.into(),
            path: path.as_ref().to_path_buf(),
            _collection: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl<T: DeserializeOwned> VectorSource for JsonFileSource<T> {
    type Collection = T;

    fn load(&self) -> Result<T, CompareError> {
        let data = fs::read(&self.path).map_err(|source| CompareError::InputUnavailable {
            label: self.label.clone(),
            path: self.path.clone(),
            source,
        })?;
        tracing::debug!(
            "Read {} bytes of {} input from {}",
            data.len(),
            self.label,
            self.path.display()
        );
        serde_json::from_slice(&data).map_err(|source| CompareError::InputMalformed {
            label: self.label.clone(),
            path: self.path.clone(),
            source,
        })
    }
}

/// Writes the report to a single file, replacing any previous content.
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ReportSink for FileSink {
    fn write_report(&self, report: &str) -> Result<(), CompareError> {
        fs::write(&self.path, report).map_err(|source| CompareError::OutputUnwritable {
            path: self.path.clone(),
            source,
        })
    }
}
