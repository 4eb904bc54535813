use std::sync::Arc;

use url::Url;
use variant_lang_ast::HashMap;

use crate::result::DriverError;

/// Where the driver reads sources from: the file system for the CLI, or an
/// in-memory overlay for tests and embedders.
pub trait FileSource {
    /// Check if a file with the given URI exists
    fn exists(&mut self, uri: &Url) -> bool;
    /// Read the contents of a file with the given URI
    fn read_to_string(&mut self, uri: &Url) -> Result<String, DriverError>;
    /// Write the contents of a file with the given URI
    fn write_string(&mut self, uri: &Url, source: &str) -> Result<(), DriverError>;
}

/// A file source that reads from and writes to the file system
#[derive(Default)]
pub struct FileSystemSource;

impl FileSource for FileSystemSource {
    fn exists(&mut self, uri: &Url) -> bool {
        match uri.to_file_path() {
            Ok(path) => path.exists(),
            Err(()) => false,
        }
    }

    fn read_to_string(&mut self, uri: &Url) -> Result<String, DriverError> {
        let path = uri
            .to_file_path()
            .map_err(|()| DriverError::FileNotFound(uri.clone()))?;
        let source = std::fs::read_to_string(&path).map_err(Arc::new).map_err(DriverError::Io)?;
        // Depending on how git is configured on Windows, it may check out Unix
        // line endings (\n) as Windows line endings (\r\n). To have identical
        // source code spans on all platforms, we normalize to \n.
        Ok(source.replace("\r\n", "\n"))
    }

    fn write_string(&mut self, uri: &Url, source: &str) -> Result<(), DriverError> {
        let path = uri
            .to_file_path()
            .map_err(|()| DriverError::FileNotFound(uri.clone()))?;
        std::fs::write(path, source).map_err(Arc::new).map_err(DriverError::Io)
    }
}

/// A file source that keeps all files in memory
#[derive(Default)]
pub struct InMemorySource {
    files: HashMap<Url, String>,
}

impl InMemorySource {
    pub fn new() -> Self {
        InMemorySource::default()
    }

    pub fn insert(&mut self, uri: Url, source: impl Into<String>) {
        self.files.insert(uri, source.into());
    }
}

impl FileSource for InMemorySource {
    fn exists(&mut self, uri: &Url) -> bool {
        self.files.contains_key(uri)
    }

    fn read_to_string(&mut self, uri: &Url) -> Result<String, DriverError> {
        self.files.get(uri).cloned().ok_or_else(|| DriverError::FileNotFound(uri.clone()))
    }

    fn write_string(&mut self, uri: &Url, source: &str) -> Result<(), DriverError> {
        self.files.insert(uri.clone(), source.to_owned());
        Ok(())
    }
}
