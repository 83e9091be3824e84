use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Mutex;

use super::ConfigError;

/// Where a store's raw text lives. `read` yields `None` when nothing has been
/// written yet.
pub trait ContentProvider {
    fn read(&self) -> Result<Option<String>, ConfigError>;
    fn write(&self, content: &str) -> Result<(), ConfigError>;
}

pub struct FileContentProvider {
    path: PathBuf,
}

impl FileContentProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ContentProvider for FileContentProvider {
    fn read(&self) -> Result<Option<String>, ConfigError> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn write(&self, content: &str) -> Result<(), ConfigError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}

#[derive(Default)]
pub struct MemoryContentProvider {
    content: Mutex<Option<String>>,
}

impl MemoryContentProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_content(content: &str) -> Self {
        Self {
            content: Mutex::new(Some(content.to_string())),
        }
    }
}

impl ContentProvider for MemoryContentProvider {
    fn read(&self) -> Result<Option<String>, ConfigError> {
        let content = self
            .content
            .lock()
            .map_err(|_| ConfigError::Invalid("content lock poisoned".to_string()))?;
        Ok(content.clone())
    }

    fn write(&self, content: &str) -> Result<(), ConfigError> {
        let mut current = self
            .content
            .lock()
            .map_err(|_| ConfigError::Invalid("content lock poisoned".to_string()))?;
        *current = Some(content.to_string());
        Ok(())
    }
}
