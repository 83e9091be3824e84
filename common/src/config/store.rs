use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard};

use super::{
    ConfigError, ConfigSerializer, ContentProvider, FileContentProvider, Validate, YamlSerializer,
};

/// Validated, cached key-value document backed by a [`ContentProvider`].
///
/// Used both for read-mostly settings and for player progress that is
/// rewritten after every session.
pub struct YamlStore<T, P = FileContentProvider, S = YamlSerializer> {
    provider: P,
    serializer: S,
    cached: Mutex<Option<T>>,
}

impl<T> YamlStore<T, FileContentProvider, YamlSerializer> {
    pub fn from_yaml_file(path: impl Into<PathBuf>) -> Self {
        Self::new(FileContentProvider::new(path), YamlSerializer)
    }
}

impl<T, P, S> YamlStore<T, P, S> {
    pub fn new(provider: P, serializer: S) -> Self {
        Self {
            provider,
            serializer,
            cached: Mutex::new(None),
        }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    fn cache(&self) -> Result<MutexGuard<'_, Option<T>>, ConfigError> {
        self.cached
            .lock()
            .map_err(|_| ConfigError::Invalid("store cache lock poisoned".to_string()))
    }
}

impl<T, P, S> YamlStore<T, P, S>
where
    T: Clone + Default + Validate,
    P: ContentProvider,
    S: ConfigSerializer<T>,
{
    /// Missing content yields `T::default()`; present content must parse and
    /// validate.
    pub fn load(&self) -> Result<T, ConfigError> {
        let mut cached = self.cache()?;
        if let Some(value) = cached.as_ref() {
            return Ok(value.clone());
        }

        let Some(content) = self.provider.read()? else {
            return Ok(T::default());
        };

        let value = self.serializer.deserialize(&content)?;
        value.validate().map_err(ConfigError::Invalid)?;

        *cached = Some(value.clone());
        Ok(value)
    }

    pub fn save(&self, value: &T) -> Result<(), ConfigError> {
        value.validate().map_err(ConfigError::Invalid)?;

        let content = self.serializer.serialize(value)?;
        self.provider.write(&content)?;

        *self.cache()? = Some(value.clone());
        Ok(())
    }

    pub fn update<F>(&self, apply: F) -> Result<T, ConfigError>
    where
        F: FnOnce(&mut T),
    {
        let mut value = self.load()?;
        apply(&mut value);
        self.save(&value)?;
        Ok(value)
    }
}
