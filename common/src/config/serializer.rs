use serde::{Deserialize, Serialize};

use super::ConfigError;

pub trait ConfigSerializer<T> {
    fn serialize(&self, value: &T) -> Result<String, ConfigError>;
    fn deserialize(&self, content: &str) -> Result<T, ConfigError>;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct YamlSerializer;

impl<T> ConfigSerializer<T> for YamlSerializer
where
    T: for<'de> Deserialize<'de> + Serialize,
{
    fn serialize(&self, value: &T) -> Result<String, ConfigError> {
        Ok(serde_yaml_ng::to_string(value)?)
    }

    fn deserialize(&self, content: &str) -> Result<T, ConfigError> {
        Ok(serde_yaml_ng::from_str(content)?)
    }
}
