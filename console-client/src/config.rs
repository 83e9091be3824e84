use common::config::{Validate, YamlStore};
use common::games::snake::SnakeSettings;
use serde::{Deserialize, Serialize};

const CONFIG_FILE_NAME: &str = "snake_console_config.yaml";

pub fn get_config_path() -> String {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME).to_string_lossy().into_owned();
    }
    CONFIG_FILE_NAME.to_string()
}

pub fn get_config_store(path: &str) -> YamlStore<ClientConfig> {
    YamlStore::from_yaml_file(path)
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct ClientConfig {
    pub snake: SnakeSettings,
    pub frames_per_second: u32,
    pub progress_file: String,
    #[serde(default = "default_sound_enabled")]
    pub sound_enabled: bool,
}

fn default_sound_enabled() -> bool {
    true
}

impl Validate for ClientConfig {
    fn validate(&self) -> Result<(), String> {
        self.snake.validate()?;
        if self.frames_per_second == 0 || self.frames_per_second > 240 {
            return Err("frames_per_second must be between 1 and 240".to_string());
        }
        if self.progress_file.trim().is_empty() {
            return Err("progress_file must not be empty".to_string());
        }
        Ok(())
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            snake: SnakeSettings::default(),
            frames_per_second: 60,
            progress_file: "snake_progress.yaml".to_string(),
            sound_enabled: true,
        }
    }
}
