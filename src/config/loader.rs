use super::types::{Config, MAX_FADE_STEP, MIN_FADE_STEP};
use anyhow::{bail, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

pub struct ConfigLoader {
    config_path: PathBuf,
}

impl ConfigLoader {
    pub fn new() -> Self {
        let config_path = Self::get_config_path();
        Self { config_path }
    }

    pub fn with_path(config_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
        }
    }

    fn get_config_path() -> PathBuf {
        // Config lives next to the executable
        let exe_path = std::env::current_exe()
            .unwrap_or_else(|_| PathBuf::from("."));

        let exe_dir = exe_path.parent()
            .unwrap_or_else(|| Path::new("."));

        exe_dir.join("config.toml")
    }

    pub fn path(&self) -> &Path {
        &self.config_path
    }

    pub fn load(&self) -> Result<Config> {
        if !self.config_path.exists() {
            info!("Config file not found, creating default config at {:?}", self.config_path);
            let config = Config::default();
            self.save(&config)?;
            return Ok(config);
        }

        let contents = fs::read_to_string(&self.config_path)
            .context("Failed to read config file")?;

        let config: Config = toml::from_str(&contents)
            .context("Failed to parse config file")?;

        Self::validate(&config)?;

        info!("Loaded configuration from {:?}", self.config_path);
        Ok(config)
    }

    pub fn save(&self, config: &Config) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent)
                .context("Failed to create config directory")?;
        }

        let toml_string = toml::to_string_pretty(config)
            .context("Failed to serialize config")?;

        fs::write(&self.config_path, toml_string)
            .context("Failed to write config file")?;

        info!("Saved configuration to {:?}", self.config_path);
        Ok(())
    }

    pub fn update_property<F>(&self, mut updater: F) -> Result<()>
    where
        F: FnMut(&mut Config),
    {
        let mut config = self.load()?;
        updater(&mut config);
        self.save(&config)?;
        Ok(())
    }

    fn validate(config: &Config) -> Result<()> {
        let step = config.label.fade_step;
        if !(MIN_FADE_STEP..=MAX_FADE_STEP).contains(&step) {
            bail!(
                "label.fade_step must be between {} and {}, got {}",
                MIN_FADE_STEP,
                MAX_FADE_STEP,
                step
            );
        }
        if config.columns == 0 {
            bail!("columns must be at least 1");
        }
        Ok(())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
