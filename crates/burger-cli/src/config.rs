use std::path::{Path, PathBuf};

use burger::ApiUrl;
use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Api {
    pub url: ApiUrl,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Log {
    /// Filter directives, `warn` or `burger=debug,info`
    pub level: String,
}

impl Default for Log {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    pub api: Api,
    pub log: Log,
}

impl Settings {
    /// Defaults, overridden by the config file, overridden by `BURGER_*` env
    /// vars (`BURGER_API__URL`, `BURGER_LOG__LEVEL`)
    ///
    /// An explicitly given config file must exist; the one in the work dir is
    /// optional.
    pub fn load(work_dir: &Path, config_file: Option<&Path>) -> Result<Self, ConfigError> {
        let default = Self::default();

        let (config_file, required): (PathBuf, bool) = match config_file {
            Some(path) => (path.to_path_buf(), true),
            None => (work_dir.join(CONFIG_FILE_NAME), false),
        };

        let config: Config = Config::builder()
            // use defaults
            .add_source(Config::try_from(&default)?)
            // override with file contents
            .add_source(File::from(config_file).required(required))
            .add_source(
                Environment::with_prefix("BURGER")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        config.try_deserialize()
    }
}
