//! Configuration manager.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::telemetry::parse_level;

const DEFAULT_CONFIG_PATH: &str = "config.yaml";
const DEFAULT_NAME: &str = "accounts";
const DEFAULT_LOG_LEVEL: &str = "info";
const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    /// Instance name.
    pub name: String,
    /// Default log level, `RUST_LOG` takes precedence.
    pub log_level: String,
    version: String,
    #[serde(skip)]
    path: PathBuf,
    /// Administrator created on start if its login is free.
    #[serde(skip_serializing)]
    pub bootstrap: Option<Bootstrap>,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_owned(),
            log_level: DEFAULT_LOG_LEVEL.to_owned(),
            version: VERSION.to_owned(),
            path: PathBuf::default(),
            bootstrap: None,
        }
    }
}

/// Initial administrator account.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct Bootstrap {
    pub login: String,
    pub password: String,
    pub name: String,
}

impl std::fmt::Debug for Bootstrap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Bootstrap")
            .field("login", &self.login)
            .field("password", &"[REDACTED]")
            .field("name", &self.name)
            .finish()
    }
}

impl Configuration {
    pub fn path(mut self, path: PathBuf) -> Self {
        self.path = path;
        self
    }

    /// Sets the administrator created on start.
    pub fn bootstrap(mut self, bootstrap: Option<Bootstrap>) -> Self {
        self.bootstrap = bootstrap;
        self
    }

    /// Application version.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Reads the `config.yaml` file from the specified path or the default
    /// location.
    ///
    /// A missing or malformed file falls back to defaults; an unknown log
    /// level is an error.
    pub fn read(self) -> Result<Arc<Self>> {
        let file_path = if self.path.is_file() {
            self.path.clone()
        } else {
            Path::new(DEFAULT_CONFIG_PATH).to_path_buf()
        };

        let mut config = match File::open(&file_path) {
            Ok(file) => match serde_yaml::from_reader::<_, Configuration>(file)
            {
                Ok(config) => config,
                Err(err) => self.error(err),
            },
            Err(err) => self.error(err),
        };

        parse_level(&config.log_level)?;

        // set app version.
        config.version = VERSION.to_owned();
        config.path = file_path;

        Ok(Arc::new(config))
    }

    /// Return a default configuration as fallback.
    fn error(&self, err: impl std::error::Error) -> Self {
        tracing::error!(error = %err, "cannot load configuration file");
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::error::StartupError;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_read_config() {
        let file = write_config(
            "name: staging\nlog_level: debug\nbootstrap:\n  login: root\n  password: Secret1\n  name: Root\n",
        );

        let config = Configuration::default()
            .path(file.path().to_path_buf())
            .read()
            .unwrap();

        assert_eq!(config.name, "staging");
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.version(), VERSION);
        let bootstrap = config.bootstrap.as_ref().unwrap();
        assert_eq!(bootstrap.login, "root");
        assert_eq!(bootstrap.name, "Root");
        assert!(!format!("{bootstrap:?}").contains("Secret1"));
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let file = write_config("name: partial\n");

        let config = Configuration::default()
            .path(file.path().to_path_buf())
            .read()
            .unwrap();

        assert_eq!(config.name, "partial");
        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
        assert_eq!(config.bootstrap, None);
    }

    #[test]
    fn test_malformed_config_falls_back() {
        let file = write_config("name: [unterminated\n");

        let config = Configuration::default()
            .path(file.path().to_path_buf())
            .read()
            .unwrap();

        assert_eq!(config.name, DEFAULT_NAME);
        assert_eq!(config.bootstrap, None);
    }

    #[test]
    fn test_invalid_log_level() {
        let file = write_config("log_level: chatty\n");

        let err = Configuration::default()
            .path(file.path().to_path_buf())
            .read()
            .unwrap_err();
        assert!(matches!(err, StartupError::LogLevel(level) if level == "chatty"));
    }

    #[test]
    fn test_bootstrap_setter_keeps_defaults() {
        let admin = Bootstrap {
            login: "root".into(),
            password: "Secret1".into(),
            name: "Root".into(),
        };

        let config = Configuration::default().bootstrap(Some(admin.clone()));
        assert_eq!(config.bootstrap, Some(admin));
        assert_eq!(config.name, DEFAULT_NAME);
        assert_eq!(config.version(), VERSION);
    }

    #[test]
    fn test_bootstrap_is_never_serialized() {
        let config = Configuration {
            bootstrap: Some(Bootstrap {
                login: "root".into(),
                password: "Secret1".into(),
                name: "Root".into(),
            }),
            ..Default::default()
        };

        let yaml = serde_yaml::to_string(&config).unwrap();
        assert!(!yaml.contains("Secret1"));
        assert!(!yaml.contains("bootstrap"));
    }
}
