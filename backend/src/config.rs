use std::path::{Path, PathBuf};

use crate::error::ConfigError;

pub const DEFAULT_DIST_DIR: &str = "../frontend/dist";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub dist_dir: PathBuf,
    pub port: u16,
    pub environment: String,
}

impl ServerConfig {
    /// Reads `SITE_DIST_DIR`, `ENVIRONMENT` and `PORT` from the process
    /// environment. Call `dotenvy::dotenv()` first to pick up a `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = lookup("ENVIRONMENT").unwrap_or_else(|| "development".to_string());
        let port = match lookup("PORT") {
            Some(value) => value
                .trim()
                .parse::<u16>()
                .map_err(|source| ConfigError::InvalidPort { value, source })?,
            None => default_port(&environment),
        };
        let dist_dir = lookup("SITE_DIST_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DIST_DIR));

        Ok(Self {
            dist_dir,
            port,
            environment,
        })
    }

    pub fn index_file(&self) -> PathBuf {
        self.dist_dir.join("index.html")
    }

    /// Fails when the site bundle is not where the config points.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.dist_dir.is_dir() {
            return Err(ConfigError::MissingDistDir(self.dist_dir.clone()));
        }
        let index = self.index_file();
        if !index.is_file() {
            return Err(ConfigError::MissingIndex(index));
        }
        Ok(())
    }

    pub fn with_dist_dir(mut self, dist_dir: impl AsRef<Path>) -> Self {
        self.dist_dir = dist_dir.as_ref().to_path_buf();
        self
    }
}

fn default_port(environment: &str) -> u16 {
    match environment {
        "staging" => 3100,
        _ => 3000,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_without_environment() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.environment, "development");
        assert_eq!(config.dist_dir, PathBuf::from(DEFAULT_DIST_DIR));
    }

    #[test]
    fn staging_uses_its_own_port() {
        let config = ServerConfig::from_lookup(lookup(&[("ENVIRONMENT", "staging")])).unwrap();
        assert_eq!(config.port, 3100);
    }

    #[test]
    fn explicit_port_wins() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("ENVIRONMENT", "staging"),
            ("PORT", "8080"),
            ("SITE_DIST_DIR", "/srv/site"),
        ]))
        .unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.index_file(), PathBuf::from("/srv/site/index.html"));
    }

    #[test]
    fn bad_port_is_rejected() {
        let err = ServerConfig::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort { ref value, .. } if value == "eighty"));
    }

    #[test]
    fn validate_requires_index() {
        let dir = tempfile::tempdir().unwrap();
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap().with_dist_dir(dir.path());
        assert!(matches!(config.validate(), Err(ConfigError::MissingIndex(_))));

        std::fs::write(dir.path().join("index.html"), "<html></html>").unwrap();
        assert!(config.validate().is_ok());

        let gone = config.with_dist_dir(dir.path().join("missing"));
        assert!(matches!(gone.validate(), Err(ConfigError::MissingDistDir(_))));
    }
}
