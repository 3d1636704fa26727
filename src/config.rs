use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the service hosting /uploads and /upload
    pub file_service_url: String,
    /// Base URL of the service hosting /process
    pub process_service_url: String,
    /// Directory where downloaded results are written
    pub download_dir: String,
    /// Embedding model name sent with generation requests
    #[serde(default = "default_embedding_model")]
    pub embedding_model: String,
    /// Vector store directory sent with generation requests
    #[serde(default = "default_persist_directory")]
    pub persist_directory: String,
    /// Generation model name sent with generation requests
    #[serde(default = "default_model_name")]
    pub model_name: String,
    /// Timeout for upload and generation requests
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_embedding_model() -> String {
    "all-MiniLM-L6-v2".to_string()
}

fn default_persist_directory() -> String {
    "vector_store".to_string()
}

fn default_model_name() -> String {
    "llama3".to_string()
}

fn default_request_timeout() -> u64 {
    300
}

impl Default for Config {
    fn default() -> Self {
        Self {
            file_service_url: "http://localhost:5001".to_string(),
            process_service_url: "http://localhost:5000".to_string(),
            download_dir: String::new(),
            embedding_model: default_embedding_model(),
            persist_directory: default_persist_directory(),
            model_name: default_model_name(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

impl Config {
    pub fn config_dir() -> Option<PathBuf> {
        let home = env::var("HOME").ok()?;
        Some(PathBuf::from(home).join(".patent-tui"))
    }

    fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.json"))
    }

    pub fn load() -> Option<Config> {
        let config_path = Self::config_path()?;
        if !config_path.exists() {
            return None;
        }

        let contents = fs::read_to_string(&config_path).ok()?;
        serde_json::from_str(&contents).ok()
    }

    /// Save the config to disk
    pub fn save(&self) -> anyhow::Result<()> {
        let config_dir = Self::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        if !config_dir.exists() {
            fs::create_dir_all(&config_dir)?;
        }

        let config_path = Self::config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config path"))?;

        let contents = serde_json::to_string_pretty(self)?;
        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// Effective download directory: configured path, or the current directory
    pub fn download_path(&self) -> PathBuf {
        if self.download_dir.is_empty() {
            PathBuf::from(".")
        } else {
            PathBuf::from(&self.download_dir)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_backend() {
        let config = Config::default();
        assert_eq!(config.embedding_model, "all-MiniLM-L6-v2");
        assert_eq!(config.persist_directory, "vector_store");
        assert_eq!(config.model_name, "llama3");
        assert_eq!(config.request_timeout_secs, 300);
    }

    #[test]
    fn test_generation_defaults_survive_partial_config() {
        let json = r#"{
            "file_service_url": "http://example:5001",
            "process_service_url": "http://example:5000",
            "download_dir": ""
        }"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.file_service_url, "http://example:5001");
        assert_eq!(config.model_name, "llama3");
    }

    #[test]
    fn test_download_path_fallback() {
        let mut config = Config::default();
        assert_eq!(config.download_path(), PathBuf::from("."));
        config.download_dir = "/tmp/results".to_string();
        assert_eq!(config.download_path(), PathBuf::from("/tmp/results"));
    }
}
