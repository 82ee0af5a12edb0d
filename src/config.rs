use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::clipboard::Backend;

const DEFAULT_COPIED_FLASH_MS: u64 = 800;
const DEFAULT_CLIPBOARD_TIMEOUT_MS: u64 = 2000;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConfigFile {
    copied_flash_ms: Option<u64>,
    clipboard_timeout_ms: Option<u64>,
    clipboard_backends: Option<Vec<String>>,
    log_file: Option<String>,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub copied_flash: Duration,
    pub clipboard_timeout: Duration,
    pub clipboard_backends: Vec<Backend>,
    pub log_file: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            copied_flash: Duration::from_millis(DEFAULT_COPIED_FLASH_MS),
            clipboard_timeout: Duration::from_millis(DEFAULT_CLIPBOARD_TIMEOUT_MS),
            clipboard_backends: Backend::DEFAULT_ORDER.to_vec(),
            log_file: config_dir().join("palette.log"),
        }
    }
}

fn config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_default()
        .join(".config/shortcut-palette")
}

pub fn default_config_path() -> PathBuf {
    config_dir().join("config.json")
}

pub fn load_config(path: Option<&Path>) -> AppConfig {
    let path = path.map(Path::to_path_buf).unwrap_or_else(default_config_path);
    let config_file = load_config_file(&path).unwrap_or_default();
    resolve(config_file)
}

fn load_config_file(path: &Path) -> Option<ConfigFile> {
    let content = std::fs::read_to_string(path).ok()?;
    serde_json::from_str(&content).ok()
}

fn resolve(file: ConfigFile) -> AppConfig {
    let defaults = AppConfig::default();
    let clipboard_backends = match file.clipboard_backends {
        Some(names) => names.iter().filter_map(|name| Backend::from_name(name)).collect(),
        None => defaults.clipboard_backends,
    };

    AppConfig {
        copied_flash: file
            .copied_flash_ms
            .map(Duration::from_millis)
            .unwrap_or(defaults.copied_flash),
        clipboard_timeout: file
            .clipboard_timeout_ms
            .map(Duration::from_millis)
            .unwrap_or(defaults.clipboard_timeout),
        clipboard_backends,
        log_file: file
            .log_file
            .as_deref()
            .map(expand_tilde)
            .unwrap_or(defaults.log_file),
    }
}

fn expand_tilde(path: &str) -> PathBuf {
    match (path.strip_prefix("~/"), dirs::home_dir()) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(path),
    }
}
