use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";

pub const KEY_EXPORT_DIR: &str = "export-dir";
pub const KEY_BOM: &str = "bom";

/// Configuration for todoz, stored as config.json next to the data file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodozConfig {
    /// Directory CSV exports are written to. Unset means the current directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export_dir: Option<PathBuf>,

    /// Prefix exported files with a UTF-8 byte-order mark so spreadsheet
    /// importers pick the right encoding
    #[serde(default = "default_write_bom")]
    pub write_bom: bool,
}

fn default_write_bom() -> bool {
    true
}

impl Default for TodozConfig {
    fn default() -> Self {
        Self {
            export_dir: None,
            write_bom: default_write_bom(),
        }
    }
}

impl TodozConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: TodozConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    pub fn keys() -> &'static [&'static str] {
        &[KEY_EXPORT_DIR, KEY_BOM]
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            KEY_EXPORT_DIR => Some(
                self.export_dir
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| ".".to_string()),
            ),
            KEY_BOM => Some(self.write_bom.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            KEY_EXPORT_DIR => {
                let value = value.trim();
                self.export_dir = if value.is_empty() || value == "." {
                    None
                } else {
                    Some(PathBuf::from(value))
                };
                Ok(())
            }
            KEY_BOM => {
                self.write_bom = parse_bool(value).ok_or_else(|| {
                    format!("Invalid value for {}: {} (expected true/false)", key, value)
                })?;
                Ok(())
            }
            other => Err(format!("Unknown config key: {}", other)),
        }
    }

    /// Resolve where exports go, relative paths against `cwd`.
    pub fn export_dir_from(&self, cwd: &Path) -> PathBuf {
        match &self.export_dir {
            Some(dir) if dir.is_absolute() => dir.clone(),
            Some(dir) => cwd.join(dir),
            None => cwd.to_path_buf(),
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = TodozConfig::default();
        assert_eq!(config.export_dir, None);
        assert!(config.write_bom);
    }

    #[test]
    fn test_load_missing_config() {
        let dir = TempDir::new().unwrap();
        let config = TodozConfig::load(dir.path().join("nope")).unwrap();
        assert_eq!(config, TodozConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let mut config = TodozConfig::default();
        config.set(KEY_EXPORT_DIR, "exports").unwrap();
        config.set(KEY_BOM, "off").unwrap();
        config.save(dir.path().join("nested")).unwrap();

        let loaded = TodozConfig::load(dir.path().join("nested")).unwrap();
        assert_eq!(loaded.export_dir, Some(PathBuf::from("exports")));
        assert!(!loaded.write_bom);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let parsed: TodozConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed, TodozConfig::default());
    }

    #[test]
    fn test_get_and_set() {
        let mut config = TodozConfig::default();
        assert_eq!(config.get(KEY_EXPORT_DIR).as_deref(), Some("."));
        assert_eq!(config.get(KEY_BOM).as_deref(), Some("true"));
        assert_eq!(config.get("colour"), None);

        assert!(config.set(KEY_BOM, "maybe").is_err());
        assert!(config.set("colour", "blue").is_err());

        config.set(KEY_EXPORT_DIR, "/tmp/x").unwrap();
        config.set(KEY_EXPORT_DIR, ".").unwrap();
        assert_eq!(config.export_dir, None);
    }

    #[test]
    fn test_export_dir_resolution() {
        let cwd = Path::new("/work");
        let mut config = TodozConfig::default();
        assert_eq!(config.export_dir_from(cwd), PathBuf::from("/work"));
        config.set(KEY_EXPORT_DIR, "out").unwrap();
        assert_eq!(config.export_dir_from(cwd), PathBuf::from("/work/out"));
    }
}
