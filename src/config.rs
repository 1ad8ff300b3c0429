use anyhow::{Context, Result};
use log::debug;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::format::IconFormat;

pub const ENV_PREFIX: &str = "CCM_";

/// Unknown or malformed values fall back to their defaults instead of failing the load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default, deserialize_with = "lenient_icon_format")]
    pub icon_format: IconFormat,
    #[serde(default = "default_page_size", deserialize_with = "lenient_page_size")]
    pub page_size: usize,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub body_editor: bool,
}

fn default_page_size() -> usize {
    12
}

fn parse_icon_format(value: &str) -> IconFormat {
    IconFormat::parse(value).unwrap_or_else(|| {
        debug!("invalid icon format '{value}', using default");
        IconFormat::default()
    })
}

fn parse_page_size(value: &str) -> usize {
    value
        .trim()
        .parse::<usize>()
        .ok()
        .filter(|n| *n > 0)
        .unwrap_or_else(default_page_size)
}

fn parse_bool(value: &str) -> bool {
    value == "1" || value.eq_ignore_ascii_case("true")
}

fn lenient_icon_format<'de, D: Deserializer<'de>>(d: D) -> Result<IconFormat, D::Error> {
    Ok(match toml::Value::deserialize(d)? {
        toml::Value::String(s) => parse_icon_format(&s),
        _ => IconFormat::default(),
    })
}

fn lenient_page_size<'de, D: Deserializer<'de>>(d: D) -> Result<usize, D::Error> {
    Ok(match toml::Value::deserialize(d)? {
        toml::Value::Integer(n) => usize::try_from(n)
            .ok()
            .filter(|n| *n > 0)
            .unwrap_or_else(default_page_size),
        toml::Value::String(s) => parse_page_size(&s),
        _ => default_page_size(),
    })
}

fn lenient_bool<'de, D: Deserializer<'de>>(d: D) -> Result<bool, D::Error> {
    Ok(match toml::Value::deserialize(d)? {
        toml::Value::Boolean(b) => b,
        toml::Value::Integer(n) => n == 1,
        toml::Value::String(s) => parse_bool(&s),
        _ => false,
    })
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            icon_format: IconFormat::default(),
            page_size: default_page_size(),
            body_editor: false,
        }
    }
}

/// Env var suffixes understood by [`AppConfig::apply_env_map`]
const ENV_KEYS: &[&str] = &["ICON_FORMAT", "PAGE_SIZE", "BODY_EDITOR"];

impl AppConfig {
    /// Load config with layered resolution: defaults → global TOML → local .env → env vars
    pub fn load() -> Result<Self> {
        let mut cfg = Self::default();

        // Layer 1: Global TOML
        if let Some(path) = global_config_path() {
            if path.exists() {
                cfg = Self::from_toml_file(&path)?;
                debug!("loaded global config from {}", path.display());
            }
        }

        // Layer 2: Local .env (in git repo root)
        if let Ok(root) = crate::git::find_repo_root() {
            let env_path = PathBuf::from(&root).join(".env");
            if env_path.exists() {
                let env_map = parse_dotenv(&env_path)?;
                cfg.apply_env_map(&env_map);
                debug!("applied {}", env_path.display());
            }
        }

        // Layer 3: Actual environment variables
        let mut env_map = HashMap::new();
        for suffix in ENV_KEYS {
            let key = format!("{ENV_PREFIX}{suffix}");
            if let Ok(val) = std::env::var(&key) {
                env_map.insert(key, val);
            }
        }
        cfg.apply_env_map(&env_map);

        Ok(cfg)
    }

    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let cfg: AppConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        Ok(cfg)
    }

    /// Apply `CCM_*` keys; malformed values fall back to the defaults
    pub fn apply_env_map(&mut self, map: &HashMap<String, String>) {
        for suffix in ENV_KEYS {
            let key = format!("{ENV_PREFIX}{suffix}");
            let Some(val) = map.get(&key) else {
                continue;
            };
            match *suffix {
                "ICON_FORMAT" => self.icon_format = parse_icon_format(val),
                "PAGE_SIZE" => self.page_size = parse_page_size(val),
                "BODY_EDITOR" => self.body_editor = parse_bool(val),
                _ => {}
            }
        }
    }
}

/// Global config file path
pub fn global_config_path() -> Option<PathBuf> {
    if let Some(override_dir) = std::env::var_os("CCM_CONFIG_HOME") {
        let override_path = PathBuf::from(override_dir);
        if !override_path.as_os_str().is_empty() {
            return Some(override_path.join("commit-composer").join("config.toml"));
        }
    }
    dirs::config_dir().map(|d| d.join("commit-composer").join("config.toml"))
}

fn parse_dotenv(path: &Path) -> Result<HashMap<String, String>> {
    let iter = dotenvy::from_path_iter(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let mut map = HashMap::new();
    for item in iter {
        let (key, val) = item.with_context(|| format!("Failed to parse {}", path.display()))?;
        if key.starts_with(ENV_PREFIX) {
            map.insert(key, val);
        }
    }
    Ok(map)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env_map(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn test_defaults() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.icon_format, IconFormat::Unicode);
        assert_eq!(cfg.page_size, 12);
        assert!(!cfg.body_editor);
    }

    #[test]
    fn test_apply_env_map_parses_values() {
        let mut cfg = AppConfig::default();
        cfg.apply_env_map(&env_map(&[
            ("CCM_ICON_FORMAT", "shortcode"),
            ("CCM_PAGE_SIZE", "5"),
            ("CCM_BODY_EDITOR", "TRUE"),
        ]));
        assert_eq!(cfg.icon_format, IconFormat::Shortcode);
        assert_eq!(cfg.page_size, 5);
        assert!(cfg.body_editor);
    }

    #[test]
    fn test_apply_env_map_falls_back_to_defaults_on_garbage() {
        let mut cfg = AppConfig {
            icon_format: IconFormat::Shortcode,
            page_size: 4,
            body_editor: false,
        };
        cfg.apply_env_map(&env_map(&[
            ("CCM_ICON_FORMAT", "emoji"),
            ("CCM_PAGE_SIZE", "zero"),
            ("OTHER_KEY", "1"),
        ]));
        assert_eq!(cfg.icon_format, IconFormat::Unicode);
        assert_eq!(cfg.page_size, 12);

        cfg.page_size = 4;
        cfg.apply_env_map(&env_map(&[("CCM_PAGE_SIZE", "0")]));
        assert_eq!(cfg.page_size, 12);
    }

    #[test]
    fn test_invalid_toml_values_fall_back_to_defaults() {
        let cfg: AppConfig = toml::from_str(
            "icon_format = \"emoji\"\npage_size = -3\nbody_editor = \"yes please\"\n",
        )
        .expect("invalid values should not fail the parse");
        assert_eq!(cfg.icon_format, IconFormat::Unicode);
        assert_eq!(cfg.page_size, 12);
        assert!(!cfg.body_editor);

        let cfg: AppConfig =
            toml::from_str("icon_format = 3\npage_size = \"7\"\n").expect("parse");
        assert_eq!(cfg.icon_format, IconFormat::Unicode);
        assert_eq!(cfg.page_size, 7);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let cfg: AppConfig = toml::from_str("icon_format = \"none\"\n").expect("parse");
        assert_eq!(cfg.icon_format, IconFormat::None);
        assert_eq!(cfg.page_size, 12);
        assert!(!cfg.body_editor);
    }
}
