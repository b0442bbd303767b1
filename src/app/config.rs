use crate::theme::PaletteType;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// User configuration, read from `~/.config/chipper/config.toml`. Missing
/// or invalid config falls back to defaults; it never blocks startup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Path to a TOML catalog file. Unset means the built-in demo catalog.
    pub catalog: Option<PathBuf>,
    pub palette: Option<PaletteType>,
}

pub fn config_path() -> Option<PathBuf> {
    home::home_dir().map(|mut path| {
        path.push(".config");
        path.push("chipper");
        path.push("config.toml");
        path
    })
}

impl AppConfig {
    #[must_use]
    pub fn load() -> Self {
        if let Some(path) = config_path() {
            if path.exists() {
                if let Ok(content) = std::fs::read_to_string(path) {
                    if let Ok(config) = toml::from_str::<AppConfig>(&content) {
                        return config;
                    }
                }
            }
        }
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_config() {
        let config: AppConfig = toml::from_str(
            r#"
catalog = "/tmp/items.toml"
palette = "nord"
"#,
        )
        .unwrap();

        assert_eq!(config.catalog, Some(PathBuf::from("/tmp/items.toml")));
        assert_eq!(config.palette, Some(PaletteType::Nord));
    }

    #[test]
    fn empty_config_is_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
    }
}
