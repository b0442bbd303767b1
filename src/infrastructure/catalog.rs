use crate::domain::models::Item;
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;
use std::path::PathBuf;

/// Source of the item catalog. Loaded once before the first frame; the app
/// treats a failed load as an empty catalog rather than crashing.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn load(&self) -> Result<Vec<Item>>;

    /// Human-readable origin shown in the footer ("built-in", a file path).
    fn describe(&self) -> String;
}

#[derive(Debug, Default, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    items: Vec<Item>,
}

/// Catalog backed by a TOML file of `[[items]]` records.
pub struct FileCatalog {
    path: PathBuf,
}

impl FileCatalog {
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl CatalogSource for FileCatalog {
    async fn load(&self) -> Result<Vec<Item>> {
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("reading catalog file {}", self.path.display()))?;
        let file: CatalogFile = toml::from_str(&content)
            .with_context(|| format!("parsing catalog file {}", self.path.display()))?;
        Ok(file.items)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Fallback catalog used when no file is configured, so the picker is
/// usable out of the box.
pub struct BuiltinCatalog;

#[async_trait]
impl CatalogSource for BuiltinCatalog {
    async fn load(&self) -> Result<Vec<Item>> {
        Ok(builtin_items())
    }

    fn describe(&self) -> String {
        "built-in".to_string()
    }
}

#[must_use]
pub fn builtin_items() -> Vec<Item> {
    vec![
        Item::new("Apple", "🍎"),
        Item::new("Banana", "🍌"),
        Item::new("Avocado", "🥑"),
        Item::new("Cherry", "🍒"),
        Item::new("Grape", "🍇"),
        Item::new("Lemon", "🍋"),
        Item::new("Mango", "🥭"),
        Item::new("Peach", "🍑"),
        Item::new("Pineapple", "🍍"),
        Item::new("Strawberry", "🍓"),
        Item::new("Watermelon", "🍉"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn loads_items_from_toml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[[items]]
name = "Apple"
image = "img1"

[[items]]
name = "Banana"
image = "img2"
"#
        )
        .unwrap();

        let source = FileCatalog::new(file.path().to_path_buf());
        let items = source.load().await.unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0], Item::new("Apple", "img1"));
        assert_eq!(items[1], Item::new("Banana", "img2"));
    }

    #[tokio::test]
    async fn empty_file_yields_empty_catalog() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let source = FileCatalog::new(file.path().to_path_buf());
        assert!(source.load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = FileCatalog::new(dir.path().join("nope.toml"));
        assert!(source.load().await.is_err());
    }

    #[tokio::test]
    async fn invalid_toml_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "items = not toml").unwrap();

        let source = FileCatalog::new(file.path().to_path_buf());
        assert!(source.load().await.is_err());
    }

    #[tokio::test]
    async fn builtin_catalog_is_nonempty_and_name_unique() {
        let items = BuiltinCatalog.load().await.unwrap();
        assert!(!items.is_empty());

        let mut names: Vec<_> = items.iter().map(|i| i.name.clone()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), items.len());
    }
}
