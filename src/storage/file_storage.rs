use crate::{
    error::{Result, TodoError},
    storage::Storage,
};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

/// File-based storage implementation
///
/// Every slot is a `<key>.json` file inside a `.todo` directory.
pub struct FileStorage {
    root_path: PathBuf,
}

impl FileStorage {
    const TODO_DIR: &'static str = ".todo";

    /// Creates a new FileStorage instance for the given project root
    pub fn new(project_root: impl AsRef<Path>) -> Self {
        Self {
            root_path: project_root.as_ref().join(Self::TODO_DIR),
        }
    }

    pub fn root_path(&self) -> &Path {
        &self.root_path
    }

    fn slot_file(&self, key: &str) -> Result<PathBuf> {
        if key.is_empty()
            || key == "."
            || key == ".."
            || key.contains(|c: char| c == '/' || c == '\\' || c == '\0')
        {
            return Err(TodoError::StorageError(format!(
                "Invalid storage key: {:?}",
                key
            )));
        }
        Ok(self.root_path.join(format!("{}.json", key)))
    }

    async fn ensure_directory_exists(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).await?;
        }
        Ok(())
    }
}

#[async_trait]
impl Storage for FileStorage {
    async fn get_item(&self, key: &str) -> Result<Option<String>> {
        let file_path = self.slot_file(key)?;

        if !file_path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(&file_path).await?;
        Ok(Some(contents))
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let file_path = self.slot_file(key)?;
        self.ensure_directory_exists(&self.root_path).await?;

        fs::write(file_path, value).await?;
        Ok(())
    }

    async fn remove_item(&self, key: &str) -> Result<()> {
        let file_path = self.slot_file(key)?;

        if file_path.exists() {
            fs::remove_file(file_path).await?;
        }
        Ok(())
    }
}
