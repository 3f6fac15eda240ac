use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::debug;
use uuid::Uuid;

use crate::error::{Result, StoreError};

/// File-backed store for the single pricing-engine config document.
///
/// The document path is injected at construction; nothing else in the
/// system decides where the document lives.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    /// Create a store bound to the given document path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the stored document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored document as raw bytes.
    ///
    /// The content is returned verbatim and is not re-parsed: a file that
    /// was corrupted out-of-band is still served as-is.
    ///
    /// # Errors
    ///
    /// [`StoreError::NotFound`] when no document has been written yet,
    /// [`StoreError::Io`] for any other filesystem failure.
    pub async fn read_document(&self) -> Result<Vec<u8>> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|e| StoreError::from_io(&self.path, e))?;
        debug!(path = %self.path.display(), len = bytes.len(), "config document read");
        Ok(bytes)
    }

    /// Persist an already-parsed JSON document.
    ///
    /// The value is serialized with 2-space indentation, the parent
    /// directory is created if missing, and the file is replaced through a
    /// temporary sibling plus rename so readers never observe a partially
    /// written document.
    ///
    /// # Errors
    ///
    /// [`StoreError::Io`] when directory creation, the temporary write, or
    /// the rename fails. No failure leaves a partially written document in
    /// place of the old one.
    pub async fn write_document(&self, value: &Value) -> Result<()> {
        let pretty =
            serde_json::to_string_pretty(value).map_err(|e| StoreError::Serialize { source: e })?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(|e| StoreError::from_io(parent, e))?;
            }
        }

        let tmp = self.temp_path();
        tokio::fs::write(&tmp, pretty.as_bytes())
            .await
            .map_err(|e| StoreError::from_io(&tmp, e))?;

        if let Err(e) = tokio::fs::rename(&tmp, &self.path).await {
            // The temp file is ours alone; clean it up on the failure path.
            let _ = tokio::fs::remove_file(&tmp).await;
            return Err(StoreError::from_io(&self.path, e));
        }

        debug!(path = %self.path.display(), len = pretty.len(), "config document written");
        Ok(())
    }

    /// Temporary sibling path used for atomic replacement.
    ///
    /// Lives in the document's directory so the final rename never crosses
    /// a filesystem boundary.
    fn temp_path(&self) -> PathBuf {
        let file_name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "document".to_string());
        self.path
            .with_file_name(format!(".{}.{}.tmp", file_name, Uuid::new_v4()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn store_in(dir: &tempfile::TempDir) -> ConfigStore {
        ConfigStore::new(dir.path().join("configservice").join("PRICING_ENGINE.json"))
    }

    #[tokio::test]
    async fn read_missing_document_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let err = store.read_document().await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));
        assert_eq!(err.errno_code(), "ENOENT");
    }

    #[tokio::test]
    async fn write_then_read_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let value = json!({ "tiers": [1, 2, 3], "active": true });
        store.write_document(&value).await.unwrap();

        let bytes = store.read_document().await.unwrap();
        let read_back: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(read_back, value);
    }

    #[tokio::test]
    async fn write_pretty_prints_with_two_space_indent() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.write_document(&json!({ "a": 1 })).await.unwrap();

        let bytes = store.read_document().await.unwrap();
        assert_eq!(String::from_utf8(bytes).unwrap(), "{\n  \"a\": 1\n}");
    }

    #[tokio::test]
    async fn write_creates_missing_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let store = ConfigStore::new(dir.path().join("a").join("b").join("doc.json"));

        store.write_document(&json!(null)).await.unwrap();
        assert!(store.path().exists());
    }

    #[tokio::test]
    async fn write_overwrites_previous_document() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.write_document(&json!({ "v": 1 })).await.unwrap();
        store.write_document(&json!({ "v": 2 })).await.unwrap();

        let bytes = store.read_document().await.unwrap();
        let value: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(value, json!({ "v": 2 }));
    }

    #[tokio::test]
    async fn corrupt_file_is_read_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        std::fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        std::fs::write(store.path(), b"{not json at all").unwrap();

        let bytes = store.read_document().await.unwrap();
        assert_eq!(bytes, b"{not json at all");
    }

    #[tokio::test]
    async fn write_leaves_no_temp_files_behind() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.write_document(&json!({ "v": 1 })).await.unwrap();

        let entries: Vec<_> = std::fs::read_dir(store.path().parent().unwrap())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(entries, vec![std::ffi::OsString::from("PRICING_ENGINE.json")]);
    }
}
