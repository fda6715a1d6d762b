//! The on-disk document store.

use std::io;
use std::path::{Path, PathBuf};

/// Thin wrapper around the single document file.
///
/// Reads and writes are deliberately unsynchronized: concurrent uploads
/// race last-writer-wins, and a read concurrent with a write may observe
/// a partially written file. Callers must not add locking around this
/// type; the relaxed behavior is part of the server's contract.
#[derive(Debug, Clone)]
pub struct DocumentStore {
    path: PathBuf,
}

impl DocumentStore {
    /// Create a store for the document at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the full document contents.
    pub async fn load(&self) -> io::Result<Vec<u8>> {
        tokio::fs::read(&self.path).await
    }

    /// Replace the document wholesale with `contents`, creating the file
    /// if it does not exist and truncating it if it does.
    pub async fn replace(&self, contents: &[u8]) -> io::Result<()> {
        tokio::fs::write(&self.path, contents).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn load_fails_before_first_write() {
        let dir = tempfile::tempdir().unwrap();
        let store = DocumentStore::new(dir.path().join("wiki.html"));
        assert!(store.load().await.is_err());
    }

    #[tokio::test]
    async fn replace_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = DocumentStore::new(dir.path().join("wiki.html"));

        store.replace(b"<html>hi</html>").await.unwrap();
        assert_eq!(store.load().await.unwrap(), b"<html>hi</html>");
    }

    #[tokio::test]
    async fn replace_truncates_previous_contents() {
        let dir = tempfile::tempdir().unwrap();
        let store = DocumentStore::new(dir.path().join("wiki.html"));

        store.replace(b"a much longer first version").await.unwrap();
        store.replace(b"short").await.unwrap();
        assert_eq!(store.load().await.unwrap(), b"short");
    }

    #[tokio::test]
    async fn replace_fails_when_parent_is_missing() {
        let dir = tempfile::tempdir().unwrap();
        let store = DocumentStore::new(dir.path().join("no-such-dir").join("wiki.html"));
        assert!(store.replace(b"x").await.is_err());
    }
}
