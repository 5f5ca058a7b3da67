//! Store persistente em SQLite.

use std::path::Path;

use async_trait::async_trait;
use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};
use tokio::sync::Mutex;

use super::KeyValueStore;
use crate::MetricsResult;

/// Store chave-valor sobre uma tabela SQLite.
pub struct SqliteStore {
    // Mutex do tokio: rusqlite::Connection não é Sync
    conn: Mutex<Connection>,
}

impl SqliteStore {
    /// Cria ou abre o banco em `db_path`.
    pub fn new(db_path: &Path) -> MetricsResult<Self> {
        if let Some(parent) = db_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(db_path)?;
        Self::with_connection(conn)
    }

    /// Cria um banco em memória.
    pub fn in_memory() -> MetricsResult<Self> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> MetricsResult<Self> {
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS entries (
                key TEXT PRIMARY KEY,
                value BLOB NOT NULL,
                updated_at TEXT NOT NULL
            );
        "#,
        )?;

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Número de entradas.
    pub async fn len(&self) -> MetricsResult<usize> {
        let conn = self.conn.lock().await;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM entries", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Indica se o store está vazio.
    pub async fn is_empty(&self) -> MetricsResult<bool> {
        Ok(self.len().await? == 0)
    }
}

#[async_trait]
impl KeyValueStore for SqliteStore {
    async fn put(&self, key: &str, value: Vec<u8>) -> MetricsResult<()> {
        let conn = self.conn.lock().await;
        conn.execute(
            "INSERT INTO entries (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![key, value, Utc::now().to_rfc3339()],
        )?;
        Ok(())
    }

    async fn get(&self, key: &str) -> MetricsResult<Option<Vec<u8>>> {
        let conn = self.conn.lock().await;
        let value = conn
            .query_row(
                "SELECT value FROM entries WHERE key = ?1",
                params![key],
                |row| row.get::<_, Vec<u8>>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn name(&self) -> &'static str {
        "sqlite"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_store() -> (SqliteStore, TempDir) {
        let dir = TempDir::new().unwrap();
        let store = SqliteStore::new(&dir.path().join("metrics.db")).unwrap();
        (store, dir)
    }

    #[tokio::test]
    async fn test_create_store() {
        let (store, _dir) = create_test_store();
        assert!(store.is_empty().await.unwrap());
    }

    #[tokio::test]
    async fn test_put_get() {
        let (store, _dir) = create_test_store();
        store.put("k", b"value".to_vec()).await.unwrap();

        assert_eq!(store.get("k").await.unwrap(), Some(b"value".to_vec()));
        assert!(store.get("other").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_upsert_replaces_value() {
        let (store, _dir) = create_test_store();
        store.put("k", b"v1".to_vec()).await.unwrap();
        store.put("k", b"v2".to_vec()).await.unwrap();

        assert_eq!(store.get("k").await.unwrap(), Some(b"v2".to_vec()));
        assert_eq!(store.len().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_persists_across_connections() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("metrics.db");

        {
            let store = SqliteStore::new(&path).unwrap();
            store.put("k", b"v".to_vec()).await.unwrap();
        }

        let reopened = SqliteStore::new(&path).unwrap();
        assert_eq!(reopened.get("k").await.unwrap(), Some(b"v".to_vec()));
    }

    #[tokio::test]
    async fn test_in_memory() {
        let store = SqliteStore::in_memory().unwrap();
        store.put("k", vec![0, 1, 2]).await.unwrap();
        assert_eq!(store.get("k").await.unwrap(), Some(vec![0, 1, 2]));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_writers_share_connection() {
        let store = std::sync::Arc::new(SqliteStore::in_memory().unwrap());

        let mut handles = Vec::new();
        for i in 0..16 {
            let store = std::sync::Arc::clone(&store);
            handles.push(tokio::spawn(async move {
                store.put(&format!("key-{}", i % 4), vec![i as u8]).await
            }));
        }
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        assert_eq!(store.len().await.unwrap(), 4);
        assert!(store.get("key-0").await.unwrap().is_some());
    }
}
