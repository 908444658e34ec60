#[cfg(test)]
#[path = "history_test.rs"]
mod tests;

use std::path;

use anyhow::Result;
use async_trait::async_trait;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

use crate::domain::models::Turn;

/// Durable, append-only list of turns. Every operation is fail-soft: storage
/// problems are logged and read back as an empty or shorter history, they are
/// never handed to the caller.
#[async_trait]
pub trait HistoryStore {
    async fn append(&self, turn: Turn);

    async fn load(&self) -> Vec<Turn>;

    async fn clear(&self);

    async fn has_history(&self) -> bool {
        return !self.load().await.is_empty();
    }
}

pub type HistoryBox = Box<dyn HistoryStore + Send + Sync>;

/// Keeps the conversation as a JSON array of `{ role, content }` records in a
/// single file.
pub struct FileHistory {
    pub file_path: path::PathBuf,
    lock: Mutex<()>,
}

/// Parses the raw slot, keeping every record that is a valid turn.
pub fn parse_slot(payload: &str) -> Vec<Turn> {
    let records = match serde_json::from_str::<serde_json::Value>(payload) {
        Ok(serde_json::Value::Array(records)) => records,
        Ok(_) => {
            tracing::warn!("History slot is not a list, ignoring it");
            return vec![];
        }
        Err(err) => {
            tracing::warn!(error = ?err, "History slot is not valid JSON, ignoring it");
            return vec![];
        }
    };

    let total = records.len();
    let turns = records
        .into_iter()
        .filter_map(|record| {
            return serde_json::from_value::<Turn>(record).ok();
        })
        .collect::<Vec<Turn>>();

    if turns.len() != total {
        tracing::warn!(
            dropped = total - turns.len(),
            "Dropped invalid records from history"
        );
    }

    return turns;
}

impl FileHistory {
    pub fn new(file_path: path::PathBuf) -> FileHistory {
        return FileHistory {
            file_path,
            lock: Mutex::new(()),
        };
    }

    async fn read(&self) -> Vec<Turn> {
        if !self.file_path.exists() {
            return vec![];
        }

        match fs::read_to_string(&self.file_path).await {
            Ok(payload) => return parse_slot(&payload),
            Err(err) => {
                tracing::error!(error = ?err, path = ?self.file_path, "Failed to read history");
                return vec![];
            }
        }
    }

    // The full list goes to a sibling file first and is renamed over the slot,
    // so a failed write leaves the previous history in place.
    async fn write(&self, turns: &[Turn]) -> Result<()> {
        let payload = serde_json::to_string(turns)?;

        if let Some(parent) = self.file_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).await?;
            }
        }

        let tmp_path = self.file_path.with_extension("json.tmp");
        let mut file = fs::File::create(&tmp_path).await?;
        file.write_all(payload.as_bytes()).await?;
        file.sync_all().await?;
        fs::rename(&tmp_path, &self.file_path).await?;

        return Ok(());
    }
}

#[async_trait]
impl HistoryStore for FileHistory {
    async fn append(&self, turn: Turn) {
        let _guard = self.lock.lock().await;

        let mut turns = self.read().await;
        turns.push(turn);

        if let Err(err) = self.write(&turns).await {
            tracing::error!(error = ?err, path = ?self.file_path, "Failed to persist history");
            return;
        }

        tracing::debug!(turns = turns.len(), "History saved");
    }

    async fn load(&self) -> Vec<Turn> {
        let _guard = self.lock.lock().await;
        return self.read().await;
    }

    async fn clear(&self) {
        let _guard = self.lock.lock().await;
        if !self.file_path.exists() {
            return;
        }

        if let Err(err) = fs::remove_file(&self.file_path).await {
            tracing::error!(error = ?err, path = ?self.file_path, "Failed to remove history, emptying it instead");
            if let Err(err) = self.write(&[]).await {
                tracing::error!(error = ?err, path = ?self.file_path, "Failed to clear history");
            }
        }
    }
}
