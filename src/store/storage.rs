use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use log::error;

use crate::models::Task;

/// Durable copy of the task collection: one named file holding the whole
/// collection as a JSON array. Reads and writes are best-effort; the
/// in-memory collection stays authoritative for the session.
pub struct TaskStorage {
    path: PathBuf,
}

impl TaskStorage {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        self.path.as_path()
    }

    /// Read the saved collection. A missing file is simply an empty
    /// collection; unreadable or corrupt data is logged and treated the same.
    pub fn load(&self) -> Vec<Task> {
        if !self.path.exists() {
            return Vec::new();
        }

        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) => {
                error!(
                    "Failed to read tasks from {}: {err}",
                    self.path.display()
                );
                return Vec::new();
            }
        };

        match serde_json::from_str(&contents) {
            Ok(tasks) => tasks,
            Err(err) => {
                error!("Failed to parse saved tasks, starting empty: {err}");
                Vec::new()
            }
        }
    }

    /// Write the collection. Failures are logged and dropped so a broken
    /// disk never rolls back an in-memory mutation.
    pub fn save(&self, tasks: &[Task]) {
        if let Err(err) = self.try_save(tasks) {
            error!("Failed to persist tasks: {err:#}");
        }
    }

    fn try_save(&self, tasks: &[Task]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("failed to create data directory {}", parent.display())
            })?;
        }

        let serialized = serde_json::to_string_pretty(tasks)?;
        fs::write(&self.path, serialized)
            .with_context(|| format!("failed to write tasks to {}", self.path.display()))
    }
}
