mod storage;

pub use storage::TaskStorage;

use std::{
    path::PathBuf,
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc, RwLock,
    },
};

use chrono::Utc;
use log::info;
use tokio::sync::broadcast;
use uuid::Uuid;

use crate::models::{Priority, Task, TaskPatch};

/// Broadcast payload for store mutations. Subscribers re-read through
/// [`TaskStore::snapshot`]; the revision lets a consumer discard a render it
/// has already caught up past.
#[derive(Debug, Clone, Copy)]
pub struct TasksChanged {
    pub revision: u64,
}

struct StoreInner {
    storage: TaskStorage,
    tasks: RwLock<Vec<Task>>,
    revision: AtomicU64,
    events: broadcast::Sender<TasksChanged>,
}

/// Single source of truth for the task collection. Handles are cheap clones
/// of one shared state; every mutation updates the in-memory collection and
/// the durable record before returning, then notifies subscribers.
#[derive(Clone)]
pub struct TaskStore {
    inner: Arc<StoreInner>,
}

impl TaskStore {
    pub fn open(path: PathBuf) -> Self {
        let storage = TaskStorage::new(path);
        let tasks = storage.load();
        info!(
            "Loaded {} task(s) from {}",
            tasks.len(),
            storage.path().display()
        );

        let (events, _) = broadcast::channel(32);
        Self {
            inner: Arc::new(StoreInner {
                storage,
                tasks: RwLock::new(tasks),
                revision: AtomicU64::new(0),
                events,
            }),
        }
    }

    /// Full current state of the collection, in collection order.
    pub fn snapshot(&self) -> Vec<Task> {
        self.inner.tasks.read().unwrap().clone()
    }

    pub fn revision(&self) -> u64 {
        self.inner.revision.load(Ordering::SeqCst)
    }

    /// Register for change notifications. Unsubscribing is dropping the
    /// receiver; a lagged receiver never blocks a mutation.
    pub fn subscribe(&self) -> broadcast::Receiver<TasksChanged> {
        self.inner.events.subscribe()
    }

    pub fn add(
        &self,
        title: impl Into<String>,
        due_date: Option<String>,
        description: Option<String>,
        priority: Priority,
        subject: Option<String>,
    ) -> Task {
        let task = Task {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            description,
            due_date,
            priority,
            subject,
            completed: false,
            created_at: Utc::now(),
            completed_at: None,
        };

        let appended = task.clone();
        self.mutate(move |tasks| {
            tasks.push(appended);
            true
        });
        task
    }

    /// Remove the task with the given id. Absent ids are a no-op.
    pub fn delete(&self, id: &str) {
        self.mutate(|tasks| {
            let before = tasks.len();
            tasks.retain(|task| task.id != id);
            tasks.len() != before
        });
    }

    /// Flip completion state. `completed_at` mirrors `completed` on every
    /// transition. Absent ids are a no-op.
    pub fn toggle_complete(&self, id: &str) {
        self.mutate(|tasks| match tasks.iter_mut().find(|task| task.id == id) {
            Some(task) => {
                task.completed = !task.completed;
                task.completed_at = task.completed.then(Utc::now);
                true
            }
            None => false,
        });
    }

    /// Merge `patch` into the matching task, preserving id and creation
    /// time. Absent ids are a no-op.
    pub fn update(&self, id: &str, patch: TaskPatch) {
        self.mutate(|tasks| match tasks.iter_mut().find(|task| task.id == id) {
            Some(task) => {
                patch.apply_to(task);
                true
            }
            None => false,
        });
    }

    /// Rewrite collection order to match `ids`. Tasks missing from `ids` are
    /// dropped from the collection; ids that match no task are skipped.
    pub fn reorder(&self, ids: &[String]) {
        self.mutate(|tasks| {
            let mut remaining: Vec<Task> = std::mem::take(tasks);
            for id in ids {
                if let Some(index) = remaining.iter().position(|task| &task.id == id) {
                    tasks.push(remaining.swap_remove(index));
                }
            }
            true
        });
    }

    /// Run a mutation under the write lock, persist, then broadcast. The
    /// closure reports whether anything changed; untouched collections skip
    /// both the write and the notification.
    fn mutate<F>(&self, apply: F)
    where
        F: FnOnce(&mut Vec<Task>) -> bool,
    {
        let revision = {
            let mut tasks = self.inner.tasks.write().unwrap();
            if !apply(&mut tasks) {
                return;
            }
            self.inner.storage.save(&tasks);
            self.inner.revision.fetch_add(1, Ordering::SeqCst) + 1
        };

        // A failed send just means nobody is subscribed right now.
        let _ = self.inner.events.send(TasksChanged { revision });
    }
}
