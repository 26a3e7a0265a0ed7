use std::sync::Arc;
use chrono::Utc;
use tracing::info;

use crate::models::bot_models::{Change, ChangeType, PendingUpdate, Task, TaskList, Update, UpdateLog, TASKS_DOCUMENT, UPDATES_DOCUMENT};
use crate::services::document_store::{DocumentStore, Documents, StoreError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Release {
    Released(Update),
    NothingPending,
    VersionTaken
}

/// The developer task list and update notes, kept in the same document store as cases.
/// Same read-modify-write caveat as [`crate::services::case_numbers::CaseNumbers`].
#[derive(Clone)]
pub struct BotNotes {
    store: Arc<dyn DocumentStore>
}

impl BotNotes {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    pub fn get_tasks_sync(&self) -> Result<TaskList, StoreError> {
        self.store.load_or_create(TASKS_DOCUMENT)
    }

    pub fn add_task_sync(&self, task: &str) -> Result<Task, StoreError> {
        let mut tasks = self.get_tasks_sync()?;

        let task = Task {
            task: task.to_string(),
            added: Utc::now()
        };
        tasks.tasks.push(task.clone());
        self.store.save(TASKS_DOCUMENT, &tasks)?;

        info!("Added task {}", tasks.tasks.len());
        Ok(task)
    }

    /// Removes the task at a 1-based position. `None` when there is no such task.
    pub fn remove_task_sync(&self, number: usize) -> Result<Option<Task>, StoreError> {
        let mut tasks = self.get_tasks_sync()?;
        if number == 0 || number > tasks.tasks.len() {
            return Ok(None);
        }

        let removed = tasks.tasks.remove(number - 1);
        self.store.save(TASKS_DOCUMENT, &tasks)?;

        info!("Removed task {}", number);
        Ok(Some(removed))
    }

    pub fn get_updates_sync(&self) -> Result<UpdateLog, StoreError> {
        self.store.load_or_create(UPDATES_DOCUMENT)
    }

    /// Adds a change to the pending update, starting one if needed. Returns the pending change count.
    pub fn add_change_sync(&self, change_type: ChangeType, feature: &str) -> Result<usize, StoreError> {
        let mut updates = self.get_updates_sync()?;

        let pending = updates.pending.get_or_insert_with(PendingUpdate::default);
        pending.features.push(Change {
            change_type,
            feature: feature.to_string()
        });
        let count = pending.features.len();
        self.store.save(UPDATES_DOCUMENT, &updates)?;

        Ok(count)
    }

    /// Turns the pending update into a released version dated now.
    pub fn release_update_sync(&self, version: &str, description: &str) -> Result<Release, StoreError> {
        let mut updates = self.get_updates_sync()?;

        if updates.released.iter().any(|o| o.version == version) {
            return Ok(Release::VersionTaken);
        }
        let Some(pending) = updates.pending.take() else {
            return Ok(Release::NothingPending);
        };

        let update = Update {
            version: version.to_string(),
            date: Utc::now(),
            description: description.to_string(),
            features: pending.features
        };
        updates.released.push(update.clone());
        self.store.save(UPDATES_DOCUMENT, &updates)?;

        info!("Released update {}", version);
        Ok(Release::Released(update))
    }

    async fn run<T, F>(&self, f: F) -> Result<T, StoreError>
    where
        T: Send + 'static,
        F: FnOnce(&BotNotes) -> Result<T, StoreError> + Send + 'static
    {
        let this = self.clone();
        tokio::task::spawn_blocking(move || f(&this)).await?
    }

    pub async fn get_tasks(&self) -> Result<TaskList, StoreError> {
        self.run(|o| o.get_tasks_sync()).await
    }

    pub async fn add_task(&self, task: String) -> Result<Task, StoreError> {
        self.run(move |o| o.add_task_sync(&task)).await
    }

    pub async fn remove_task(&self, number: usize) -> Result<Option<Task>, StoreError> {
        self.run(move |o| o.remove_task_sync(number)).await
    }

    pub async fn get_updates(&self) -> Result<UpdateLog, StoreError> {
        self.run(|o| o.get_updates_sync()).await
    }

    pub async fn add_change(&self, change_type: ChangeType, feature: String) -> Result<usize, StoreError> {
        self.run(move |o| o.add_change_sync(change_type, &feature)).await
    }

    pub async fn release_update(&self, version: String, description: String) -> Result<Release, StoreError> {
        self.run(move |o| o.release_update_sync(&version, &description)).await
    }
}
