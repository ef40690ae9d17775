use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

use time::macros::format_description;
use time::OffsetDateTime;
use tracing::{debug, warn};

use crate::error::AppError;
use crate::models::{Task, TaskList};
use crate::persist::{self, Tasks};

/// In-memory task lists for every user, backed by a single JSON file.
///
/// One mutex guards the whole mapping, so mutations for unrelated users are
/// serialised too. [`TaskStore::save`] serialises and writes while holding
/// the same lock, which keeps the file from ever going back to an older state.
pub struct TaskStore {
    tasks: Mutex<Tasks>,
    path: PathBuf,
}

impl TaskStore {
    /// Loads `path`, starting empty if the file is missing or unreadable.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let tasks = match persist::load(&path) {
            Ok(tasks) => tasks,
            Err(err) if !path.exists() => {
                debug!(path = %path.display(), %err, "No task file, starting empty");
                Tasks::new()
            }
            Err(err) => {
                warn!(path = %path.display(), %err, "Ignoring unreadable task file");
                Tasks::new()
            }
        };

        TaskStore {
            tasks: Mutex::new(tasks),
            path,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lock(&self) -> MutexGuard<'_, Tasks> {
        self.tasks.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Appends a new, not yet completed task to `user`'s list.
    pub fn create(&self, user: &str, name: &str) -> Result<Task, AppError> {
        if name.trim().is_empty() {
            return Err(AppError::BadRequest("Error: Debes especificar un nombre"));
        }

        let task = Task {
            name: name.to_string(),
            done: false,
            created_at: timestamp(),
        };

        let mut tasks = self.lock();
        tasks.entry(user.to_string()).or_default().push(task.clone());
        Ok(task)
    }

    /// Flips the `done` flag of the task at `index` and returns the result.
    pub fn toggle(&self, user: &str, index: usize) -> Result<Task, AppError> {
        let mut tasks = self.lock();
        let task = tasks
            .get_mut(user)
            .and_then(|list| list.get_mut(index))
            .ok_or(AppError::InvalidId)?;
        task.done = !task.done;
        Ok(task.clone())
    }

    /// Removes and returns the task at `index`; later tasks shift down by one.
    pub fn delete(&self, user: &str, index: usize) -> Result<Task, AppError> {
        let mut tasks = self.lock();
        match tasks.get_mut(user) {
            Some(list) if index < list.len() => Ok(list.remove(index)),
            _ => Err(AppError::InvalidId),
        }
    }

    /// Drops every completed task, returning how many were removed.
    pub fn clear_completed(&self, user: &str) -> usize {
        let mut tasks = self.lock();
        let Some(list) = tasks.get_mut(user) else {
            return 0;
        };
        let before = list.len();
        list.retain(|t| !t.done);
        before - list.len()
    }

    pub fn list(&self, user: &str) -> TaskList {
        let tasks = self.lock();
        TaskList::new(tasks.get(user).cloned().unwrap_or_default())
    }

    /// Copy of the whole mapping.
    pub fn snapshot(&self) -> Tasks {
        self.lock().clone()
    }

    /// Overwrites the backing file with the current state of every user.
    pub fn save(&self) -> Result<(), AppError> {
        let tasks = self.lock();
        persist::save(&self.path, &tasks)
    }
}

/// Creation time as `DD/MM HH:MM`, in local time when the offset is known.
fn timestamp() -> String {
    let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
    now.format(format_description!("[day]/[month] [hour]:[minute]"))
        .unwrap_or_default()
}
