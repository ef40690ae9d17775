use serde::{Deserialize, Serialize};

/// A single to-do item. Field names match the persisted JSON document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "estado")]
    pub done: bool,
    #[serde(rename = "fecha")]
    pub created_at: String,
}

/// A user's tasks plus the counters shown on the task page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskList {
    pub tasks: Vec<Task>,
    pub total: usize,
    pub completed: usize,
}

impl TaskList {
    pub fn new(tasks: Vec<Task>) -> Self {
        let completed = tasks.iter().filter(|t| t.done).count();
        TaskList {
            total: tasks.len(),
            completed,
            tasks,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub usuario: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct CreateTask {
    #[serde(default)]
    pub nombre: String,
}

/// Raw `id` query parameter; parsed by the handler so that malformed values
/// produce the same error as out-of-range ones.
#[derive(Debug, Default, Deserialize)]
pub struct TaskIndex {
    #[serde(default)]
    pub id: String,
}

impl TaskIndex {
    pub fn parse(&self) -> Option<usize> {
        self.id.trim().parse().ok()
    }
}
