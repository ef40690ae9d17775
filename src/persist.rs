use std::collections::HashMap;
use std::path::Path;

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::error::AppError;
use crate::models::Task;

/// Every user's tasks, keyed by the raw session username.
pub type Tasks = HashMap<String, Vec<Task>>;

/// Reads the whole mapping from `path`. A user stored as `null` (an emptied
/// list in files written by older versions) loads as an empty list.
pub fn load(path: &Path) -> Result<Tasks, AppError> {
    let bytes = std::fs::read(path)?;
    let raw: HashMap<String, Option<Vec<Task>>> = serde_json::from_slice(&bytes)?;
    Ok(raw
        .into_iter()
        .map(|(user, tasks)| (user, tasks.unwrap_or_default()))
        .collect())
}

/// Overwrites `path` with the whole mapping, pretty-printed with a one-space indent.
pub fn save(path: &Path, tasks: &Tasks) -> Result<(), AppError> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b" "));
    tasks.serialize(&mut ser)?;
    std::fs::write(path, buf)?;
    Ok(())
}
