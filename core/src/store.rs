use tracing::debug;
use uuid::Uuid;

use crate::error::ValidationError;
use crate::model::task::Task;

/// Owns the authoritative task collection for one session. Tasks live in
/// insertion order; nothing here ever sorts. State is volatile and gone when
/// the process exits.
#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    /// Validates and appends a new Pending task, returning a copy of it.
    /// The description is stored exactly as entered; only the emptiness
    /// check trims.
    pub fn create(&mut self, description: &str, due_date: &str) -> Result<Task, ValidationError> {
        if description.trim().is_empty() {
            return Err(ValidationError::EmptyDescription);
        }
        if due_date.is_empty() {
            return Err(ValidationError::EmptyDueDate);
        }

        let task = Task::new(description.to_string(), due_date.to_string());
        debug!(id = %task.id, "task created");
        self.tasks.push(task.clone());
        Ok(task)
    }

    /// Removes the task with the given id, reporting whether one was found.
    /// Absent ids are a silent no-op: a stale id from a double activation
    /// must be harmless.
    pub fn delete(&mut self, id: Uuid) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        if self.tasks.len() != before {
            debug!(%id, "task deleted");
            true
        } else {
            false
        }
    }

    /// Flips Pending <-> Done in place. Returns whether a task was found.
    pub fn toggle_status(&mut self, id: Uuid) -> bool {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.status = task.status.toggled();
                debug!(%id, status = task.status.as_str(), "task toggled");
                true
            }
            None => false,
        }
    }

    /// Empties the store unconditionally. Confirming the destructive intent
    /// is the boundary's job, before this is called.
    pub fn clear_all(&mut self) {
        debug!(count = self.tasks.len(), "store cleared");
        self.tasks.clear();
    }

    /// Read-only view in insertion order.
    pub fn list(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
