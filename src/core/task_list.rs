use super::task::{Task, TaskId};

/// Ordered task sequence, newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_slice(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == *id)
    }

    pub fn contains(&self, id: &TaskId) -> bool {
        self.get(id).is_some()
    }

    pub fn prepend(&mut self, task: Task) {
        self.tasks.insert(0, task);
    }

    /// Flip completion on the matching task. Returns false if the id is unknown.
    pub fn toggle(&mut self, id: &TaskId) -> bool {
        match self.tasks.iter_mut().find(|t| t.id == *id) {
            Some(task) => {
                task.toggle();
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: &TaskId) -> Option<Task> {
        let pos = self.tasks.iter().position(|t| t.id == *id)?;
        Some(self.tasks.remove(pos))
    }

    pub fn replace(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
    }

    pub fn views(&self) -> TaskViews<'_> {
        let (completed, pending): (Vec<&Task>, Vec<&Task>) =
            self.tasks.iter().partition(|t| t.completed);
        TaskViews { pending, completed }
    }
}

impl From<Vec<Task>> for TaskList {
    fn from(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }
}

/// Pending/completed partitions of a list, each in list order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskViews<'a> {
    pub pending: Vec<&'a Task>,
    pub completed: Vec<&'a Task>,
}

impl TaskViews<'_> {
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty() && self.completed.is_empty()
    }
}
