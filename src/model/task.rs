use super::id::IdGen;

/// Opaque task identifier, unique within a `TaskStore` for the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(u64);

/// Which subset of tasks a view shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskFilter {
    #[default]
    All,
    Active,
    Done,
}

impl TaskFilter {
    /// All filters, in the order the filter row displays them
    pub const ALL: [TaskFilter; 3] = [TaskFilter::All, TaskFilter::Active, TaskFilter::Done];

    pub fn label(self) -> &'static str {
        match self {
            TaskFilter::All => "All",
            TaskFilter::Active => "Active",
            TaskFilter::Done => "Done",
        }
    }

    /// Cycle order used by the `f` key: all → active → done → all
    pub fn cycled(self) -> TaskFilter {
        match self {
            TaskFilter::All => TaskFilter::Active,
            TaskFilter::Active => TaskFilter::Done,
            TaskFilter::Done => TaskFilter::All,
        }
    }

    pub fn matches(self, task: &Task) -> bool {
        match self {
            TaskFilter::All => true,
            TaskFilter::Active => !task.done,
            TaskFilter::Done => task.done,
        }
    }
}

/// A single task on the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub done: bool,
}

/// Derived task statistics, recomputed from the collection on every call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskCounts {
    pub total: usize,
    pub completed: usize,
    pub active: usize,
}

/// Ordered task collection, newest first. Owns its tasks exclusively;
/// filtered reads hand out borrows, never copies of the list.
#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
    ids: IdGen,
}

impl TaskStore {
    pub fn new() -> Self {
        TaskStore::default()
    }

    /// Add a task from raw input, prepending it to the list.
    /// Whitespace-only input is silently ignored.
    pub fn add(&mut self, raw: &str) -> Option<TaskId> {
        let title = raw.trim();
        if title.is_empty() {
            return None;
        }
        let id = TaskId(self.ids.next_id());
        self.tasks.insert(
            0,
            Task {
                id,
                title: title.to_string(),
                done: false,
            },
        );
        Some(id)
    }

    /// Flip the done flag. Unknown IDs are ignored.
    pub fn toggle(&mut self, id: TaskId) {
        if let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) {
            task.done = !task.done;
        }
    }

    /// Remove a task. Unknown IDs are ignored.
    pub fn delete(&mut self, id: TaskId) {
        self.tasks.retain(|t| t.id != id);
    }

    /// Tasks matching `filter`, in insertion order. Pure view.
    pub fn filtered(&self, filter: TaskFilter) -> Vec<&Task> {
        self.tasks.iter().filter(|t| filter.matches(t)).collect()
    }

    pub fn counts(&self) -> TaskCounts {
        let total = self.tasks.len();
        let completed = self.tasks.iter().filter(|t| t.done).count();
        TaskCounts {
            total,
            completed,
            active: total - completed,
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
