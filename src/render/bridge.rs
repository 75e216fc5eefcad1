//! Task-to-entry projection and the external surface contract.

use crate::model::task::{Task, TaskId};

/// Visual projection of one task.
///
/// Carries the `TaskId` handle so toggle events can be resolved back to
/// the stored task through a lookup, rather than through a captured
/// reference that would break if entries were ever reordered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisualEntry {
    /// Handle the surface reports back on toggle events.
    pub task_id: TaskId,
    /// Label text shown next to the checkbox control.
    pub title: String,
    /// Initial checkbox state.
    pub checked: bool,
}

/// Contract the core expects from the external list UI.
///
/// The surface owns element creation and styling; the core only hands it
/// entries in display order and asks it to reset the input field after a
/// successful submission.
pub trait ListSurface {
    /// Appends one entry at the end of the visible list.
    fn append_entry(&mut self, entry: &VisualEntry);

    /// Clears the task-title input field.
    fn clear_input(&mut self);
}

/// Projects a task into its visual entry.
pub fn project(task: &Task) -> VisualEntry {
    VisualEntry {
        task_id: task.id.clone(),
        title: task.title.clone(),
        checked: task.completed,
    }
}

/// Projects a task and appends it to the surface.
pub fn render_task(surface: &mut dyn ListSurface, task: &Task) {
    let entry = project(task);
    surface.append_entry(&entry);
}

#[cfg(test)]
mod tests {
    use super::project;
    use crate::model::task::{Task, TaskId};

    #[test]
    fn projection_mirrors_task_fields() {
        let mut task = Task::new(TaskId::from("t-1"), "water plants");
        task.completed = true;

        let entry = project(&task);
        assert_eq!(entry.task_id, task.id);
        assert_eq!(entry.title, "water plants");
        assert!(entry.checked);
    }
}
