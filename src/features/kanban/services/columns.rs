use crate::models::{Task, TaskStatus};

// Columns are views over the single task list, never stored separately.
// Order inside a column is the order of the list itself.

pub fn column_tasks(tasks: &[Task], status: TaskStatus) -> Vec<&Task> {
    tasks.iter().filter(|t| t.status == status).collect()
}

pub fn column_count(tasks: &[Task], status: TaskStatus) -> usize {
    tasks.iter().filter(|t| t.status == status).count()
}

/// Every column in display order with its tasks.
pub fn partition(tasks: &[Task]) -> [(TaskStatus, Vec<&Task>); 3] {
    TaskStatus::ALL.map(|status| (status, column_tasks(tasks, status)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewTask;
    use chrono::Utc;
    use rstest::{fixture, rstest};

    #[fixture]
    fn tasks() -> Vec<Task> {
        let now = Utc::now();
        [
            ("a", TaskStatus::Done),
            ("b", TaskStatus::Todo),
            ("c", TaskStatus::Done),
            ("d", TaskStatus::Todo),
        ]
        .into_iter()
        .map(|(title, status)| Task::new(NewTask::new(title, status), now))
        .collect()
    }

    fn titles(tasks: &[&Task]) -> Vec<String> {
        tasks.iter().map(|t| t.title.clone()).collect()
    }

    #[rstest]
    fn column_keeps_list_order(tasks: Vec<Task>) {
        assert_eq!(titles(&column_tasks(&tasks, TaskStatus::Todo)), ["b", "d"]);
        assert_eq!(titles(&column_tasks(&tasks, TaskStatus::Done)), ["a", "c"]);
    }

    #[rstest]
    fn empty_column_is_empty(tasks: Vec<Task>) {
        assert!(column_tasks(&tasks, TaskStatus::InProgress).is_empty());
        assert_eq!(column_count(&tasks, TaskStatus::InProgress), 0);
    }

    #[rstest]
    fn partition_covers_every_task_once(tasks: Vec<Task>) {
        let columns = partition(&tasks);

        let statuses: Vec<TaskStatus> = columns.iter().map(|(s, _)| *s).collect();
        assert_eq!(statuses, TaskStatus::ALL);
        let total: usize = columns.iter().map(|(_, c)| c.len()).sum();
        assert_eq!(total, tasks.len());
    }

    #[rstest]
    fn view_follows_list_changes(mut tasks: Vec<Task>) {
        tasks.swap(1, 3);
        tasks[0].status = TaskStatus::InProgress;

        assert_eq!(titles(&column_tasks(&tasks, TaskStatus::Todo)), ["d", "b"]);
        assert_eq!(titles(&column_tasks(&tasks, TaskStatus::InProgress)), ["a"]);
        assert_eq!(column_count(&tasks, TaskStatus::Done), 1);
    }
}
