// Task list model, kept in memory for the lifetime of the window

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: u64,
    pub title: String,
    pub done: bool,
    pub created_at: DateTime<Local>,
}

#[derive(Debug, Default)]
pub struct TaskList {
    tasks: Vec<Task>,
    next_id: u64,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a task with the trimmed title. Blank titles are rejected.
    pub fn add(&mut self, title: &str) -> Option<u64> {
        let title = title.trim();
        if title.is_empty() {
            return None;
        }

        let id = self.next_id;
        self.next_id += 1;
        self.tasks.push(Task {
            id,
            title: title.to_string(),
            done: false,
            created_at: Local::now(),
        });
        tracing::debug!("Added task {} ({})", id, title);
        Some(id)
    }

    pub fn toggle_done(&mut self, task_id: u64) -> bool {
        match self.get_task_mut(task_id) {
            Some(task) => {
                task.done = !task.done;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, task_id: u64) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != task_id);
        self.tasks.len() != before
    }

    pub fn clear_completed(&mut self) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|t| !t.done);
        before - self.tasks.len()
    }

    pub fn remaining(&self) -> usize {
        self.tasks.iter().filter(|t| !t.done).count()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get_task(&self, task_id: u64) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == task_id)
    }

    fn get_task_mut(&mut self, task_id: u64) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id == task_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_titles_are_rejected() {
        let mut list = TaskList::new();
        assert_eq!(list.add(""), None);
        assert_eq!(list.add("   \t"), None);
        assert!(list.is_empty());
    }

    #[test]
    fn titles_are_trimmed_and_ids_unique() {
        let mut list = TaskList::new();
        let a = list.add("  write report ").unwrap();
        let b = list.add("write report").unwrap();

        assert_ne!(a, b);
        assert_eq!(list.get_task(a).unwrap().title, "write report");
    }

    #[test]
    fn remaining_tracks_done_state() {
        let mut list = TaskList::new();
        let a = list.add("a").unwrap();
        list.add("b").unwrap();
        assert_eq!(list.remaining(), 2);

        assert!(list.toggle_done(a));
        assert_eq!(list.remaining(), 1);

        assert!(list.toggle_done(a));
        assert_eq!(list.remaining(), 2);
        assert!(!list.toggle_done(99));
    }

    #[test]
    fn clear_completed_keeps_open_tasks() {
        let mut list = TaskList::new();
        let a = list.add("a").unwrap();
        let b = list.add("b").unwrap();
        let c = list.add("c").unwrap();
        list.toggle_done(a);
        list.toggle_done(c);

        assert_eq!(list.clear_completed(), 2);
        let ids: Vec<u64> = list.tasks().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![b]);
    }

    #[test]
    fn removed_ids_are_not_reused() {
        let mut list = TaskList::new();
        let a = list.add("a").unwrap();
        assert!(list.remove(a));
        assert!(!list.remove(a));

        let b = list.add("b").unwrap();
        assert_ne!(a, b);
    }
}
