#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! Shared vocabulary used by every stage of the grader.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// One of the three exercise files a submission must contain.
///
/// The declaration order is the order files appear in every table and
/// stream the grader produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TaskFile {
    /// `task1_click.py`: locate a button and click it.
    Click,
    /// `task2_form.py`: locate an input and clear it.
    Form,
    /// `task3_visibility.py`: assert an element is visible.
    Visibility,
}

impl TaskFile {
    /// Every required file, in report order.
    pub const ALL: [TaskFile; 3] = [TaskFile::Click, TaskFile::Form, TaskFile::Visibility];

    /// File name on disk.
    pub fn file_name(self) -> &'static str {
        match self {
            TaskFile::Click => "task1_click.py",
            TaskFile::Form => "task2_form.py",
            TaskFile::Visibility => "task3_visibility.py",
        }
    }

    /// Marker that ties a check id to this file.
    pub fn marker(self) -> &'static str {
        match self {
            TaskFile::Click => "task1",
            TaskFile::Form => "task2",
            TaskFile::Visibility => "task3",
        }
    }

    /// Attributes a check id such as `task2_clear` to the file it inspects.
    pub fn from_check_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|task| id.contains(task.marker()))
    }
}

impl Display for TaskFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.file_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_ids_map_to_their_file() {
        assert_eq!(TaskFile::from_check_id("task1_button_click"), Some(TaskFile::Click));
        assert_eq!(TaskFile::from_check_id("task2_clear"), Some(TaskFile::Form));
        assert_eq!(TaskFile::from_check_id("task3_imports"), Some(TaskFile::Visibility));
        assert_eq!(TaskFile::from_check_id("project_folder_exists"), None);
    }

    #[test]
    fn report_order_follows_task_numbers() {
        let mut shuffled = vec![TaskFile::Visibility, TaskFile::Click, TaskFile::Form];
        shuffled.sort();
        assert_eq!(shuffled, TaskFile::ALL.to_vec());
    }
}
