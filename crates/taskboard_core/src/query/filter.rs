//! Task and project filtering.
//!
//! # Invariants
//! - Text search is a case-insensitive substring match; blank search
//!   matches everything.
//! - Output preserves input order unless a sort helper is applied.

use crate::model::project::{Project, ProjectId};
use crate::model::task::{Task, TaskPriority, TaskStatus};
use std::cmp::Ordering;

/// Filter options for task lists. All set criteria must match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskQuery {
    pub project_id: Option<ProjectId>,
    pub status: Option<TaskStatus>,
    pub priority: Option<TaskPriority>,
    /// Matched against title and description.
    pub search: Option<String>,
}

impl TaskQuery {
    pub fn matches(&self, task: &Task) -> bool {
        if self.project_id.is_some_and(|id| id != task.project_id) {
            return false;
        }
        if self.status.is_some_and(|status| status != task.status) {
            return false;
        }
        if self.priority.is_some_and(|priority| priority != task.priority) {
            return false;
        }
        match normalized_needle(self.search.as_deref()) {
            Some(needle) => {
                contains_folded(&task.title, &needle) || contains_folded(&task.description, &needle)
            }
            None => true,
        }
    }
}

pub fn filter_tasks<'a>(tasks: &'a [Task], query: &TaskQuery) -> Vec<&'a Task> {
    tasks.iter().filter(|task| query.matches(task)).collect()
}

/// Projects whose name or description contains `search`.
pub fn search_projects<'a>(projects: &'a [Project], search: &str) -> Vec<&'a Project> {
    let Some(needle) = normalized_needle(Some(search)) else {
        return projects.iter().collect();
    };
    projects
        .iter()
        .filter(|project| {
            contains_folded(&project.name, &needle) || contains_folded(&project.description, &needle)
        })
        .collect()
}

/// Orders tasks for display: dated tasks first by due date, then undated;
/// ties broken by creation time.
pub fn sort_for_display(tasks: &mut [&Task]) {
    tasks.sort_by(|left, right| {
        let by_due = match (left.due_date, right.due_date) {
            (Some(a), Some(b)) => a.cmp(&b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        };
        by_due.then_with(|| left.created_at.cmp(&right.created_at))
    });
}

fn normalized_needle(search: Option<&str>) -> Option<String> {
    search
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_lowercase)
}

fn contains_folded(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}
