//! Dashboard aggregates.

use crate::model::project::{Project, ProjectId};
use crate::model::task::{Task, TaskPriority, TaskStatus};
use chrono::{Days, NaiveDate};
use serde::Serialize;

/// Per-project completion figures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectProgress {
    pub project_id: ProjectId,
    pub name: String,
    pub total: usize,
    pub completed: usize,
    /// Whole percent, rounded down; 0 when the project has no tasks.
    pub percent: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub project_count: usize,
    pub task_count: usize,
    pub todo: usize,
    pub in_progress: usize,
    pub completed: usize,
    pub high_priority_open: usize,
    pub completion_percent: u8,
    /// Open tasks whose due date is before `today`.
    pub overdue: usize,
    /// Open tasks due from `today` through `today + horizon_days`.
    pub due_soon: usize,
    pub projects: Vec<ProjectProgress>,
}

impl DashboardStats {
    pub fn compute(
        projects: &[Project],
        tasks: &[Task],
        today: NaiveDate,
        horizon_days: u64,
    ) -> Self {
        let count_status =
            |status: TaskStatus| tasks.iter().filter(|task| task.status == status).count();
        let completed = count_status(TaskStatus::Completed);
        let horizon_end = today
            .checked_add_days(Days::new(horizon_days))
            .unwrap_or(NaiveDate::MAX);

        let open = || tasks.iter().filter(|task| !task.is_completed());
        let overdue = open().filter(|task| task.is_overdue(today)).count();
        let due_soon = open()
            .filter(|task| {
                task.due_date
                    .is_some_and(|due| due >= today && due <= horizon_end)
            })
            .count();
        let high_priority_open = open()
            .filter(|task| task.priority == TaskPriority::High)
            .count();

        let progress = projects
            .iter()
            .map(|project| {
                let (total, done) = tasks
                    .iter()
                    .filter(|task| task.project_id == project.id)
                    .fold((0, 0), |(total, done), task| {
                        (total + 1, done + usize::from(task.is_completed()))
                    });
                ProjectProgress {
                    project_id: project.id,
                    name: project.name.clone(),
                    total,
                    completed: done,
                    percent: percent(done, total),
                }
            })
            .collect();

        Self {
            project_count: projects.len(),
            task_count: tasks.len(),
            todo: count_status(TaskStatus::Todo),
            in_progress: count_status(TaskStatus::InProgress),
            completed,
            high_priority_open,
            completion_percent: percent(completed, tasks.len()),
            overdue,
            due_soon,
            projects: progress,
        }
    }
}

fn percent(part: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    // part <= total, so the quotient is at most 100.
    u8::try_from(part * 100 / total).unwrap_or(100)
}
