//! Application store: the explicitly owned state container.
//!
//! # Responsibility
//! - Hold the session user, projects, tasks and theme.
//! - Provide CRUD operations with field-merge updates.
//! - Persist the whole snapshot after every mutation.
//!
//! # Invariants
//! - In-memory state always equals the last successfully saved snapshot; a
//!   failed save leaves the previous state in place.
//! - Deleting a project deletes every task whose `project_id` matches it.
//! - Update/delete on an unknown id is a silent no-op (returns `false`).
//! - `id` and `created_at` are never changed after creation.

use crate::model::account::SessionUser;
use crate::model::project::{NewProject, Project, ProjectId, ProjectPatch};
use crate::model::snapshot::{Snapshot, Theme};
use crate::model::task::{NewTask, Task, TaskId, TaskPatch};
use crate::model::validation::ValidationError;
use crate::repo::snapshot_repo::SnapshotRepository;
use crate::repo::RepoError;
use chrono::Utc;
use log::{debug, error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug)]
pub enum StoreError {
    Validation(ValidationError),
    Repo(RepoError),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<ValidationError> for StoreError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<RepoError> for StoreError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

pub struct AppStore<R: SnapshotRepository> {
    repo: R,
    state: Snapshot,
}

impl<R: SnapshotRepository> AppStore<R> {
    /// Opens the store, loading the last saved snapshot.
    ///
    /// A missing snapshot yields empty collections, no user and the default
    /// theme; nothing is written until the first mutation.
    pub fn open(repo: R) -> StoreResult<Self> {
        let state = match repo.load_snapshot() {
            Ok(Some(snapshot)) => snapshot,
            Ok(None) => Snapshot::default(),
            Err(err) => {
                error!(
                    "event=store_open module=store status=error error_code=snapshot_load_failed error={}",
                    err
                );
                return Err(err.into());
            }
        };
        info!(
            "event=store_open module=store status=ok projects={} tasks={} has_user={}",
            state.projects.len(),
            state.tasks.len(),
            state.user.is_some()
        );
        Ok(Self { repo, state })
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.state
    }

    pub fn user(&self) -> Option<&SessionUser> {
        self.state.user.as_ref()
    }

    pub fn projects(&self) -> &[Project] {
        &self.state.projects
    }

    pub fn tasks(&self) -> &[Task] {
        &self.state.tasks
    }

    pub fn theme(&self) -> Theme {
        self.state.theme
    }

    pub fn project(&self, id: ProjectId) -> Option<&Project> {
        self.state.projects.iter().find(|project| project.id == id)
    }

    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.state.tasks.iter().find(|task| task.id == id)
    }

    /// Tasks referencing `project_id`, in insertion order.
    pub fn tasks_for_project(&self, project_id: ProjectId) -> Vec<&Task> {
        self.state
            .tasks
            .iter()
            .filter(|task| task.project_id == project_id)
            .collect()
    }

    pub fn set_user(&mut self, user: SessionUser) -> StoreResult<()> {
        self.mutate("set_user", |state| {
            state.user = Some(user);
            Ok(())
        })
    }

    pub fn clear_user(&mut self) -> StoreResult<()> {
        self.mutate("clear_user", |state| {
            state.user = None;
            Ok(())
        })
    }

    pub fn add_project(&mut self, input: NewProject) -> StoreResult<Project> {
        let project = input.into_project(Utc::now())?;
        self.mutate("project_add", |state| {
            state.projects.push(project.clone());
            Ok(project)
        })
    }

    /// Merges `patch` into the project with `id`.
    ///
    /// Returns `false` when no such project exists.
    pub fn update_project(&mut self, id: ProjectId, patch: &ProjectPatch) -> StoreResult<bool> {
        self.mutate("project_update", |state| {
            match state.projects.iter_mut().find(|project| project.id == id) {
                Some(project) => {
                    patch.apply_to(project)?;
                    Ok(true)
                }
                None => Ok(false),
            }
        })
    }

    /// Removes the project and every task that references it.
    ///
    /// Returns `false` when no such project exists. Orphan tasks pointing at
    /// an unknown `id` are still removed.
    pub fn delete_project(&mut self, id: ProjectId) -> StoreResult<bool> {
        self.mutate("project_delete", |state| {
            let before = state.projects.len();
            state.projects.retain(|project| project.id != id);
            let task_count = state.tasks.len();
            state.tasks.retain(|task| task.project_id != id);
            debug!(
                "event=cascade_delete module=store status=ok project_id={} tasks_removed={}",
                id,
                task_count - state.tasks.len()
            );
            Ok(state.projects.len() != before)
        })
    }

    pub fn add_task(&mut self, input: NewTask) -> StoreResult<Task> {
        let task = input.into_task(Utc::now())?;
        self.mutate("task_add", |state| {
            state.tasks.push(task.clone());
            Ok(task)
        })
    }

    /// Merges `patch` into the task with `id`.
    ///
    /// Returns `false` when no such task exists.
    pub fn update_task(&mut self, id: TaskId, patch: &TaskPatch) -> StoreResult<bool> {
        self.mutate("task_update", |state| {
            match state.tasks.iter_mut().find(|task| task.id == id) {
                Some(task) => {
                    patch.apply_to(task)?;
                    Ok(true)
                }
                None => Ok(false),
            }
        })
    }

    /// Returns `false` when no such task exists.
    pub fn delete_task(&mut self, id: TaskId) -> StoreResult<bool> {
        self.mutate("task_delete", |state| {
            let before = state.tasks.len();
            state.tasks.retain(|task| task.id != id);
            Ok(state.tasks.len() != before)
        })
    }

    /// Flips the theme and returns the new value.
    pub fn toggle_theme(&mut self) -> StoreResult<Theme> {
        self.mutate("theme_toggle", |state| {
            state.theme = state.theme.toggled();
            Ok(state.theme)
        })
    }

    pub fn set_theme(&mut self, theme: Theme) -> StoreResult<()> {
        self.mutate("theme_set", |state| {
            state.theme = theme;
            Ok(())
        })
    }

    /// Applies `change` to a copy of the state, saves it, then commits it.
    fn mutate<T>(
        &mut self,
        event: &'static str,
        change: impl FnOnce(&mut Snapshot) -> StoreResult<T>,
    ) -> StoreResult<T> {
        let mut next = self.state.clone();
        let output = change(&mut next)?;

        if let Err(err) = self.repo.save_snapshot(&next) {
            error!(
                "event={} module=store status=error error_code=snapshot_save_failed error={}",
                event, err
            );
            return Err(err.into());
        }

        self.state = next;
        debug!(
            "event={} module=store status=ok projects={} tasks={}",
            event,
            self.state.projects.len(),
            self.state.tasks.len()
        );
        Ok(output)
    }
}
