//! Project model and its create/patch inputs.
//!
//! # Invariants
//! - `name` is non-empty after trimming.
//! - `color` is a lowercase `#rgb` / `#rrggbb` value.
//! - `id` and `created_at` are fixed at creation and never patched.

use crate::model::validation::{normalize_color, require_text, ValidationError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type ProjectId = Uuid;

/// Color assigned when the caller leaves it blank.
pub const DEFAULT_PROJECT_COLOR: &str = "#3b82f6";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    pub description: String,
    pub color: String,
    pub created_at: DateTime<Utc>,
}

/// Caller-supplied fields for a new project.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewProject {
    pub name: String,
    pub description: String,
    /// Blank means [`DEFAULT_PROJECT_COLOR`].
    pub color: String,
}

impl NewProject {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Builds a project with a generated id and the given creation time.
    pub fn into_project(self, created_at: DateTime<Utc>) -> Result<Project, ValidationError> {
        let color = if self.color.trim().is_empty() {
            DEFAULT_PROJECT_COLOR.to_string()
        } else {
            normalize_color(&self.color)?
        };
        Ok(Project {
            id: Uuid::new_v4(),
            name: require_text("project name", &self.name)?,
            description: self.description.trim().to_string(),
            color,
            created_at,
        })
    }
}

/// Partial update; `None` leaves the field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub color: Option<String>,
}

impl ProjectPatch {
    /// Validates the patch and merges it into `project`.
    ///
    /// On error `project` is left untouched.
    pub fn apply_to(&self, project: &mut Project) -> Result<(), ValidationError> {
        let name = self
            .name
            .as_deref()
            .map(|value| require_text("project name", value))
            .transpose()?;
        let color = self.color.as_deref().map(normalize_color).transpose()?;

        if let Some(name) = name {
            project.name = name;
        }
        if let Some(description) = &self.description {
            project.description = description.trim().to_string();
        }
        if let Some(color) = color {
            project.color = color;
        }
        Ok(())
    }
}
