//! The tutorial record and its create/update inputs.

use chrono::{DateTime, Utc};
use tutorials_types::{NonEmptyText, TutorialId};

/// A stored tutorial.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tutorial {
    pub id: TutorialId,
    pub title: String,
    pub description: Option<String>,
    pub published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Tutorial {
    /// Builds the record a store persists for `new`, stamping both timestamps with `now`.
    pub fn from_new(id: TutorialId, new: NewTutorial, now: DateTime<Utc>) -> Self {
        Self {
            id,
            title: new.title.into_inner(),
            description: new.description,
            published: new.published,
            created_at: now,
            updated_at: now,
        }
    }

    /// Applies the supplied fields of `patch` in place; unspecified fields are kept.
    pub fn apply(&mut self, patch: &TutorialPatch, now: DateTime<Utc>) {
        if let Some(title) = &patch.title {
            self.title = title.clone();
        }
        if let Some(description) = &patch.description {
            self.description = Some(description.clone());
        }
        if let Some(published) = patch.published {
            self.published = published;
        }
        self.updated_at = now;
    }

    /// Case-insensitive substring match against the title. An empty needle matches.
    pub fn title_contains(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(&needle.to_lowercase())
    }
}

/// Input for creating a tutorial. `published` has already defaulted to `false`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewTutorial {
    pub title: NonEmptyText,
    pub description: Option<String>,
    pub published: bool,
}

impl NewTutorial {
    pub fn new(title: NonEmptyText, description: Option<String>, published: Option<bool>) -> Self {
        Self {
            title,
            description,
            published: published.unwrap_or(false),
        }
    }
}

/// Partial update: only the fields that are `Some` are written.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TutorialPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub published: Option<bool>,
}

impl TutorialPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.published.is_none()
    }
}
