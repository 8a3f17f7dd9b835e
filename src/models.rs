//! Board Models
//!
//! Data structures for the persisted task snapshot and UI state.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Category columns present on first load
pub const DEFAULT_CATEGORIES: [&str; 3] = ["Work", "Personal", "Urgent"];

pub fn default_categories() -> Vec<String> {
    DEFAULT_CATEGORIES.iter().map(|s| s.to_string()).collect()
}

/// A single to-do entry. `category` always names an entry of the
/// category registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub text: String,
    pub category: String,
    pub completed: bool,
}

impl Task {
    /// New open task with a fresh opaque id
    pub fn new(text: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            text: text.into(),
            category: category.into(),
            completed: false,
        }
    }
}

/// Page color scheme. Not persisted; every session starts dark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// CSS class on the page shell
    pub fn class(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }
}
