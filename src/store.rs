//! Board Store
//!
//! Task list, category registry and transient UI state as one Copy
//! bundle of signals, owned by the application root and handed to
//! components via context. Every task mutation goes through a board
//! operation and then rewrites the persisted snapshot before returning.

use leptos::prelude::*;

use crate::board;
use crate::models::{default_categories, Task, Theme};
use crate::storage;

#[derive(Clone, Copy)]
pub struct BoardStore {
    /// Task list in display order - read
    pub tasks: ReadSignal<Vec<Task>>,
    set_tasks: WriteSignal<Vec<Task>>,
    /// Ordered category names - read
    pub categories: ReadSignal<Vec<String>>,
    set_categories: WriteSignal<Vec<String>>,
    /// Index of the column currently showing its rename input
    pub renaming_category: ReadSignal<Option<usize>>,
    set_renaming_category: WriteSignal<Option<usize>>,
    pub theme: ReadSignal<Theme>,
    set_theme: WriteSignal<Theme>,
}

impl BoardStore {
    /// Build the store from the persisted snapshot. Categories always
    /// start from the defaults; only tasks are persisted.
    pub fn new() -> Self {
        let (tasks, set_tasks) = signal(storage::load_tasks());
        let (categories, set_categories) = signal(default_categories());
        let (renaming_category, set_renaming_category) = signal(None::<usize>);
        let (theme, set_theme) = signal(Theme::default());
        Self {
            tasks,
            set_tasks,
            categories,
            set_categories,
            renaming_category,
            set_renaming_category,
            theme,
            set_theme,
        }
    }

    /// Apply a board operation and persist the result. The write happens
    /// before this returns, so the snapshot never lags the list.
    fn commit(&self, mutate: impl FnOnce(&mut Vec<Task>)) {
        self.set_tasks.update(mutate);
        self.tasks.with_untracked(|tasks| storage::save_tasks(tasks));
    }

    pub fn add(&self, text: &str, category: &str) {
        self.commit(|tasks| board::add_task(tasks, text, category));
    }

    pub fn delete(&self, id: &str) {
        self.commit(|tasks| board::delete_task(tasks, id));
    }

    pub fn toggle_completed(&self, id: &str) {
        self.commit(|tasks| board::toggle_completed(tasks, id));
    }

    pub fn move_within_category(&self, category: &str, from: usize, to: usize) {
        self.commit(|tasks| board::reorder_within_category(tasks, category, from, to));
    }

    pub fn move_to_category(&self, task_id: &str, new_category: &str) {
        self.commit(|tasks| board::reassign_category(tasks, task_id, new_category));
    }

    /// Replace the registry entry at `index` and rewrite every task that
    /// carried the old name. A blank name keeps the old one (a stray
    /// blur must not orphan the column's tasks). Duplicate names are
    /// allowed and not deduplicated.
    pub fn rename_category(&self, index: usize, new_name: &str) {
        self.set_renaming_category.set(None);

        let new_name = new_name.trim();
        if new_name.is_empty() {
            return;
        }
        let Some(old_name) = self.categories.with_untracked(|c| c.get(index).cloned()) else {
            return;
        };
        if old_name == new_name {
            return;
        }

        self.set_categories.update(|categories| {
            categories[index] = new_name.to_string();
        });
        self.commit(|tasks| board::rename_category_tasks(tasks, &old_name, new_name));
    }

    /// Show or hide a column's rename input
    pub fn set_renaming(&self, index: Option<usize>) {
        self.set_renaming_category.set(index);
    }

    pub fn toggle_theme(&self) {
        self.set_theme.update(|theme| *theme = theme.toggled());
    }
}

/// Get the board store from context
pub fn use_board_store() -> BoardStore {
    expect_context::<BoardStore>()
}
