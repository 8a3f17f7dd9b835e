//! UI Components
//!
//! Reusable Leptos components.

mod category_column;
mod new_task_form;
mod task_card;
mod theme_toggle;

pub use category_column::CategoryColumn;
pub use new_task_form::NewTaskForm;
pub use task_card::TaskCard;
pub use theme_toggle::ThemeToggle;
