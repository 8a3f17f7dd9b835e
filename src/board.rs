//! Board Operations
//!
//! Pure list operations over the task list. Every mutation the UI can
//! request goes through one of these, so the ordering rules live in one
//! place and are testable without a browser.

use crate::models::Task;

/// Append a new open task unless the text is blank.
/// The text is stored as entered; only the emptiness check trims.
pub fn add_task(tasks: &mut Vec<Task>, text: &str, category: &str) {
    if text.trim().is_empty() {
        return;
    }
    tasks.push(Task::new(text, category));
}

/// Remove the task with the given id. Missing id is a no-op.
pub fn delete_task(tasks: &mut Vec<Task>, id: &str) {
    tasks.retain(|t| t.id != id);
}

/// Flip `completed` on the matching task. Missing id is a no-op.
pub fn toggle_completed(tasks: &mut Vec<Task>, id: &str) {
    if let Some(task) = tasks.iter_mut().find(|t| t.id == id) {
        task.completed = !task.completed;
    }
}

/// Move the task at position `from` to position `to` within the
/// subsequence of tasks belonging to `category`.
///
/// Only that subsequence is reindexed; tasks in other categories keep
/// their relative order. An out-of-range `from` is a no-op; `to` is
/// clamped to the end of the column.
pub fn reorder_within_category(tasks: &mut Vec<Task>, category: &str, from: usize, to: usize) {
    let column_len = tasks.iter().filter(|t| t.category == category).count();
    if from >= column_len {
        return;
    }

    let (mut column, others): (Vec<Task>, Vec<Task>) =
        tasks.drain(..).partition(|t| t.category == category);

    let moved = column.remove(from);
    let to = to.min(column.len());
    column.insert(to, moved);

    tasks.extend(others);
    tasks.extend(column);
}

/// Rewrite the matching task's category and move it to the end of the
/// list, so it lands at the bottom of the new column (hover reordering
/// refines the position afterwards). Missing id is a no-op.
pub fn reassign_category(tasks: &mut Vec<Task>, task_id: &str, new_category: &str) {
    if let Some(pos) = tasks.iter().position(|t| t.id == task_id) {
        let mut task = tasks.remove(pos);
        task.category = new_category.to_string();
        tasks.push(task);
    }
}

/// Cascade of a category rename: every task under `old` moves to `new`.
pub fn rename_category_tasks(tasks: &mut Vec<Task>, old: &str, new: &str) {
    for task in tasks.iter_mut().filter(|t| t.category == old) {
        task.category = new.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Task;

    fn make_task(id: &str, text: &str, category: &str) -> Task {
        Task {
            id: id.to_string(),
            text: text.to_string(),
            category: category.to_string(),
            completed: false,
        }
    }

    fn ids(tasks: &[Task]) -> Vec<&str> {
        tasks.iter().map(|t| t.id.as_str()).collect()
    }

    fn column_ids<'a>(tasks: &'a [Task], category: &str) -> Vec<&'a str> {
        tasks
            .iter()
            .filter(|t| t.category == category)
            .map(|t| t.id.as_str())
            .collect()
    }

    #[test]
    fn add_appends_one_open_task() {
        let mut tasks = vec![make_task("a", "Buy milk", "Personal")];
        add_task(&mut tasks, "File taxes", "Urgent");

        assert_eq!(tasks.len(), 2);
        let added = tasks.last().unwrap();
        assert_eq!(added.text, "File taxes");
        assert_eq!(added.category, "Urgent");
        assert!(!added.completed);
        assert!(!added.id.is_empty());
        assert_ne!(added.id, tasks[0].id);
    }

    #[test]
    fn add_with_blank_text_is_a_noop() {
        let mut tasks = vec![make_task("a", "Buy milk", "Personal")];
        add_task(&mut tasks, "", "Work");
        add_task(&mut tasks, "   \t ", "Work");
        assert_eq!(tasks.len(), 1);
    }

    #[test]
    fn add_keeps_text_as_entered() {
        let mut tasks = Vec::new();
        add_task(&mut tasks, "  padded  ", "Work");
        assert_eq!(tasks[0].text, "  padded  ");
    }

    #[test]
    fn toggle_twice_restores_original_flag() {
        let mut tasks = vec![make_task("a", "Buy milk", "Personal")];
        toggle_completed(&mut tasks, "a");
        assert!(tasks[0].completed);
        toggle_completed(&mut tasks, "a");
        assert!(!tasks[0].completed);
    }

    #[test]
    fn toggle_missing_id_is_a_noop() {
        let mut tasks = vec![make_task("a", "Buy milk", "Personal")];
        toggle_completed(&mut tasks, "ghost");
        assert!(!tasks[0].completed);
    }

    #[test]
    fn delete_missing_id_leaves_list_unchanged() {
        let mut tasks = vec![
            make_task("a", "Buy milk", "Personal"),
            make_task("b", "File taxes", "Urgent"),
        ];
        let before = tasks.clone();
        delete_task(&mut tasks, "ghost");
        assert_eq!(tasks, before);
    }

    #[test]
    fn toggle_then_delete_scenario() {
        let mut tasks = vec![
            make_task("a", "Buy milk", "Personal"),
            make_task("b", "File taxes", "Urgent"),
        ];

        toggle_completed(&mut tasks, "a");
        assert!(tasks[0].completed);
        assert!(!tasks[1].completed);

        delete_task(&mut tasks, "b");
        assert_eq!(ids(&tasks), ["a"]);
        assert_eq!(tasks[0].text, "Buy milk");
    }

    #[test]
    fn reorder_moves_last_to_front_within_column() {
        let mut tasks = vec![
            make_task("a", "A", "Work"),
            make_task("b", "B", "Work"),
            make_task("c", "C", "Work"),
        ];
        reorder_within_category(&mut tasks, "Work", 2, 0);
        assert_eq!(column_ids(&tasks, "Work"), ["c", "a", "b"]);
    }

    #[test]
    fn reorder_leaves_other_categories_in_order() {
        let mut tasks = vec![
            make_task("p1", "P1", "Personal"),
            make_task("a", "A", "Work"),
            make_task("u1", "U1", "Urgent"),
            make_task("b", "B", "Work"),
            make_task("p2", "P2", "Personal"),
            make_task("c", "C", "Work"),
        ];
        reorder_within_category(&mut tasks, "Work", 0, 2);

        assert_eq!(column_ids(&tasks, "Work"), ["b", "c", "a"]);
        assert_eq!(column_ids(&tasks, "Personal"), ["p1", "p2"]);
        assert_eq!(column_ids(&tasks, "Urgent"), ["u1"]);
    }

    #[test]
    fn reorder_with_out_of_range_source_is_a_noop() {
        let mut tasks = vec![
            make_task("a", "A", "Work"),
            make_task("p1", "P1", "Personal"),
        ];
        let before = tasks.clone();
        reorder_within_category(&mut tasks, "Work", 5, 0);
        assert_eq!(tasks, before);
    }

    #[test]
    fn reorder_clamps_target_to_column_end() {
        let mut tasks = vec![
            make_task("a", "A", "Work"),
            make_task("b", "B", "Work"),
        ];
        reorder_within_category(&mut tasks, "Work", 0, 9);
        assert_eq!(column_ids(&tasks, "Work"), ["b", "a"]);
    }

    #[test]
    fn reassign_appends_to_target_column() {
        let mut tasks = vec![
            make_task("a", "A", "Work"),
            make_task("b", "B", "Personal"),
            make_task("c", "C", "Personal"),
        ];
        reassign_category(&mut tasks, "a", "Personal");

        assert_eq!(column_ids(&tasks, "Work"), Vec::<&str>::new());
        assert_eq!(column_ids(&tasks, "Personal"), ["b", "c", "a"]);
    }

    #[test]
    fn reassign_keeps_source_column_order() {
        let mut tasks = vec![
            make_task("a", "A", "Work"),
            make_task("b", "B", "Work"),
            make_task("c", "C", "Work"),
        ];
        reassign_category(&mut tasks, "b", "Urgent");

        assert_eq!(column_ids(&tasks, "Work"), ["a", "c"]);
        assert_eq!(column_ids(&tasks, "Urgent"), ["b"]);
    }

    #[test]
    fn reassign_missing_id_is_a_noop() {
        let mut tasks = vec![make_task("a", "A", "Work")];
        let before = tasks.clone();
        reassign_category(&mut tasks, "ghost", "Personal");
        assert_eq!(tasks, before);
    }

    #[test]
    fn rename_onto_an_existing_name_merges_task_pools() {
        // Renaming a category to a name another registry entry already
        // holds is allowed; tasks from both pools share the name afterwards
        let mut tasks = vec![
            make_task("a", "A", "Work"),
            make_task("b", "B", "Personal"),
            make_task("c", "C", "Work"),
        ];
        rename_category_tasks(&mut tasks, "Personal", "Work");

        assert_eq!(column_ids(&tasks, "Work"), ["a", "b", "c"]);
        assert!(tasks.iter().all(|t| t.category == "Work"));
    }

    #[test]
    fn rename_cascade_rewrites_every_match() {
        let mut tasks = vec![
            make_task("a", "A", "Work"),
            make_task("b", "B", "Personal"),
            make_task("c", "C", "Work"),
        ];
        rename_category_tasks(&mut tasks, "Work", "Office");

        assert!(tasks.iter().all(|t| t.category != "Work"));
        assert_eq!(column_ids(&tasks, "Office"), ["a", "c"]);
        assert_eq!(column_ids(&tasks, "Personal"), ["b"]);
    }
}
