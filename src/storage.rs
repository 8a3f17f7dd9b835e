//! Task Snapshot Storage
//!
//! The whole task list lives in one localStorage slot as a JSON array,
//! written in full after every mutation. A missing or garbled snapshot
//! degrades to an empty board.

use crate::models::Task;

/// localStorage slot holding the serialized task array
pub const TASKS_STORAGE_KEY: &str = "todo-tasks";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|window| window.local_storage().ok().flatten())
}

pub fn serialize_tasks(tasks: &[Task]) -> String {
    serde_json::to_string(tasks).unwrap_or_else(|_| "[]".to_string())
}

/// Parse a snapshot; anything unreadable yields an empty list.
pub fn parse_tasks(raw: &str) -> Vec<Task> {
    serde_json::from_str(raw).unwrap_or_default()
}

/// Read the snapshot from localStorage. Absent slot, unavailable storage
/// and parse failures all come back as an empty list.
pub fn load_tasks() -> Vec<Task> {
    match local_storage().and_then(|storage| storage.get_item(TASKS_STORAGE_KEY).ok().flatten()) {
        Some(raw) => parse_tasks(&raw),
        None => Vec::new(),
    }
}

/// Write the full task list. The in-memory list stays authoritative for
/// the session, so a storage failure is ignored.
pub fn save_tasks(tasks: &[Task]) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(TASKS_STORAGE_KEY, &serialize_tasks(tasks));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Task;

    fn sample_tasks() -> Vec<Task> {
        vec![
            Task {
                id: "0c7e1c7e-0000-4000-8000-000000000001".to_string(),
                text: "Buy milk".to_string(),
                category: "Personal".to_string(),
                completed: false,
            },
            Task {
                id: "0c7e1c7e-0000-4000-8000-000000000002".to_string(),
                text: "File taxes".to_string(),
                category: "Urgent".to_string(),
                completed: true,
            },
        ]
    }

    #[test]
    fn snapshot_round_trip_is_stable() {
        let snapshot = serialize_tasks(&sample_tasks());
        assert_eq!(serialize_tasks(&parse_tasks(&snapshot)), snapshot);
    }

    #[test]
    fn parse_recovers_all_fields() {
        let tasks = parse_tasks(&serialize_tasks(&sample_tasks()));
        assert_eq!(tasks, sample_tasks());
    }

    #[test]
    fn garbled_snapshot_degrades_to_empty() {
        assert!(parse_tasks("").is_empty());
        assert!(parse_tasks("not json").is_empty());
        assert!(parse_tasks("{\"id\":1}").is_empty());
    }

    #[test]
    fn snapshot_uses_the_wire_field_names() {
        let snapshot = serialize_tasks(&sample_tasks()[..1]);
        for field in ["\"id\"", "\"text\"", "\"category\"", "\"completed\""] {
            assert!(snapshot.contains(field), "missing {field} in {snapshot}");
        }
    }
}
