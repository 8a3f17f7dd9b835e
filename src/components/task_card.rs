//! Task Card Component
//!
//! A single draggable card inside a category column.

use leptos::prelude::*;

use board_dnd::{make_on_card_mouseenter, make_on_mousedown, DndSignals, DragItem};

use crate::models::Task;
use crate::store::use_board_store;

/// One task row: drag handle, text, toggle and delete buttons
#[component]
pub fn TaskCard(
    task: Task,
    /// Position within this card's category column
    index: usize,
    dnd: DndSignals,
    /// Same-column hover reorder: (from, to, category)
    on_reorder: Callback<(usize, usize, String)>,
) -> impl IntoView {
    let store = use_board_store();

    let completed = task.completed;
    let toggle_id = task.id.clone();
    let delete_id = task.id.clone();
    let dragging_id = task.id.clone();

    // DnD handlers carry the card's id, column index and category
    let on_mousedown = make_on_mousedown(
        dnd,
        DragItem {
            id: task.id.clone(),
            index,
            category: task.category.clone(),
        },
    );
    let on_mouseenter = make_on_card_mouseenter(dnd, index, task.category.clone(), on_reorder);

    let is_dragging = move || {
        dnd.dragging_read
            .get()
            .is_some_and(|drag| drag.id == dragging_id)
    };

    let card_class = move || {
        let mut c = String::from("task-card");
        if completed { c.push_str(" completed"); }
        if is_dragging() { c.push_str(" dragging"); }
        c
    };

    view! {
        <div
            class=card_class
            on:mousedown=on_mousedown
            on:mouseenter=on_mouseenter
        >
            <span class="task-text">{task.text.clone()}</span>
            <div class="task-actions">
                <button
                    class="toggle-btn"
                    title=move || if completed { "Mark open" } else { "Mark done" }
                    on:click=move |_| store.toggle_completed(&toggle_id)
                >
                    "✓"
                </button>
                <button
                    class="delete-btn"
                    title="Delete"
                    on:click=move |_| store.delete(&delete_id)
                >
                    "×"
                </button>
            </div>
        </div>
    }
}
