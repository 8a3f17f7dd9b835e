//! To-Do Board App
//!
//! Root component: owns the store, wires the drag gesture to board
//! mutations and lays out header, add form and the category columns.

use leptos::prelude::*;

use board_dnd::{bind_global_mouseup, create_dnd_signals};

use crate::components::{CategoryColumn, NewTaskForm, ThemeToggle};
use crate::store::BoardStore;

#[component]
pub fn App() -> impl IntoView {
    let store = BoardStore::new();
    provide_context(store);

    web_sys::console::log_1(
        &format!("[APP] Loaded {} tasks from storage", store.tasks.get_untracked().len()).into(),
    );

    // Create DnD signals
    let dnd = create_dnd_signals();

    // Same-column hover: reorder immediately so the card follows the pointer
    let on_reorder = Callback::new(move |(from, to, category): (usize, usize, String)| {
        store.move_within_category(&category, from, to);
    });

    // Global mouseup: a cross-column drop re-categorizes the card.
    // Releasing anywhere else just ends the gesture - reorders applied
    // during hover are already committed and stay.
    bind_global_mouseup(dnd, move |task_id, category| {
        web_sys::console::log_1(
            &format!("[DND] Drop: task={}, column={}", task_id, category).into(),
        );
        store.move_to_category(&task_id, &category);
    });

    view! {
        <div class=move || format!("app-shell {}", store.theme.get().class())>
            <div class="board-layout">
                <header class="board-header">
                    <h1>"🌟 Customizable To-Do List"</h1>
                    <ThemeToggle />
                </header>

                <NewTaskForm />

                <div class="category-grid">
                    <For
                        each={move || store.categories.get().into_iter().enumerate().collect::<Vec<_>>()}
                        key=|(index, name)| (*index, name.clone())
                        children=move |(index, name)| {
                            view! {
                                <CategoryColumn
                                    index=index
                                    category=name
                                    dnd=dnd
                                    on_reorder=on_reorder
                                />
                            }
                        }
                    />
                </div>
            </div>
        </div>
    }
}
