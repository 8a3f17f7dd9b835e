//! New Task Form Component
//!
//! Text input plus category selector for creating tasks.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::store::use_board_store;

/// Form for creating new tasks in the selected category
#[component]
pub fn NewTaskForm() -> impl IntoView {
    let store = use_board_store();

    let (new_text, set_new_text) = signal(String::new());
    // Track the selection by registry index so a renamed category cannot
    // leave the form pointing at a name that no longer exists
    let (selected_index, set_selected_index) = signal(0usize);

    let add_task = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = new_text.get();
        if text.trim().is_empty() { return; }
        let Some(category) = store
            .categories
            .with_untracked(|c| c.get(selected_index.get_untracked()).cloned())
        else { return };

        store.add(&text, &category);
        set_new_text.set(String::new());
    };

    view! {
        <form class="new-task-form" on:submit=add_task>
            <input
                type="text"
                class="new-task-input"
                placeholder="Enter task"
                prop:value=move || new_text.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    set_new_text.set(input.value());
                }
            />
            <select
                class="category-select"
                prop:value=move || selected_index.get().to_string()
                on:change=move |ev| {
                    let target = ev.target().unwrap();
                    let select = target.dyn_ref::<web_sys::HtmlSelectElement>().unwrap();
                    if let Ok(index) = select.value().parse::<usize>() {
                        set_selected_index.set(index);
                    }
                }
            >
                <For
                    each={move || store.categories.get().into_iter().enumerate().collect::<Vec<_>>()}
                    key=|(index, name)| (*index, name.clone())
                    children=move |(index, name)| {
                        view! {
                            <option value=index.to_string()>{name}</option>
                        }
                    }
                />
            </select>
            <button type="submit" class="add-btn">"Add"</button>
        </form>
    }
}
