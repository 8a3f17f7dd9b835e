//! Category Column Component
//!
//! One board column: a rename-on-click header and the cards of every
//! task carrying this column's category name, in list order. The column
//! is also the drop target for cross-category drags.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use board_dnd::{make_on_column_mouseenter, make_on_column_mouseleave, DndSignals};

use crate::store::use_board_store;
use crate::components::TaskCard;

/// Accent class per column position
const COLUMN_ACCENTS: [&str; 3] = ["accent-amber", "accent-green", "accent-red"];

#[component]
pub fn CategoryColumn(
    /// Position in the category registry
    index: usize,
    /// Current display name
    category: String,
    dnd: DndSignals,
    on_reorder: Callback<(usize, usize, String)>,
) -> impl IntoView {
    let store = use_board_store();

    let filter_name = category.clone();
    let column_tasks = move || {
        store
            .tasks
            .get()
            .into_iter()
            .filter(|task| task.category == filter_name)
            .collect::<Vec<_>>()
    };

    let hover_name = category.clone();
    let is_drop_target = move || {
        dnd.drop_category_read
            .get()
            .is_some_and(|target| target == hover_name)
    };

    let on_mouseenter = make_on_column_mouseenter(dnd, category.clone());
    let on_mouseleave = make_on_column_mouseleave(dnd);

    let column_class = move || {
        let mut c = format!("category-column {}", COLUMN_ACCENTS[index % COLUMN_ACCENTS.len()]);
        if is_drop_target() { c.push_str(" drop-hover"); }
        c
    };

    let is_renaming = move || store.renaming_category.get() == Some(index);
    let header_name = category.clone();
    let rename_default = category.clone();

    view! {
        <div
            class=column_class
            on:mouseenter=on_mouseenter
            on:mouseleave=on_mouseleave
        >
            {move || if is_renaming() {
                let default = rename_default.clone();
                view! {
                    <input
                        type="text"
                        class="rename-input"
                        value=default
                        autofocus=true
                        on:blur=move |ev: web_sys::FocusEvent| {
                            let Some(target) = ev.target() else { return };
                            let Some(input) = target.dyn_ref::<web_sys::HtmlInputElement>() else { return };
                            store.rename_category(index, &input.value());
                        }
                    />
                }.into_any()
            } else {
                let name = header_name.clone();
                view! {
                    <h2
                        class="column-title"
                        on:click=move |_| {
                            // A drop can retarget a click onto the header;
                            // don't pop the rename input for those
                            if dnd.drag_just_ended_read.get_untracked() { return; }
                            store.set_renaming(Some(index));
                        }
                    >
                        {name}
                    </h2>
                }.into_any()
            }}

            <div class="column-cards">
                <For
                    each={move || column_tasks().into_iter().enumerate().collect::<Vec<_>>()}
                    key=|(position, task)| {
                        // Key on every field a mutation can touch so a
                        // reorder, toggle or rename re-renders the card
                        (
                            task.id.clone(),
                            *position,
                            task.text.clone(),
                            task.category.clone(),
                            task.completed,
                        )
                    }
                    children=move |(position, task)| {
                        view! {
                            <TaskCard
                                task=task
                                index=position
                                dnd=dnd
                                on_reorder=on_reorder
                            />
                        }
                    }
                />
            </div>
        </div>
    }
}
