//! Theme Toggle Component

use leptos::prelude::*;

use crate::models::Theme;
use crate::store::use_board_store;

/// Sun/moon button flipping the page color scheme
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let store = use_board_store();

    view! {
        <button
            class="theme-toggle"
            title=move || match store.theme.get() {
                Theme::Dark => "Switch to light",
                Theme::Light => "Switch to dark",
            }
            on:click=move |_| store.toggle_theme()
        >
            {move || match store.theme.get() {
                Theme::Dark => "☀",
                Theme::Light => "🌙",
            }}
        </button>
    }
}
