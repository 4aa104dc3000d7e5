//! App Bar Component
//!
//! Top bar with the theme toggle and the view filter tabs.

use leptos::prelude::*;

use crate::models::Filter;
use crate::store::{AppStateStoreFields, AppStore};
use crate::theme::Theme;

/// Filter tab order in the bar
const FILTERS: &[Filter] = &[Filter::All, Filter::Completed, Filter::Pending];

#[component]
pub fn AppBar(
    store: AppStore,
    theme: ReadSignal<Theme>,
    set_theme: WriteSignal<Theme>,
) -> impl IntoView {
    let toggle_theme = move |_| {
        set_theme.set(theme.get().toggled());
    };

    let bar_style = move || {
        let palette = theme.get().palette();
        // Dark mode sits the bar on the paper surface; light mode keeps the
        // primary-colored bar with white text.
        let (background, text) = if theme.get().dark {
            (palette.paper, palette.text)
        } else {
            (palette.primary, "#ffffff")
        };
        format!("background-color: {}; color: {};", background, text)
    };

    view! {
        <header class="app-bar" style=bar_style>
            <button
                class="theme-toggle-btn"
                title=move || if theme.get().dark { "Switch to light mode" } else { "Switch to dark mode" }
                on:click=toggle_theme
            >
                {move || if theme.get().dark { "☀" } else { "🌙" }}
            </button>

            {FILTERS
                .iter()
                .map(|&filter| {
                    let is_active = move || store.filter().get() == filter;
                    view! {
                        <button
                            class=move || if is_active() { "filter-tab active" } else { "filter-tab" }
                            on:click=move |_| store.filter().set(filter)
                        >
                            {filter.label()}
                        </button>
                    }
                })
                .collect_view()}
        </header>
    }
}
