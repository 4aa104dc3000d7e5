//! Todo App Root
//!
//! Owns the store, the theme signals, and the API client, and wires them into
//! the component tree as explicit props.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api::{ApiClient, DEFAULT_API_BASE};
use crate::components::{AppBar, NewTodoForm, TodoList};
use crate::store::{AppState, AppStateStoreFields, AppStore};
use crate::theme::Theme;

#[component]
pub fn App() -> impl IntoView {
    let store: AppStore = Store::new(AppState::default());
    let (theme, set_theme) = signal(Theme::default());
    let api = ApiClient::new(DEFAULT_API_BASE);

    // Load the full list on mount; on failure the list stays empty
    let load_api = api.clone();
    Effect::new(move |_| {
        let api = load_api.clone();
        spawn_local(async move {
            match api.fetch_todos().await {
                Ok(loaded) => {
                    web_sys::console::log_1(&format!("[App] Loaded {} todos", loaded.len()).into());
                    store.todos().set(loaded);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[App] Error fetching todos: {}", e).into());
                }
            }
        });
    });

    let page_style = move || {
        let palette = theme.get().palette();
        format!(
            "background-color: {}; color: {}; min-height: 100vh;",
            palette.background, palette.text
        )
    };

    view! {
        <div class="app-layout" style=page_style>
            <AppBar store=store theme=theme set_theme=set_theme />

            <main class="main-content">
                <h1>"Todo List"</h1>
                <NewTodoForm api=api.clone() store=store />
                <TodoList api=api store=store theme=theme />
            </main>
        </div>
    }
}
