//! Todo List Component
//!
//! Renders the filtered list with a completion checkbox and a delete button
//! per row. Every mutation goes to the server first; the local list is only
//! reconciled from the server's response, so a failed request leaves it
//! untouched (logged, not surfaced).

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::ApiClient;
use crate::store::{
    store_remove_todo, store_replace_todo, visible_todos, AppStateStoreFields, AppStore,
};
use crate::theme::Theme;

#[component]
pub fn TodoList(api: ApiClient, store: AppStore, theme: ReadSignal<Theme>) -> impl IntoView {
    let visible = move || visible_todos(&store.todos().get(), store.filter().get());

    let list_style = move || {
        let palette = theme.get().palette();
        format!("background-color: {};", palette.paper)
    };

    view! {
        <ul class="todo-list" style=list_style>
            <For
                each=visible
                // Key on every rendered field so server-side changes re-render the row
                key=|todo| (todo.id, todo.completed, todo.title.clone())
                children=move |todo| {
                    let id = todo.id;
                    let completed = todo.completed;
                    let toggle_api = api.clone();
                    let delete_api = api.clone();

                    let toggle = move |_| {
                        let api = toggle_api.clone();
                        spawn_local(async move {
                            match api.set_completed(id, !completed).await {
                                Ok(updated) => store_replace_todo(&store, updated),
                                Err(e) => {
                                    web_sys::console::error_1(
                                        &format!("[TodoList] Error updating todo {}: {}", id, e).into(),
                                    );
                                }
                            }
                        });
                    };

                    let delete = move |_| {
                        let api = delete_api.clone();
                        spawn_local(async move {
                            match api.delete_todo(id).await {
                                Ok(()) => store_remove_todo(&store, id),
                                Err(e) => {
                                    web_sys::console::error_1(
                                        &format!("[TodoList] Error deleting todo {}: {}", id, e).into(),
                                    );
                                }
                            }
                        });
                    };

                    let title_style = move || {
                        let palette = theme.get().palette();
                        if completed {
                            format!("color: {}; text-decoration: line-through;", palette.text)
                        } else {
                            format!("color: {};", palette.text)
                        }
                    };

                    view! {
                        <li class="todo-item">
                            <input
                                type="checkbox"
                                prop:checked=completed
                                on:change=toggle
                            />
                            <span class="todo-title" style=title_style>{todo.title.clone()}</span>
                            <button class="delete-btn" on:click=delete>"×"</button>
                        </li>
                    }
                }
            />
        </ul>
        <p class="todo-count">
            {move || {
                let shown = visible().len();
                let total = store.todos().get().len();
                format!("{} of {} todos shown", shown, total)
            }}
        </p>
    }
}
