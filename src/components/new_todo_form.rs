//! New Todo Form Component
//!
//! Form for creating todos. Blank or whitespace-only input is rejected
//! locally and never reaches the network; the field clears only after the
//! server confirms the create.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::ApiClient;
use crate::models::normalize_title;
use crate::store::{store_push_todo, AppStore};

#[component]
pub fn NewTodoForm(api: ApiClient, store: AppStore) -> impl IntoView {
    let (new_title, set_new_title) = signal(String::new());

    let create_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(title) = normalize_title(&new_title.get()) else {
            return;
        };
        let api = api.clone();

        spawn_local(async move {
            match api.create_todo(&title).await {
                Ok(created) => {
                    store_push_todo(&store, created);
                    set_new_title.set(String::new());
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[NewTodoForm] Error creating todo: {}", e).into());
                }
            }
        });
    };

    view! {
        <form class="new-todo-form" on:submit=create_todo>
            <input
                type="text"
                placeholder="New Todo"
                prop:value=move || new_title.get()
                on:input=move |ev| set_new_title.set(event_target_value(&ev))
            />
            <button type="submit">"Add Todo"</button>
        </form>
    }
}
