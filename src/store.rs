//! Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The store is
//! created by the app root and handed to components as a prop; the pure list
//! functions underneath it keep reconciliation testable off-wasm.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Filter, Todo};

/// Client-side application state: the cached todo list plus the view filter
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Cached copy of the remote list; converges to the server after each
    /// successful mutation
    pub todos: Vec<Todo>,
    /// Current view filter
    pub filter: Filter,
}

/// Type alias for the store handle (Copy, cheap to pass around)
pub type AppStore = Store<AppState>;

// ========================
// Pure List Functions
// ========================

/// Order-preserving subsequence of `todos` matching `filter`
pub fn visible_todos(todos: &[Todo], filter: Filter) -> Vec<Todo> {
    todos
        .iter()
        .filter(|todo| filter.matches(todo))
        .cloned()
        .collect()
}

/// Replace the todo with the same id in place, keeping its list position
pub fn replace_todo(todos: &mut [Todo], updated: Todo) {
    if let Some(todo) = todos.iter_mut().find(|todo| todo.id == updated.id) {
        *todo = updated;
    }
}

/// Remove exactly the todo with the matching id
pub fn remove_todo(todos: &mut Vec<Todo>, id: u32) {
    todos.retain(|todo| todo.id != id);
}

// ========================
// Store Helper Functions
// ========================

/// Append a server-created todo to the store
pub fn store_push_todo(store: &AppStore, todo: Todo) {
    store.todos().write().push(todo);
}

/// Swap in the server's copy of a todo by id
pub fn store_replace_todo(store: &AppStore, updated: Todo) {
    replace_todo(&mut store.todos().write(), updated);
}

/// Drop a todo from the store by id
pub fn store_remove_todo(store: &AppStore, id: u32) {
    remove_todo(&mut store.todos().write(), id);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_todo(id: u32, title: &str, completed: bool) -> Todo {
        Todo {
            id,
            title: title.to_string(),
            completed,
        }
    }

    fn sample_list() -> Vec<Todo> {
        vec![
            make_todo(1, "a", false),
            make_todo(2, "b", true),
            make_todo(3, "c", false),
            make_todo(4, "d", true),
        ]
    }

    #[test]
    fn test_visible_todos_all_is_identity() {
        let todos = sample_list();
        assert_eq!(visible_todos(&todos, Filter::All), todos);
    }

    #[test]
    fn test_visible_todos_preserves_order() {
        let todos = sample_list();

        let completed = visible_todos(&todos, Filter::Completed);
        assert_eq!(completed.iter().map(|t| t.id).collect::<Vec<_>>(), [2, 4]);

        let pending = visible_todos(&todos, Filter::Pending);
        assert_eq!(pending.iter().map(|t| t.id).collect::<Vec<_>>(), [1, 3]);
    }

    #[test]
    fn test_visible_todos_empty_list() {
        assert!(visible_todos(&[], Filter::Completed).is_empty());
    }

    #[test]
    fn test_replace_todo_in_place() {
        // Toggle scenario: server flips completed on id 1
        let mut todos = vec![make_todo(1, "a", false)];
        replace_todo(&mut todos, make_todo(1, "a", true));
        assert_eq!(todos, vec![make_todo(1, "a", true)]);
    }

    #[test]
    fn test_replace_todo_keeps_position() {
        let mut todos = sample_list();
        replace_todo(&mut todos, make_todo(3, "c2", true));
        assert_eq!(todos.iter().map(|t| t.id).collect::<Vec<_>>(), [1, 2, 3, 4]);
        assert_eq!(todos[2].title, "c2");
        assert!(todos[2].completed);
    }

    #[test]
    fn test_replace_todo_unknown_id_is_noop() {
        let mut todos = sample_list();
        replace_todo(&mut todos, make_todo(99, "ghost", true));
        assert_eq!(todos, sample_list());
    }

    #[test]
    fn test_remove_todo_exact_match_only() {
        let mut todos = sample_list();
        remove_todo(&mut todos, 2);
        assert_eq!(todos.iter().map(|t| t.id).collect::<Vec<_>>(), [1, 3, 4]);

        remove_todo(&mut todos, 99);
        assert_eq!(todos.len(), 3);
    }
}
