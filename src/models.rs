//! Frontend Models
//!
//! Data structures matching the remote store's wire format.

use serde::{Deserialize, Serialize};

/// Todo record as the backend returns it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    pub id: u32,
    pub title: String,
    pub completed: bool,
}

/// Client-side view filter over the todo list (not persisted)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Completed,
    Pending,
}

impl Filter {
    /// View predicate for a single todo
    pub fn matches(self, todo: &Todo) -> bool {
        match self {
            Filter::All => true,
            Filter::Completed => todo.completed,
            Filter::Pending => !todo.completed,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Completed => "Completed",
            Filter::Pending => "Pending",
        }
    }
}

/// Trim a title from the form; blank or whitespace-only input is rejected
/// before any request is issued.
pub fn normalize_title(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_todo(id: u32, completed: bool) -> Todo {
        Todo {
            id,
            title: format!("Todo {}", id),
            completed,
        }
    }

    #[test]
    fn test_filter_matches() {
        let open = make_todo(1, false);
        let done = make_todo(2, true);

        assert!(Filter::All.matches(&open));
        assert!(Filter::All.matches(&done));
        assert!(!Filter::Completed.matches(&open));
        assert!(Filter::Completed.matches(&done));
        assert!(Filter::Pending.matches(&open));
        assert!(!Filter::Pending.matches(&done));
    }

    #[test]
    fn test_normalize_title_rejects_blank() {
        assert_eq!(normalize_title(""), None);
        assert_eq!(normalize_title("   "), None);
        assert_eq!(normalize_title("\t\n"), None);
    }

    #[test]
    fn test_normalize_title_trims() {
        assert_eq!(normalize_title("  buy milk  "), Some("buy milk".to_string()));
        assert_eq!(normalize_title("a"), Some("a".to_string()));
    }

    #[test]
    fn test_todo_wire_format() {
        let body = r#"[{"id":1,"title":"a","completed":false},{"id":2,"title":"b","completed":true}]"#;
        let todos: Vec<Todo> = serde_json::from_str(body).unwrap();
        assert_eq!(todos.len(), 2);
        assert_eq!(todos[0].id, 1);
        assert_eq!(todos[0].title, "a");
        assert!(!todos[0].completed);
        assert!(todos[1].completed);
    }
}
