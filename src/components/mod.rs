//! UI Components
//!
//! Reusable Leptos components.

mod app_bar;
mod new_todo_form;
mod todo_list;

pub use app_bar::AppBar;
pub use new_todo_form::NewTodoForm;
pub use todo_list::TodoList;
