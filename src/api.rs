//! REST API Client
//!
//! HTTP bindings for the remote todo store, one async wrapper per backend
//! operation. On wasm32 reqwest rides the browser's fetch API.

use reqwest::Client;
use serde::Serialize;
use thiserror::Error;

use crate::models::Todo;

/// Base URL of the remote store; must end with a trailing slash.
pub const DEFAULT_API_BASE: &str = "https://todo-task-ez87.onrender.com/api/todos/";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
}

// ========================
// Request Bodies
// ========================

#[derive(Serialize)]
struct CreateTodoBody<'a> {
    title: &'a str,
    completed: bool,
}

#[derive(Serialize)]
struct PatchTodoBody {
    completed: bool,
}

// ========================
// Client
// ========================

/// Handle on the remote todo store. Cloning is cheap; the inner reqwest
/// client is shared.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
        }
    }

    fn item_url(&self, id: u32) -> String {
        format!("{}{}/", self.base_url, id)
    }

    /// `GET {base}` — full list
    pub async fn fetch_todos(&self) -> Result<Vec<Todo>, ApiError> {
        let todos = self
            .http
            .get(&self.base_url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(todos)
    }

    /// `POST {base}` — create with completed=false; the server assigns the id
    pub async fn create_todo(&self, title: &str) -> Result<Todo, ApiError> {
        let todo = self
            .http
            .post(&self.base_url)
            .json(&CreateTodoBody {
                title,
                completed: false,
            })
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(todo)
    }

    /// `PATCH {base}{id}/` — partial update of the completed flag; returns
    /// the server's authoritative copy
    pub async fn set_completed(&self, id: u32, completed: bool) -> Result<Todo, ApiError> {
        let todo = self
            .http
            .patch(self.item_url(id))
            .json(&PatchTodoBody { completed })
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(todo)
    }

    /// `DELETE {base}{id}/` — only the status matters, any body is ignored
    pub async fn delete_todo(&self, id: u32) -> Result<(), ApiError> {
        self.http
            .delete(self.item_url(id))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}
