use serde::{Deserialize, Serialize};

use crate::config::BackendConfig;
use crate::error::ValidationError;
use crate::gate::OperationGate;

/// A single task record as the backend stores it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: String,
    pub title: String,
    pub completed: bool,
}

impl Todo {
    pub fn new(id: impl Into<String>, title: impl Into<String>, completed: bool) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            completed,
        }
    }
}

/// Search and sort inputs owned by the UI.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    pub search_term: String,
    pub sort_enabled: bool,
}

impl ViewState {
    pub fn toggle_sort(&mut self) {
        self.sort_enabled = !self.sort_enabled;
    }
}

/// The todo currently being edited inline, if any.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditingContext {
    pub id: Option<String>,
    pub title: String,
}

impl EditingContext {
    /// Starts editing `id`, seeding the input with the todo's current title.
    ///
    /// The id must exist in `todos` at the moment editing begins.
    pub fn begin(&mut self, todos: &[Todo], id: &str) -> Result<(), ValidationError> {
        let todo = todos
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| ValidationError::UnknownTodo(id.to_string()))?;

        self.id = Some(todo.id.clone());
        self.title = todo.title.clone();
        Ok(())
    }

    pub fn clear(&mut self) {
        self.id = None;
        self.title.clear();
    }

    pub fn is_editing(&self, id: &str) -> bool {
        self.id.as_deref() == Some(id)
    }

    /// The `(id, title)` pair an update would send.
    pub fn target(&self) -> Result<(&str, &str), ValidationError> {
        let id = self.id.as_deref().ok_or(ValidationError::NoEditTarget)?;
        if self.title.is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        Ok((id, &self.title))
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Model {
    pub config: BackendConfig,

    /// Authoritative collection, replaced wholesale on every successful load.
    pub todos: Vec<Todo>,

    pub view: ViewState,
    pub gate: OperationGate,
    pub editing: EditingContext,

    /// Pending input of the "add" field.
    pub new_title: String,

    pub is_loading: bool,
    /// Generation of the most recently issued load.
    pub load_generation: u64,
}

impl Model {
    pub fn new(config: BackendConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    /// Claims the next load generation.
    pub fn next_load_generation(&mut self) -> u64 {
        self.load_generation += 1;
        self.load_generation
    }

    pub fn is_latest_load(&self, generation: u64) -> bool {
        generation == self.load_generation
    }

    pub fn find(&self, id: &str) -> Option<&Todo> {
        self.todos.iter().find(|t| t.id == id)
    }
}
