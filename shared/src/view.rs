use serde::{Deserialize, Serialize};

use crate::gate::OperationKind;
use crate::model::Model;
use crate::projection::project_view;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoItemView {
    pub id: String,
    pub title: String,
    pub completed: bool,
    /// Row is rendered as an edit box with a save button.
    pub is_editing: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ViewModel {
    /// Filtered and sorted todos; hidden behind a loader while `is_loading`.
    pub items: Vec<TodoItemView>,
    pub is_loading: bool,

    pub search_term: String,
    pub sort_enabled: bool,

    pub new_title: String,
    pub editing_title: Option<String>,

    pub can_create: bool,
    pub can_update: bool,
    pub can_delete: bool,

    pub total_count: usize,
}

impl From<&Model> for ViewModel {
    fn from(model: &Model) -> Self {
        let items = project_view(&model.todos, &model.view)
            .into_iter()
            .map(|todo| TodoItemView {
                id: todo.id.clone(),
                title: todo.title.clone(),
                completed: todo.completed,
                is_editing: model.editing.is_editing(&todo.id),
            })
            .collect();

        Self {
            items,
            is_loading: model.is_loading,
            search_term: model.view.search_term.clone(),
            sort_enabled: model.view.sort_enabled,
            new_title: model.new_title.clone(),
            editing_title: model
                .editing
                .id
                .as_ref()
                .map(|_| model.editing.title.clone()),
            can_create: !model.gate.is_busy(OperationKind::Create),
            can_update: !model.gate.is_busy(OperationKind::Update),
            can_delete: !model.gate.is_busy(OperationKind::Delete),
            total_count: model.todos.len(),
        }
    }
}
