use serde::{Deserialize, Serialize};

use crate::config::BackendConfig;
use crate::error::SyncError;
use crate::model::Todo;

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub enum Event {
    #[default]
    Noop,

    /// Initial activation: fetches the collection.
    AppStarted,
    Configure(BackendConfig),
    ReloadRequested,

    // Search and sort
    SearchChanged(String),
    SortToggled,

    // Create
    NewTitleChanged(String),
    CreateRequested,

    // Inline edit
    EditStarted {
        id: String,
    },
    EditTitleChanged(String),
    EditCancelled,
    UpdateRequested,

    // Delete
    DeleteRequested {
        id: String,
    },

    // Responses, produced by the core only.
    #[serde(skip)]
    LoadResponse {
        generation: u64,
        outcome: Result<Vec<Todo>, SyncError>,
    },
    #[serde(skip)]
    CreateResponse(Result<serde_json::Value, SyncError>),
    #[serde(skip)]
    UpdateResponse(Result<serde_json::Value, SyncError>),
    #[serde(skip)]
    DeleteResponse {
        id: String,
        outcome: Result<(), SyncError>,
    },
}

impl Event {
    pub fn name(&self) -> &'static str {
        match self {
            Event::Noop => "noop",
            Event::AppStarted => "app_started",
            Event::Configure(_) => "configure",
            Event::ReloadRequested => "reload_requested",
            Event::SearchChanged(_) => "search_changed",
            Event::SortToggled => "sort_toggled",
            Event::NewTitleChanged(_) => "new_title_changed",
            Event::CreateRequested => "create_requested",
            Event::EditStarted { .. } => "edit_started",
            Event::EditTitleChanged(_) => "edit_title_changed",
            Event::EditCancelled => "edit_cancelled",
            Event::UpdateRequested => "update_requested",
            Event::DeleteRequested { .. } => "delete_requested",
            Event::LoadResponse { .. } => "load_response",
            Event::CreateResponse(_) => "create_response",
            Event::UpdateResponse(_) => "update_response",
            Event::DeleteResponse { .. } => "delete_response",
        }
    }

    pub fn is_user_initiated(&self) -> bool {
        !matches!(
            self,
            Event::Noop
                | Event::LoadResponse { .. }
                | Event::CreateResponse(_)
                | Event::UpdateResponse(_)
                | Event::DeleteResponse { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shell_events_deserialize() {
        let event: Event = serde_json::from_str(r#"{"SearchChanged":"milk"}"#).unwrap();
        assert_eq!(event, Event::SearchChanged("milk".into()));

        let event: Event = serde_json::from_str(r#"{"DeleteRequested":{"id":"00002"}}"#).unwrap();
        assert_eq!(event, Event::DeleteRequested { id: "00002".into() });
    }

    #[test]
    fn test_responses_are_not_user_initiated() {
        assert!(Event::CreateRequested.is_user_initiated());
        assert!(!Event::CreateResponse(Ok(serde_json::Value::Null)).is_user_initiated());
        assert!(!Event::LoadResponse {
            generation: 1,
            outcome: Ok(vec![]),
        }
        .is_user_initiated());
    }
}
