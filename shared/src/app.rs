//! Synchronization controller.
//!
//! Keeps the authoritative todo collection in step with the backend. Every
//! mutation goes through the [`OperationGate`](crate::gate::OperationGate):
//! a request is only issued when no request of the same kind is in flight,
//! and the response event releases the flag before anything else happens.
//! A successful mutation is followed by a full reload; the collection is
//! never patched locally.

use tracing::{debug, info, warn};

use crate::capabilities::http::{decode_ack, decode_todos, settle};
use crate::capabilities::{Capabilities, TodoRequest};
use crate::error::{SyncError, ValidationError};
use crate::event::Event;
use crate::gate::OperationKind;
use crate::id::next_id;
use crate::model::{Model, Todo};
use crate::view::ViewModel;

#[derive(Default)]
pub struct App;

impl App {
    /// Fetches the whole collection under a fresh generation.
    fn load(model: &mut Model, caps: &Capabilities) {
        let request = match TodoRequest::list(&model.config) {
            Ok(request) => request,
            Err(e) => {
                warn!(error = %e, "cannot build load request");
                return;
            }
        };

        let generation = model.next_load_generation();
        model.is_loading = true;
        debug!(generation, "loading todos");

        request.send(&caps.http, move |result| Event::LoadResponse {
            generation,
            outcome: settle(result).and_then(|body| decode_todos(&body)),
        });
    }

    fn handle_load_response(
        generation: u64,
        outcome: Result<Vec<Todo>, SyncError>,
        model: &mut Model,
    ) {
        if !model.is_latest_load(generation) {
            debug!(
                generation,
                latest = model.load_generation,
                "discarding stale load response"
            );
            return;
        }

        model.is_loading = false;

        match outcome {
            Ok(todos) => {
                debug!(count = todos.len(), "todos loaded");
                model.todos = todos;
            }
            Err(e) => warn!(error = %e, "load failed"),
        }
    }

    fn submit_create(model: &mut Model, caps: &Capabilities) {
        if model.new_title.is_empty() {
            debug!(reason = %ValidationError::EmptyTitle, "create not submitted");
            return;
        }

        let todo = Todo::new(next_id(&model.todos), model.new_title.clone(), false);
        let request = match TodoRequest::create(&model.config, &todo) {
            Ok(request) => request,
            Err(e) => {
                warn!(error = %e, "cannot build create request");
                return;
            }
        };

        if !model.gate.try_begin(OperationKind::Create) {
            debug!("create already in flight");
            return;
        }
        debug!(id = %todo.id, "creating todo");

        request.send(&caps.http, |result| {
            Event::CreateResponse(settle(result).and_then(|body| decode_ack(&body)))
        });
    }

    fn handle_create_response(
        outcome: Result<serde_json::Value, SyncError>,
        model: &mut Model,
        caps: &Capabilities,
    ) {
        model.gate.end(OperationKind::Create);

        match outcome {
            Ok(response) => {
                info!(%response, "todo created");
                model.new_title.clear();
                Self::load(model, caps);
            }
            Err(e) => warn!(error = %e, "create failed"),
        }
    }

    fn start_edit(id: &str, model: &mut Model) {
        if model.gate.is_busy(OperationKind::Update) {
            debug!(id, "edit not started, update in flight");
            return;
        }

        if let Err(e) = model.editing.begin(&model.todos, id) {
            debug!(reason = %e, "edit not started");
        }
    }

    // Always sends `completed: false`, whatever the todo's current state.
    // The response only has to be JSON; its status is not consulted.
    fn submit_update(model: &mut Model, caps: &Capabilities) {
        let todo = match model.editing.target() {
            Ok((id, title)) => Todo::new(id, title, false),
            Err(e) => {
                debug!(reason = %e, "update not submitted");
                return;
            }
        };

        let request = match TodoRequest::update(&model.config, &todo) {
            Ok(request) => request,
            Err(e) => {
                warn!(error = %e, "cannot build update request");
                return;
            }
        };

        if !model.gate.try_begin(OperationKind::Update) {
            debug!("update already in flight");
            return;
        }
        debug!(id = %todo.id, "updating todo");

        request.send(&caps.http, |result| {
            Event::UpdateResponse(settle(result).and_then(|body| decode_ack(&body)))
        });
    }

    fn handle_update_response(
        outcome: Result<serde_json::Value, SyncError>,
        model: &mut Model,
        caps: &Capabilities,
    ) {
        model.gate.end(OperationKind::Update);

        match outcome {
            Ok(response) => {
                info!(%response, "todo updated");
                model.editing.clear();
                Self::load(model, caps);
            }
            Err(e) => warn!(error = %e, "update failed"),
        }
    }

    fn submit_delete(id: String, model: &mut Model, caps: &Capabilities) {
        let request = match TodoRequest::delete(&model.config, &id) {
            Ok(request) => request,
            Err(e) => {
                warn!(error = %e, "cannot build delete request");
                return;
            }
        };

        if !model.gate.try_begin(OperationKind::Delete) {
            debug!(%id, "delete already in flight");
            return;
        }
        debug!(%id, "deleting todo");

        // Any response that arrives counts, body or not.
        request.send(&caps.http, move |result| Event::DeleteResponse {
            id,
            outcome: settle(result).map(|_| ()),
        });
    }

    fn handle_delete_response(
        id: &str,
        outcome: Result<(), SyncError>,
        model: &mut Model,
        caps: &Capabilities,
    ) {
        model.gate.end(OperationKind::Delete);

        match outcome {
            Ok(()) => {
                info!(id, "todo deleted");
                if model.editing.is_editing(id) {
                    model.editing.clear();
                }
                Self::load(model, caps);
            }
            Err(e) => warn!(id, error = %e, "delete failed"),
        }
    }
}

impl crux_core::App for App {
    type Event = Event;
    type Model = Model;
    type ViewModel = ViewModel;
    type Capabilities = Capabilities;

    fn update(&self, event: Event, model: &mut Model, caps: &Capabilities) {
        if event.is_user_initiated() {
            debug!(event = event.name(), "user action");
        }

        match event {
            Event::Noop => return,

            Event::AppStarted | Event::ReloadRequested => Self::load(model, caps),

            Event::Configure(config) => match config.validate() {
                Ok(()) => {
                    model.config = config;
                    Self::load(model, caps);
                }
                Err(e) => {
                    warn!(error = %e, "ignoring invalid backend configuration");
                    return;
                }
            },

            Event::LoadResponse {
                generation,
                outcome,
            } => Self::handle_load_response(generation, outcome, model),

            Event::SearchChanged(term) => model.view.search_term = term,

            Event::SortToggled => model.view.toggle_sort(),

            Event::NewTitleChanged(title) => model.new_title = title,

            Event::CreateRequested => Self::submit_create(model, caps),

            Event::CreateResponse(outcome) => Self::handle_create_response(outcome, model, caps),

            Event::EditStarted { id } => Self::start_edit(&id, model),

            Event::EditTitleChanged(title) => {
                if model.editing.id.is_some() {
                    model.editing.title = title;
                }
            }

            Event::EditCancelled => model.editing.clear(),

            Event::UpdateRequested => Self::submit_update(model, caps),

            Event::UpdateResponse(outcome) => Self::handle_update_response(outcome, model, caps),

            Event::DeleteRequested { id } => Self::submit_delete(id, model, caps),

            Event::DeleteResponse { id, outcome } => {
                Self::handle_delete_response(&id, outcome, model, caps)
            }
        }

        caps.render.render();
    }

    fn view(&self, model: &Model) -> ViewModel {
        ViewModel::from(model)
    }
}
