//! Shared core of the todo list client.
//!
//! The shell renders [`ViewModel`] and forwards user input as [`Event`]s;
//! the core owns all state and talks to the REST backend through the HTTP
//! capability.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod app;
pub mod capabilities;
pub mod config;
pub mod error;
pub mod event;
pub mod gate;
pub mod id;
pub mod model;
pub mod projection;
pub mod view;

pub use app::App;
pub use capabilities::{Capabilities, Effect};
pub use config::BackendConfig;
pub use error::{ConfigError, SyncError, ValidationError};
pub use event::Event;
pub use gate::{OperationGate, OperationKind};
pub use id::next_id;
pub use model::{EditingContext, Model, Todo, ViewState};
pub use projection::project;
pub use view::{TodoItemView, ViewModel};

pub use crux_core::App as CruxApp;
