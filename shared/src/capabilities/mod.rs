pub mod http;

pub use self::http::{HttpMethod, TodoRequest, JSON_CONTENT_TYPE};

// Crux's built-in Render capability covers everything the view needs.
pub use crux_core::render::Render;
pub use crux_http::Http;

use crate::app::App;
use crate::event::Event;

pub type AppHttp = Http<Event>;

#[derive(crux_core::macros::Effect)]
#[effect(app = "App")]
pub struct Capabilities {
    pub http: Http<Event>,
    pub render: Render<Event>,
}
