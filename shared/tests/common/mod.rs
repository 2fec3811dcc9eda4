#![allow(dead_code)]

use std::ops::Deref;

use crux_core::testing::AppTester;
use crux_core::Request;
use crux_http::protocol::{HttpRequest, HttpResponse, HttpResult};
use todo_shared::{App, Effect, Event, Model, Todo, ViewModel};

/// In-memory stand-in for the REST backend.
#[derive(Default)]
pub struct FakeBackend {
    pub todos: Vec<Todo>,
}

impl FakeBackend {
    pub fn with(todos: Vec<Todo>) -> Self {
        Self { todos }
    }

    /// Applies `request` and answers it the way a JSON REST server would.
    pub fn handle(&mut self, request: &HttpRequest) -> HttpResponse {
        let id = request.url.rsplit('/').next().unwrap_or_default().to_string();

        match request.method.as_str() {
            "GET" => HttpResponse::ok().json(&self.todos).build(),
            "POST" => {
                let todo: Todo = serde_json::from_slice(&request.body).unwrap();
                self.todos.push(todo.clone());
                HttpResponse::status(201).json(&todo).build()
            }
            "PUT" => {
                let todo: Todo = serde_json::from_slice(&request.body).unwrap();
                let slot = self.todos.iter_mut().find(|t| t.id == id).unwrap();
                *slot = todo.clone();
                HttpResponse::ok().json(&todo).build()
            }
            "DELETE" => {
                self.todos.retain(|t| t.id != id);
                HttpResponse::ok().json(serde_json::json!({})).build()
            }
            other => panic!("unexpected method {other}"),
        }
    }
}

/// An HTTP effect the core is waiting on.
pub struct Pending(Request<HttpRequest>);

impl Deref for Pending {
    type Target = HttpRequest;

    fn deref(&self) -> &HttpRequest {
        &self.0.operation
    }
}

pub struct Harness {
    pub app: AppTester<App, Effect>,
    pub model: Model,
    pub backend: FakeBackend,
}

impl Harness {
    pub fn new(todos: Vec<Todo>) -> Self {
        Self {
            app: AppTester::<App, Effect>::default(),
            model: Model::default(),
            backend: FakeBackend::with(todos),
        }
    }

    /// Starts the app and settles the initial load.
    pub fn started(todos: Vec<Todo>) -> Self {
        let mut harness = Self::new(todos);
        let load = single(harness.send(Event::AppStarted));
        harness.settle(load);
        harness
    }

    /// Dispatches `event` and returns the HTTP requests it produced.
    pub fn send(&mut self, event: Event) -> Vec<Pending> {
        let update = self.app.update(event, &mut self.model);
        http_requests(update.effects)
    }

    /// Dispatches every event in turn, collecting the requests they produce.
    pub fn dispatch(&mut self, events: Vec<Event>) -> Vec<Pending> {
        events
            .into_iter()
            .flat_map(|event| self.send(event))
            .collect()
    }

    /// Dispatches `event` and reports whether a render was requested.
    pub fn send_rendered(&mut self, event: Event) -> bool {
        let update = self.app.update(event, &mut self.model);
        update
            .effects
            .iter()
            .any(|effect| matches!(effect, Effect::Render(_)))
    }

    /// Completes `pending` with `result` and returns the events the core
    /// raised, without dispatching them.
    pub fn resolve(&mut self, mut pending: Pending, result: HttpResult) -> Vec<Event> {
        self.app
            .resolve(&mut pending.0, result)
            .expect("request resolves")
            .events
    }

    /// Answers `pending` with `response` and dispatches the outcome.
    pub fn reply(&mut self, pending: Pending, response: HttpResponse) -> Vec<Pending> {
        let events = self.resolve(pending, HttpResult::Ok(response));
        self.dispatch(events)
    }

    /// Fails `pending` at the transport level and dispatches the outcome.
    pub fn fail(&mut self, pending: Pending, error: crux_http::Error) -> Vec<Pending> {
        let events = self.resolve(pending, HttpResult::Err(error));
        self.dispatch(events)
    }

    /// Lets the backend answer `pending` and feeds the response back in.
    pub fn respond(&mut self, pending: Pending) -> Vec<Pending> {
        let response = self.backend.handle(&pending);
        self.reply(pending, response)
    }

    /// Answers `pending`, then settles every request that follows from it.
    pub fn settle(&mut self, pending: Pending) {
        let mut queue = self.respond(pending);
        while let Some(next) = queue.pop() {
            queue.extend(self.respond(next));
        }
    }

    pub fn view(&self) -> ViewModel {
        self.app.view(&self.model)
    }

    pub fn titles(&self) -> Vec<String> {
        self.view().items.into_iter().map(|item| item.title).collect()
    }
}

pub fn http_requests(effects: Vec<Effect>) -> Vec<Pending> {
    effects
        .into_iter()
        .filter_map(|effect| match effect {
            Effect::Http(request) => Some(Pending(request)),
            _ => None,
        })
        .collect()
}

/// Unwraps the one request an event is expected to produce.
pub fn single(mut requests: Vec<Pending>) -> Pending {
    assert_eq!(requests.len(), 1, "expected exactly one request");
    requests.remove(0)
}

pub fn header<'a>(request: &'a HttpRequest, name: &str) -> Option<&'a str> {
    request
        .headers
        .iter()
        .find(|h| h.name.eq_ignore_ascii_case(name))
        .map(|h| h.value.as_str())
}

pub fn sample_todos() -> Vec<Todo> {
    vec![
        Todo::new("00001", "walk dog", false),
        Todo::new("00002", "buy bread", true),
        Todo::new("00003", "call mom", false),
    ]
}
