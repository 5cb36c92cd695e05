//! Test doubles for the transport port.
//!
//! - [`StubTransport`] replays scripted responses and records requests.
//! - [`MemoryBackend`] is a small in-memory plan store speaking the same API.
//! - [`GatedTransport`] holds back one endpoint's responses until released, so
//!   tests can make responses arrive out of issuance order.

use std::{
    collections::VecDeque,
    sync::{Arc, Mutex, MutexGuard},
};

use serde_json::{json, Value};
use tokio::sync::Notify;

use crate::{
    error::Failure,
    models::{Goal, Plan, Progress, Task, TaskField},
    transport::{ApiRequest, ApiResponse, Method, Transport, TransportFuture},
};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().expect("test double lock poisoned")
}

/// Transport that replays scripted responses in order.
#[derive(Default)]
pub struct StubTransport {
    responses: Mutex<VecDeque<Result<ApiResponse, Failure>>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl StubTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response.
    pub fn respond(self, status: u16, body: impl Into<String>) -> Self {
        lock(&self.responses).push_back(Ok(ApiResponse::new(status, body)));
        self
    }

    /// Queue a JSON response.
    pub fn respond_json(self, status: u16, body: &Value) -> Self {
        lock(&self.responses).push_back(Ok(ApiResponse::json(status, body)));
        self
    }

    /// Queue a network failure.
    pub fn fail(self, message: &str) -> Self {
        lock(&self.responses).push_back(Err(Failure::Network {
            message: message.to_string(),
        }));
        self
    }

    /// Every request sent so far.
    pub fn requests(&self) -> Vec<ApiRequest> {
        lock(&self.requests).clone()
    }
}

impl Transport for StubTransport {
    fn send(&self, request: ApiRequest) -> TransportFuture<'_> {
        lock(&self.requests).push(request);
        let next = lock(&self.responses).pop_front().unwrap_or_else(|| {
            Err(Failure::Network {
                message: "no scripted response".to_string(),
            })
        });
        Box::pin(async move { next })
    }
}

/// In-memory plan store.
#[derive(Default)]
pub struct MemoryBackend {
    goals: Mutex<Vec<Goal>>,
    failing: Mutex<Vec<(Method, String)>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl MemoryBackend {
    pub fn with_goals(goals: Vec<Goal>) -> Self {
        Self {
            goals: Mutex::new(goals),
            ..Default::default()
        }
    }

    /// Stored copy of a goal.
    pub fn goal(&self, id: &str) -> Option<Goal> {
        lock(&self.goals).iter().find(|g| g.id == id).cloned()
    }

    /// Make `method` on `endpoint` answer 500 from now on. `endpoint` is the
    /// last path segment (`"completion"`, `"progress"`, `"detail"`), `"task"`
    /// for the goal document itself, or `"history"`.
    pub fn fail(&self, method: Method, endpoint: &str) {
        lock(&self.failing).push((method, endpoint.to_string()));
    }

    /// Every request received so far.
    pub fn requests(&self) -> Vec<ApiRequest> {
        lock(&self.requests).clone()
    }

    /// Number of requests received so far.
    pub fn request_count(&self) -> usize {
        lock(&self.requests).len()
    }

    fn handle(&self, request: &ApiRequest) -> ApiResponse {
        lock(&self.requests).push(request.clone());

        let endpoint = endpoint(request);
        if lock(&self.failing)
            .iter()
            .any(|(method, name)| *method == request.method && name == endpoint)
        {
            return ApiResponse::new(500, "");
        }

        let segments: Vec<&str> = request.segments.iter().map(String::as_str).collect();
        let user = request.user_id.as_deref().unwrap_or_default();
        let body = request.body.clone().unwrap_or(Value::Null);

        match (request.method, segments.as_slice()) {
            (Method::Post, ["api", "plan"]) => generate(&body),
            (Method::Put, ["api", "update-plan"]) => self.save_draft(&body),
            (Method::Get, ["api", "history"]) => {
                let history: Vec<Goal> = lock(&self.goals)
                    .iter()
                    .filter(|g| g.user_id == user)
                    .cloned()
                    .collect();
                ApiResponse::json(200, &json!({ "history": history }))
            }
            (method, ["api", "task", id, rest @ ..]) => self.with_goal(id, user, |goals, index| {
                handle_goal(goals, index, method, rest, body)
            }),
            _ => ApiResponse::new(404, ""),
        }
    }

    fn with_goal<F>(&self, id: &str, user: &str, f: F) -> ApiResponse
    where
        F: FnOnce(&mut Vec<Goal>, usize) -> ApiResponse,
    {
        let mut goals = lock(&self.goals);
        match goals.iter().position(|g| g.id == id) {
            None => ApiResponse::new(404, ""),
            Some(index) if goals[index].user_id != user => ApiResponse::new(403, ""),
            Some(index) => f(&mut goals, index),
        }
    }

    fn save_draft(&self, body: &Value) -> ApiResponse {
        let Ok(plan) = serde_json::from_value::<Plan>(body["plan"].clone()) else {
            return ApiResponse::new(422, "");
        };
        let mut goals = lock(&self.goals);
        let goal = Goal {
            id: format!("saved-{}", goals.len() + 1),
            user_id: body["user_id"].as_str().unwrap_or_default().to_string(),
            query: body["goal"].as_str().unwrap_or_default().to_string(),
            result: plan,
            timestamp: "2025-03-01T09:30:00".to_string(),
            ..Default::default()
        };
        goals.push(goal);
        ApiResponse::new(200, "")
    }
}

fn endpoint(request: &ApiRequest) -> &str {
    request
        .segments
        .get(3)
        .or_else(|| request.segments.get(1))
        .map_or("", String::as_str)
}

fn generate(body: &Value) -> ApiResponse {
    let goal = body["goal"].as_str().unwrap_or_default();
    let timeline = body["include_timeline"].as_bool().unwrap_or(false);
    let duration = timeline.then(|| "7 days".to_string());
    let plan = Plan {
        objective: format!("Achieve: {goal}"),
        tasks: vec![
            Task {
                title: "Week 1".to_string(),
                content: "Basics".to_string(),
                duration: duration.clone(),
                completed: None,
            },
            Task {
                title: "Week 2".to_string(),
                content: "Practice".to_string(),
                duration,
                completed: None,
            },
        ],
    };
    ApiResponse::json(200, &json!(plan))
}

fn handle_goal(
    goals: &mut Vec<Goal>,
    index: usize,
    method: Method,
    rest: &[&str],
    body: Value,
) -> ApiResponse {
    if let (Method::Delete, []) = (method, rest) {
        goals.remove(index);
        return ApiResponse::new(200, "");
    }

    let goal = &mut goals[index];
    match (method, rest) {
        (Method::Get, []) => ApiResponse::json(200, &json!(goal)),
        (Method::Put, []) => match serde_json::from_value::<Goal>(body) {
            Ok(mut replacement) => {
                replacement.id = goal.id.clone();
                *goal = replacement;
                ApiResponse::new(200, "")
            }
            Err(_) => ApiResponse::new(422, ""),
        },
        (Method::Patch, ["detail"]) => {
            let index = body["task_index"].as_u64().map(|i| i as usize);
            let field = body["field"].as_str().and_then(|f| f.parse::<TaskField>().ok());
            let value = body["value"].as_str();
            match (index, field, value) {
                (Some(i), Some(field), Some(value)) if i < goal.result.tasks.len() => {
                    goal.result.tasks[i].set_field(field, value);
                    ApiResponse::new(200, "")
                }
                _ => ApiResponse::new(422, ""),
            }
        }
        (Method::Patch, ["completion"]) => {
            let index = body["task_index"].as_u64().map(|i| i as usize);
            match (index, body["completed"].as_bool()) {
                (Some(i), Some(completed)) if i < goal.result.tasks.len() => {
                    goal.result.tasks[i].completed = Some(completed);
                    ApiResponse::new(200, "")
                }
                _ => ApiResponse::new(422, ""),
            }
        }
        (Method::Get, ["progress"]) => {
            ApiResponse::json(200, &json!(Progress::from_tasks(&goal.result.tasks)))
        }
        _ => ApiResponse::new(404, ""),
    }
}

impl Transport for MemoryBackend {
    fn send(&self, request: ApiRequest) -> TransportFuture<'_> {
        let response = self.handle(&request);
        Box::pin(async move { Ok(response) })
    }
}

/// Forwards everything to the wrapped backend, but holds the response for
/// one endpoint until [`GatedTransport::release`] is called. The backend
/// applies requests in issuance order; the caller sees them complete late.
pub struct GatedTransport {
    inner: Arc<MemoryBackend>,
    endpoint: String,
    gate: Notify,
}

impl GatedTransport {
    pub fn new(inner: Arc<MemoryBackend>, endpoint: &str) -> Self {
        Self {
            inner,
            endpoint: endpoint.to_string(),
            gate: Notify::new(),
        }
    }

    /// Let the held request through.
    pub fn release(&self) {
        self.gate.notify_one();
    }
}

impl Transport for GatedTransport {
    fn send(&self, request: ApiRequest) -> TransportFuture<'_> {
        Box::pin(async move {
            let gated = endpoint(&request) == self.endpoint;
            let response = self.inner.send(request).await;
            if gated {
                self.gate.notified().await;
            }
            response
        })
    }
}
