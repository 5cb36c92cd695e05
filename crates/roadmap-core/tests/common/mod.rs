use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};

use roadmap_core::{
    transport::TransportFuture, ApiRequest, ApiResponse, PlanClient, PlanClientBuilder, Transport,
};
use serde_json::Value;

/// Transport that answers from a queue and remembers what it was sent.
#[derive(Default)]
pub struct RecordingTransport {
    responses: Mutex<VecDeque<ApiResponse>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl RecordingTransport {
    pub fn push(&self, status: u16, body: Value) {
        self.responses
            .lock()
            .expect("lock")
            .push_back(ApiResponse::json(status, &body));
    }

    pub fn push_empty(&self, status: u16) {
        self.responses
            .lock()
            .expect("lock")
            .push_back(ApiResponse::new(status, ""));
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().expect("lock").clone()
    }
}

impl Transport for RecordingTransport {
    fn send(&self, request: ApiRequest) -> TransportFuture<'_> {
        self.requests.lock().expect("lock").push(request);
        let response = self
            .responses
            .lock()
            .expect("lock")
            .pop_front()
            .unwrap_or_else(|| ApiResponse::new(599, ""));
        Box::pin(async move { Ok(response) })
    }
}

/// Helper function to create a test client for user `u1`.
pub fn create_test_client() -> (Arc<RecordingTransport>, PlanClient) {
    let transport = Arc::new(RecordingTransport::default());
    let client = PlanClientBuilder::new()
        .with_user_id("u1")
        .with_transport(transport.clone())
        .build()
        .expect("Failed to create client");
    (transport, client)
}
