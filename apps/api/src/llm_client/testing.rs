//! Scripted transport for exercising `LlmClient` without a network.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::json;

use crate::llm_client::transport::{Transport, TransportResponse};
use crate::llm_client::wire::GenerateContentRequest;

/// Replays a fixed list of responses, one per attempt, and records every
/// request it receives.
pub struct ScriptedTransport {
    script: Mutex<VecDeque<TransportResponse>>,
    attempts: AtomicUsize,
    requests: Mutex<Vec<serde_json::Value>>,
}

impl ScriptedTransport {
    pub fn new(script: Vec<TransportResponse>) -> Arc<Self> {
        Arc::new(Self {
            script: Mutex::new(script.into()),
            attempts: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }

    /// Serialized bodies of all requests sent so far.
    pub fn requests(&self) -> Vec<serde_json::Value> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn send(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<TransportResponse, reqwest::Error> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        self.requests
            .lock()
            .unwrap()
            .push(serde_json::to_value(request).unwrap());
        Ok(self
            .script
            .lock()
            .unwrap()
            .pop_front()
            .expect("scripted transport ran out of responses"))
    }
}

pub fn reply(status: u16, body: &str) -> TransportResponse {
    TransportResponse {
        status,
        body: body.to_string(),
    }
}

/// A 200 whose first candidate carries `text`.
pub fn ok_text(text: &str) -> TransportResponse {
    reply(
        200,
        &json!({"candidates": [{"content": {"parts": [{"text": text}]}}]}).to_string(),
    )
}
