//! In-memory client for tests

use crate::client::{Client, Request, TransportFailure};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::Mutex;

/// What the mock answers with
#[derive(Debug, Clone)]
enum Reply {
    Respond(Value),
    Fail(TransportFailure),
    Hang,
}

/// A client that records every call and replays scripted replies
///
/// Queued replies are consumed in order; once the queue is empty the fallback
/// reply (an empty object unless configured) is used for every call.
#[derive(Debug)]
pub struct MockClient {
    queue: Mutex<VecDeque<Reply>>,
    fallback: Reply,
    calls: Mutex<Vec<(String, Request)>>,
}

impl Default for MockClient {
    fn default() -> Self {
        Self::new()
    }
}

impl MockClient {
    pub fn new() -> Self {
        Self {
            queue: Mutex::new(VecDeque::new()),
            fallback: Reply::Respond(Value::Object(Default::default())),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Always answer with `response`
    pub fn responding(response: Value) -> Self {
        Self {
            fallback: Reply::Respond(response),
            ..Self::new()
        }
    }

    /// Always fail with `failure`
    pub fn failing(failure: TransportFailure) -> Self {
        Self {
            fallback: Reply::Fail(failure),
            ..Self::new()
        }
    }

    /// Never complete; used to exercise cancellation
    pub fn hanging() -> Self {
        Self {
            fallback: Reply::Hang,
            ..Self::new()
        }
    }

    /// Queue a response for the next unanswered call
    pub fn then_respond(self, response: Value) -> Self {
        self.push(Reply::Respond(response));
        self
    }

    /// Queue a failure for the next unanswered call
    pub fn then_fail(self, failure: TransportFailure) -> Self {
        self.push(Reply::Fail(failure));
        self
    }

    /// Every call made so far, as (operation, request)
    pub fn calls(&self) -> Vec<(String, Request)> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().map(|c| c.len()).unwrap_or_default()
    }

    fn push(&self, reply: Reply) {
        if let Ok(mut queue) = self.queue.lock() {
            queue.push_back(reply);
        }
    }

    fn next_reply(&self) -> Reply {
        self.queue
            .lock()
            .ok()
            .and_then(|mut q| q.pop_front())
            .unwrap_or_else(|| self.fallback.clone())
    }
}

#[async_trait]
impl Client for MockClient {
    async fn call(&self, operation: &str, request: Request) -> Result<Value, TransportFailure> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push((operation.to_string(), request));
        }
        match self.next_reply() {
            Reply::Respond(value) => Ok(value),
            Reply::Fail(failure) => Err(failure),
            Reply::Hang => std::future::pending().await,
        }
    }
}
