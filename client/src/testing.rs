//! In-memory transport for exercising the gateway without a network

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::ApiError;
use crate::transport::{HttpRequest, HttpResponse, Transport};

enum Reply {
    Response(HttpResponse),
    Fail(String),
    Stall(Duration),
}

/// Replays queued replies in order and records every request it receives.
/// Once the queue is empty it answers `200 {}`.
#[derive(Clone, Default)]
pub(crate) struct ScriptedTransport {
    replies: Arc<Mutex<VecDeque<Reply>>>,
    sent: Arc<Mutex<Vec<HttpRequest>>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&self, reply: Reply) {
        self.replies.lock().unwrap().push_back(reply);
    }

    pub fn reply_json(&self, status: u16, body: Value) -> &Self {
        self.push(Reply::Response(HttpResponse {
            status,
            body: serde_json::to_vec(&body).unwrap(),
        }));
        self
    }

    pub fn reply_raw(&self, status: u16, body: &str) -> &Self {
        self.push(Reply::Response(HttpResponse {
            status,
            body: body.as_bytes().to_vec(),
        }));
        self
    }

    pub fn fail(&self, message: &str) -> &Self {
        self.push(Reply::Fail(message.to_string()));
        self
    }

    pub fn stall(&self, delay: Duration) -> &Self {
        self.push(Reply::Stall(delay));
        self
    }

    pub fn sent(&self) -> Vec<HttpRequest> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        self.sent.lock().unwrap().push(request);
        let reply = self.replies.lock().unwrap().pop_front();

        match reply {
            Some(Reply::Response(response)) => Ok(response),
            Some(Reply::Fail(message)) => Err(ApiError::Transport(message)),
            Some(Reply::Stall(delay)) => {
                tokio::time::sleep(delay).await;
                Ok(HttpResponse {
                    status: 200,
                    body: b"{}".to_vec(),
                })
            }
            None => Ok(HttpResponse {
                status: 200,
                body: b"{}".to_vec(),
            }),
        }
    }
}
