//! Test transport that replays canned responses and records every request.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::error::ApiError;
use crate::http::{HttpClient, HttpRequest, HttpResponse};

#[derive(Clone, Default)]
pub(crate) struct StubHttp {
    replies: Arc<Mutex<VecDeque<Result<HttpResponse, ApiError>>>>,
    requests: Arc<Mutex<Vec<HttpRequest>>>,
}

impl StubHttp {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Queue a response for the next request.
    pub(crate) fn reply(&self, status: u16, body: &str) {
        self.replies.lock().unwrap().push_back(Ok(HttpResponse {
            status,
            body: body.to_string(),
        }));
    }

    /// Queue a transport failure for the next request.
    pub(crate) fn reply_network_error(&self, message: &str) {
        self.replies
            .lock()
            .unwrap()
            .push_back(Err(ApiError::Network(message.to_string())));
    }

    /// Everything sent so far, in order.
    pub(crate) fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl HttpClient for StubHttp {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        self.requests.lock().unwrap().push(request);
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .expect("no stubbed reply left for request")
    }
}
