//! Stub Notion API for integration tests
//!
//! Serves a fixed list of canned responses, one per request, in order,
//! and records every request it receives. Requests beyond the list get a
//! 500 `unexpected_request` error, so the CLI fails and the test sees the
//! extra request in [`StubServer::requests`].

#![allow(dead_code)]

use std::io::Read;
use std::sync::{Arc, Mutex};
use std::thread;

use serde_json::{json, Value};
use tiny_http::{Header, Response, Server};

/// A request as seen by the stub
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    /// Header names lowercased
    pub headers: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        let name = name.to_ascii_lowercase();
        self.headers
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }
}

pub struct StubServer {
    base_url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl StubServer {
    /// Starts a server answering with `(status, body)` pairs in order
    pub fn start(responses: Vec<(u16, Value)>) -> Self {
        let server = Server::http("127.0.0.1:0").expect("bind stub server");
        let base_url = format!("http://{}/v1", server.server_addr());
        let requests = Arc::new(Mutex::new(Vec::new()));

        let recorded = Arc::clone(&requests);
        thread::spawn(move || {
            let mut responses = responses.into_iter();
            for mut request in server.incoming_requests() {
                let headers = request
                    .headers()
                    .iter()
                    .map(|h| {
                        (
                            h.field.to_string().to_ascii_lowercase(),
                            h.value.as_str().to_string(),
                        )
                    })
                    .collect();
                let mut raw = String::new();
                let _ = request.as_reader().read_to_string(&mut raw);
                recorded.lock().unwrap().push(RecordedRequest {
                    method: request.method().as_str().to_string(),
                    path: request.url().to_string(),
                    headers,
                    body: serde_json::from_str(&raw).ok(),
                });

                let (status, body) = responses.next().unwrap_or_else(unexpected_request);
                let content_type =
                    Header::from_bytes("Content-Type", "application/json").expect("header");
                let response = Response::from_string(body.to_string())
                    .with_status_code(status)
                    .with_header(content_type);
                let _ = request.respond(response);
            }
        });

        Self { base_url, requests }
    }

    /// Base URL to hand to the CLI (`NOTION_BASE_URL`)
    pub fn base_url(&self) -> String {
        self.base_url.clone()
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

fn unexpected_request() -> (u16, Value) {
    (
        500,
        json!({ "object": "error", "status": 500, "code": "unexpected_request" }),
    )
}
