//! In-memory transport for tests.
//!
//! Routes are keyed by URL path (`/products/1`), so the same mock works for any
//! base URL. Unknown paths answer `404 Not Found` like a real server would.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use http::StatusCode;

use crate::{FetchError, Request, Response, Transport};

#[derive(Debug, Clone)]
enum Reply {
    Respond(Response),
    Fail(FetchError),
}

/// A [`Transport`] that serves canned replies and records what was asked.
#[derive(Debug, Default)]
pub struct MockTransport {
    routes: Mutex<HashMap<String, Reply>>,
    seen: Mutex<Vec<Request>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `path` with `status` and a JSON body.
    pub fn with_json(self, path: &str, status: StatusCode, body: &str) -> Self {
        let mut headers = HashMap::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        let response = Response::new(status, headers, body.as_bytes().to_vec());
        self.insert(path, Reply::Respond(response));
        self
    }

    /// Answer `path` with `status` and an empty body.
    pub fn with_status(self, path: &str, status: StatusCode) -> Self {
        self.insert(path, Reply::Respond(Response::new(status, HashMap::new(), Vec::new())));
        self
    }

    /// Fail `path` before any response arrives.
    pub fn with_failure(self, path: &str, error: FetchError) -> Self {
        self.insert(path, Reply::Fail(error));
        self
    }

    /// Replace the reply for `path` on an already shared transport.
    pub fn set_json(&self, path: &str, status: StatusCode, body: &str) {
        let response = Response::new(status, HashMap::new(), body.as_bytes().to_vec());
        self.insert(path, Reply::Respond(response));
    }

    /// Replace the reply for `path` with a transport failure.
    pub fn set_failure(&self, path: &str, error: FetchError) {
        self.insert(path, Reply::Fail(error));
    }

    /// URLs requested so far, in order.
    pub fn requested_urls(&self) -> Vec<String> {
        self.lock_seen().iter().map(|r| r.url.clone()).collect()
    }

    /// Requests received so far, in order.
    pub fn requests(&self) -> Vec<Request> {
        self.lock_seen().clone()
    }

    fn insert(&self, path: &str, reply: Reply) {
        let mut routes = match self.routes.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        routes.insert(path.to_string(), reply);
    }

    fn lock_seen(&self) -> std::sync::MutexGuard<'_, Vec<Request>> {
        match self.seen.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn execute(&self, request: Request) -> Result<Response, FetchError> {
        let path = path_of(&request.url).to_string();
        self.lock_seen().push(request);

        let reply = {
            let routes = match self.routes.lock() {
                Ok(guard) => guard,
                Err(poisoned) => poisoned.into_inner(),
            };
            routes.get(&path).cloned()
        };

        match reply {
            Some(Reply::Respond(response)) => Ok(response),
            Some(Reply::Fail(error)) => Err(error),
            None => Ok(Response::new(
                StatusCode::NOT_FOUND,
                HashMap::new(),
                b"Not Found".to_vec(),
            )),
        }
    }
}

/// Path component of an absolute URL, without query string.
fn path_of(url: &str) -> &str {
    let after_scheme = url.split_once("://").map_or(url, |(_, rest)| rest);
    let path = after_scheme
        .find('/')
        .map_or("/", |idx| &after_scheme[idx..]);
    path.split('?').next().unwrap_or(path)
}
