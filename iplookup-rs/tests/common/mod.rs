use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::Router;
use axum::http::HeaderMap;
use tokio::net::TcpListener;

/// What a mock endpoint saw across all requests.
#[derive(Clone, Default)]
pub struct Recorder {
    hits: Arc<AtomicUsize>,
    headers: Arc<Mutex<Option<HeaderMap>>>,
    query: Arc<Mutex<Option<HashMap<String, String>>>>,
}

impl Recorder {
    pub fn record(&self, headers: HeaderMap, query: HashMap<String, String>) {
        self.hits.fetch_add(1, Ordering::SeqCst);
        *self.headers.lock().unwrap() = Some(headers);
        *self.query.lock().unwrap() = Some(query);
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    pub fn header(&self, name: &str) -> Option<String> {
        self.headers
            .lock()
            .unwrap()
            .as_ref()
            .and_then(|h| h.get(name))
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned)
    }

    pub fn query(&self, key: &str) -> Option<String> {
        self.query
            .lock()
            .unwrap()
            .as_ref()
            .and_then(|q| q.get(key).cloned())
    }
}

/// Serves `router` on an ephemeral local port and returns its base URL.
pub async fn spawn(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind mock server");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    format!("http://{addr}")
}
