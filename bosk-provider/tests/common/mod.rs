//! Shared test helpers for provider tests.

#![allow(dead_code)]

use async_trait::async_trait;
use bosk_client::{
    normalize_body, ClientError, ClientResult, Fetched, NodeClient, NodeStore,
};
use bosk_provider::ProviderData;
use bosk_types::{AuthMode, ProviderConfig};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tracing_subscriber::EnvFilter;
use wiremock::matchers::any;
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

/// Routes provider logs to the test harness; filter with `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// A single-node tree: GET returns 404 until something is PUT, DELETE
/// removes the value and returns 404 when there is nothing to remove.
#[derive(Clone, Default)]
pub struct StubNode {
    value: Arc<Mutex<Option<Vec<u8>>>>,
}

impl StubNode {
    pub fn holding(body: &str) -> Self {
        Self {
            value: Arc::new(Mutex::new(Some(body.as_bytes().to_vec()))),
        }
    }

    pub fn current(&self) -> Option<String> {
        self.value
            .lock()
            .unwrap()
            .as_ref()
            .map(|b| String::from_utf8_lossy(b).into_owned())
    }

    pub async fn mount(&self, server: &MockServer) {
        Mock::given(any())
            .respond_with(self.clone())
            .mount(server)
            .await;
    }
}

impl Respond for StubNode {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let mut value = self.value.lock().unwrap();
        match request.method.as_str() {
            "GET" => match value.as_ref() {
                Some(body) => ResponseTemplate::new(200)
                    .insert_header("content-type", "application/json")
                    .set_body_bytes(body.clone()),
                None => ResponseTemplate::new(404).set_body_string("node not found"),
            },
            "PUT" => {
                *value = Some(request.body.clone());
                ResponseTemplate::new(200)
            }
            "DELETE" => match value.take() {
                Some(_) => ResponseTemplate::new(200),
                None => ResponseTemplate::new(404).set_body_string("node not found"),
            },
            _ => ResponseTemplate::new(405),
        }
    }
}

/// Provider data backed by a no-auth client for `server`.
pub fn provider_data(server: &MockServer) -> ProviderData {
    let config = ProviderConfig::new(format!("{}/", server.uri()), AuthMode::NoAuth);
    let client = NodeClient::new(config, None).unwrap();
    ProviderData::new(Arc::new(client))
}

/// In-memory store keyed by URL that records every call it receives.
#[derive(Default)]
pub struct MemoryStore {
    nodes: Mutex<HashMap<String, String>>,
    calls: Mutex<Vec<String>>,
}

impl MemoryStore {
    pub fn with_node(url: &str, body: &str) -> Self {
        let store = Self::default();
        store
            .nodes
            .lock()
            .unwrap()
            .insert(url.to_string(), body.to_string());
        store
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn node(&self, url: &str) -> Option<String> {
        self.nodes.lock().unwrap().get(url).cloned()
    }

    fn not_found(method: &'static str) -> ClientError {
        ClientError::Remote {
            method,
            status: 404,
            body: String::new(),
        }
    }
}

#[async_trait]
impl NodeStore for MemoryStore {
    fn base_url(&self) -> &str {
        "http://memory/"
    }

    async fn get(&self, url: &str) -> ClientResult<Fetched> {
        self.calls.lock().unwrap().push(format!("GET {url}"));
        let nodes = self.nodes.lock().unwrap();
        let body = nodes.get(url).ok_or_else(|| Self::not_found("GET"))?;
        Ok(normalize_body(body.as_bytes()))
    }

    async fn put(&self, url: &str, value_json: &str) -> ClientResult<()> {
        self.calls.lock().unwrap().push(format!("PUT {url}"));
        self.nodes
            .lock()
            .unwrap()
            .insert(url.to_string(), value_json.to_string());
        Ok(())
    }

    async fn delete(&self, url: &str) -> ClientResult<()> {
        self.calls.lock().unwrap().push(format!("DELETE {url}"));
        self.nodes
            .lock()
            .unwrap()
            .remove(url)
            .map(|_| ())
            .ok_or_else(|| Self::not_found("DELETE"))
    }
}
