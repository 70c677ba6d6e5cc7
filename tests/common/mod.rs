//! Shared test fixtures and utilities for integration tests.
//!
//! # Available Fixtures
//!
//! - `widget`: a bound controller over a fresh [`MemoryPage`], default config
//! - `cats`: the two-entry shelter dataset used across scenarios
//!
//! # Sources
//!
//! [`GatedSource`] holds its response until the test opens the gate, which is
//! how the loading-vs-typing race is exercised deterministically.
//! [`FailingSource`] always answers with a server error.

use cat_search::{
    Container, EntityRecord, EntitySource, MemoryPage, SearchConfig, SearchController,
    SourceError, TextInput,
};
use rstest::fixture;
use std::cell::RefCell;
use tokio::sync::oneshot;

pub const CATS_JSON: &str = r#"[
    {"id": 1, "name": "Milo", "age": "2 ans"},
    {"id": 2, "name": "Luna", "age": "1 an", "photo": "/p/luna.jpg"}
]"#;

/// A bound controller with handles on both of its page elements.
pub struct Widget {
    pub controller: SearchController<TextInput, Container>,
    pub input: TextInput,
    pub container: Container,
}

#[allow(dead_code)] // Methods used across different integration test crates
impl Widget {
    pub fn new(config: SearchConfig) -> Self {
        let (page, input, container) = MemoryPage::for_config(&config);
        let controller = SearchController::initialize(&page, config);
        Self {
            controller,
            input,
            container,
        }
    }

    /// Names shown on the results surface, in order.
    pub fn shown_names(&self) -> Vec<String> {
        self.container
            .entries()
            .into_iter()
            .filter_map(|entry| match entry {
                cat_search::ResultEntry::Item { name, .. } => Some(name),
                _ => None,
            })
            .collect()
    }

    pub fn shows_placeholder(&self) -> bool {
        matches!(
            self.container.entries().as_slice(),
            [cat_search::ResultEntry::Placeholder { .. }]
        )
    }
}

#[fixture]
pub fn widget() -> Widget {
    cat_search::logging::init();
    Widget::new(SearchConfig::default())
}

#[fixture]
pub fn cats() -> Vec<EntityRecord> {
    serde_json::from_str(CATS_JSON).expect("fixture JSON is valid")
}

/// Builds records from `(id, name, age)` triples.
#[allow(dead_code)]
pub fn records(entries: &[(u64, &str, &str)]) -> Vec<EntityRecord> {
    entries
        .iter()
        .map(|&(id, name, age)| EntityRecord {
            id: id.into(),
            name: name.to_string(),
            age: Some(age.into()),
            birthdate: None,
            photo: None,
        })
        .collect()
}

/// Answers only once the paired sender fires (or is dropped).
#[allow(dead_code)]
pub struct GatedSource {
    gate: RefCell<Option<oneshot::Receiver<()>>>,
    records: Vec<EntityRecord>,
}

#[allow(dead_code)]
impl GatedSource {
    pub fn new(records: Vec<EntityRecord>) -> (oneshot::Sender<()>, Self) {
        let (open, gate) = oneshot::channel();
        let source = Self {
            gate: RefCell::new(Some(gate)),
            records,
        };
        (open, source)
    }
}

impl EntitySource for GatedSource {
    async fn fetch_all(&self) -> Result<Vec<EntityRecord>, SourceError> {
        let gate = self.gate.borrow_mut().take();
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        Ok(self.records.clone())
    }
}

/// Always fails as if the endpoint answered `500`.
#[allow(dead_code)]
pub struct FailingSource;

impl EntitySource for FailingSource {
    async fn fetch_all(&self) -> Result<Vec<EntityRecord>, SourceError> {
        Err(SourceError::Status {
            url: "http://test/api/cats".to_string(),
            status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
        })
    }
}

/// Lets the other branch of a `join!` run until it blocks.
#[allow(dead_code)]
pub async fn settle() {
    for _ in 0..16 {
        tokio::task::yield_now().await;
    }
}

/// Serves `app` on an ephemeral local port and returns its base URL.
#[allow(dead_code)]
pub async fn serve(app: axum::Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("listener has an address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("test server failed");
    });
    format!("http://{}", addr)
}
