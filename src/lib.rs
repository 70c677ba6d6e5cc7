//! Incremental search over an entity list loaded once from a data endpoint.
//!
//! A [`SearchController`] binds to two elements of its host page, loads the
//! dataset through an [`EntitySource`], and re-renders the matching subset on
//! every input event without touching the network again.

pub mod config;
pub mod controller;
pub mod dataset;
pub mod entity;
pub mod error;
pub mod event_loop;
pub mod logging;
pub mod page;
pub mod render;
pub mod source;

pub use config::SearchConfig;
pub use controller::{Lifecycle, SearchController};
pub use dataset::{Dataset, Query};
pub use entity::{Entity, EntityRecord, Scalar, UNKNOWN_AGE};
pub use error::{ConfigError, LoadError, SourceError};
pub use event_loop::{InputEvent, run};
pub use page::{Container, HostPage, InputSurface, MemoryPage, ResultsSurface, TextInput};
pub use render::{Rendered, ResultEntry};
pub use source::{EntitySource, FileSource, HttpSource, StaticSource};
