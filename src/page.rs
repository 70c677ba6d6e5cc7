//! Host page contract.
//!
//! The controller needs two elements from its host: a single-line text input
//! and a container it fully owns. [`HostPage`] looks them up by id;
//! [`MemoryPage`] is an in-process page whose element handles can be cloned
//! and inspected while the controller holds its own copies.

use crate::config::SearchConfig;
use crate::render::{Rendered, ResultEntry};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// The text field the query is read from.
pub trait InputSurface {
    fn value(&self) -> String;
}

/// The region the controller rewrites on every render.
pub trait ResultsSurface {
    /// Replace the whole contents. Never a diff.
    fn replace(&mut self, rendered: Rendered);
}

/// Element lookup by id.
pub trait HostPage {
    type Input: InputSurface;
    type Results: ResultsSurface;

    fn text_input(&self, id: &str) -> Option<Self::Input>;
    fn container(&self, id: &str) -> Option<Self::Results>;
}

/// Shared handle to an in-memory text input.
#[derive(Debug, Clone, Default)]
pub struct TextInput(Rc<RefCell<String>>);

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulates the user editing the field. Fires no event by itself.
    pub fn set_value(&self, value: impl Into<String>) {
        *self.0.borrow_mut() = value.into();
    }
}

impl InputSurface for TextInput {
    fn value(&self) -> String {
        self.0.borrow().clone()
    }
}

#[derive(Debug, Default)]
struct ContainerState {
    rendered: Rendered,
    writes: usize,
}

/// Shared handle to an in-memory results container.
#[derive(Debug, Clone, Default)]
pub struct Container(Rc<RefCell<ContainerState>>);

impl Container {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<ResultEntry> {
        self.0.borrow().rendered.entries().to_vec()
    }

    pub fn inner_html(&self) -> String {
        self.0.borrow().rendered.html().to_string()
    }

    /// Number of times the contents were replaced.
    pub fn writes(&self) -> usize {
        self.0.borrow().writes
    }
}

impl ResultsSurface for Container {
    fn replace(&mut self, rendered: Rendered) {
        let mut state = self.0.borrow_mut();
        state.rendered = rendered;
        state.writes += 1;
    }
}

/// A page made of in-memory elements.
#[derive(Debug, Default)]
pub struct MemoryPage {
    inputs: HashMap<String, TextInput>,
    containers: HashMap<String, Container>,
}

impl MemoryPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// A page carrying both elements the widget expects under `config`.
    pub fn for_config(config: &SearchConfig) -> (Self, TextInput, Container) {
        let mut page = Self::new();
        let input = page.add_input(&config.input_id);
        let container = page.add_container(&config.results_id);
        (page, input, container)
    }

    pub fn add_input(&mut self, id: &str) -> TextInput {
        self.inputs.entry(id.to_string()).or_default().clone()
    }

    pub fn add_container(&mut self, id: &str) -> Container {
        self.containers.entry(id.to_string()).or_default().clone()
    }
}

impl HostPage for MemoryPage {
    type Input = TextInput;
    type Results = Container;

    fn text_input(&self, id: &str) -> Option<TextInput> {
        self.inputs.get(id).cloned()
    }

    fn container(&self, id: &str) -> Option<Container> {
        self.containers.get(id).cloned()
    }
}
