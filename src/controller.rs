//! The search controller: owns the dataset, the two host surfaces, and the
//! input-driven filter loop.
//!
//! # Lifecycle
//!
//! ```text
//! initialize ──(surfaces missing)──▶ Uninitialized   (every call is a no-op)
//!     │
//!     ▼
//!  Loading ──load ok──▶ Ready
//!     │
//!     └──load failed──▶ Failed
//! ```
//!
//! While `Loading`, queries filter the still-empty dataset and show the
//! placeholder. When the load completes the full dataset is rendered whatever
//! the user typed in between; the next input event filters it again.

use crate::config::SearchConfig;
use crate::dataset::{Dataset, Query};
use crate::entity::{Entity, EntityRecord};
use crate::error::{LoadError, SourceError};
use crate::page::{HostPage, InputSurface, ResultsSurface};
use crate::render::{render_entries, render_load_error};
use crate::source::EntitySource;
use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    /// A host surface was missing; the controller does nothing.
    Uninitialized,
    /// Bound to the page, dataset not loaded yet.
    Loading,
    /// The last load succeeded.
    Ready,
    /// The last load failed.
    Failed,
}

#[derive(Debug)]
struct Surfaces<I, R> {
    input: I,
    results: R,
}

/// One search widget instance.
#[derive(Debug)]
pub struct SearchController<I, R> {
    surfaces: Option<Surfaces<I, R>>,
    config: SearchConfig,
    dataset: Dataset,
    lifecycle: Lifecycle,
    /// Reference date for ages derived from birthdates.
    today: NaiveDate,
}

impl<I, R> SearchController<I, R>
where
    I: InputSurface,
    R: ResultsSurface,
{
    /// Binds to the input and results elements named in `config`.
    ///
    /// If either is absent the controller stays [`Lifecycle::Uninitialized`]
    /// and exposes no behavior.
    pub fn initialize<P>(page: &P, config: SearchConfig) -> Self
    where
        P: HostPage<Input = I, Results = R>,
    {
        let surfaces = match (
            page.text_input(&config.input_id),
            page.container(&config.results_id),
        ) {
            (Some(input), Some(results)) => Some(Surfaces { input, results }),
            _ => {
                tracing::debug!(
                    "Host page lacks '{}' or '{}', search disabled",
                    config.input_id,
                    config.results_id
                );
                None
            }
        };

        let lifecycle = if surfaces.is_some() {
            Lifecycle::Loading
        } else {
            Lifecycle::Uninitialized
        };

        Self {
            surfaces,
            config,
            dataset: Dataset::default(),
            lifecycle,
            today: chrono::Local::now().date_naive(),
        }
    }

    /// Overrides the date ages are computed against.
    #[must_use]
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    pub const fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    /// Whether both host surfaces were found.
    pub const fn is_bound(&self) -> bool {
        self.surfaces.is_some()
    }

    pub const fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub const fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Reads the whole entity list once and renders it.
    ///
    /// On failure the controller moves to [`Lifecycle::Failed`], keeps its
    /// previous dataset, and returns the error.
    pub async fn load_all<S: EntitySource>(&mut self, source: &S) -> Result<(), LoadError> {
        if !self.begin_load() {
            return Ok(());
        }
        let outcome = source.fetch_all().await;
        self.finish_load(outcome)
    }

    /// Marks a load as outstanding. Returns `false` when unbound, in which
    /// case no load should be issued.
    pub fn begin_load(&mut self) -> bool {
        if !self.is_bound() {
            return false;
        }
        self.lifecycle = Lifecycle::Loading;
        true
    }

    /// Applies the outcome of a fetch started after [`begin_load`](Self::begin_load).
    ///
    /// A success replaces the dataset wholesale and renders all of it.
    pub fn finish_load(
        &mut self,
        outcome: Result<Vec<EntityRecord>, SourceError>,
    ) -> Result<(), LoadError> {
        let Some(surfaces) = self.surfaces.as_mut() else {
            return Ok(());
        };

        let today = self.today;
        let loaded = outcome
            .map(|records| Dataset::from_records(records, today))
            .map_err(LoadError::from);

        match loaded {
            Ok(dataset) => {
                tracing::info!("Loaded {} entities", dataset.len());
                self.dataset = dataset;
                self.lifecycle = Lifecycle::Ready;
                let all: Vec<&Entity> = self.dataset.entities().iter().collect();
                surfaces.results.replace(render_entries(&all, &self.config));
                Ok(())
            }
            Err(e) => {
                tracing::error!("Failed to load entities: {}", e);
                self.lifecycle = Lifecycle::Failed;
                if let Some(text) = &self.config.load_error_text {
                    surfaces.results.replace(render_load_error(text));
                }
                Err(e)
            }
        }
    }

    /// Handles one input-change event, reading the query from the input.
    pub fn on_input(&mut self) {
        let Some(surfaces) = self.surfaces.as_ref() else {
            return;
        };
        let raw = surfaces.input.value();
        self.on_query_changed(&raw);
    }

    /// Filters the current dataset by `raw` and renders the matches.
    pub fn on_query_changed(&mut self, raw: &str) {
        let Some(surfaces) = self.surfaces.as_mut() else {
            return;
        };

        let query = Query::new(raw);
        let matches = self.dataset.filter(&query);
        tracing::debug!(
            "Query '{}' matched {}/{} entities",
            query.as_str(),
            matches.len(),
            self.dataset.len()
        );
        surfaces.results.replace(render_entries(&matches, &self.config));
    }

    /// Rebuilds the results surface from `items`.
    pub fn render(&mut self, items: &[&Entity]) {
        if let Some(surfaces) = self.surfaces.as_mut() {
            surfaces.results.replace(render_entries(items, &self.config));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::{Container, MemoryPage, TextInput};
    use crate::render::ResultEntry;
    use crate::source::StaticSource;
    use assert2::{check, let_assert};

    const CATS: &str = r#"[
        {"id": 1, "name": "Milo", "age": "2 ans"},
        {"id": 2, "name": "Luna", "age": "1 an", "photo": "/p/luna.jpg"}
    ]"#;

    fn bound() -> (SearchController<TextInput, Container>, Container) {
        let config = SearchConfig::default();
        let (page, _, container) = MemoryPage::for_config(&config);
        (SearchController::initialize(&page, config), container)
    }

    #[test]
    fn test_missing_surface_is_uninitialized() {
        let mut page = MemoryPage::new();
        let container = page.add_container("searchResults");

        let mut controller = SearchController::initialize(&page, SearchConfig::default());
        check!(controller.lifecycle() == Lifecycle::Uninitialized);
        check!(!controller.begin_load());

        controller.on_query_changed("lu");
        controller.render(&[]);
        check!(container.writes() == 0);
    }

    #[tokio::test]
    async fn test_unbound_load_is_a_noop() {
        let page = MemoryPage::new();
        let mut controller = SearchController::initialize(&page, SearchConfig::default());
        let source = StaticSource::from_json(CATS).unwrap();

        check!(controller.load_all(&source).await.is_ok());
        check!(controller.dataset().is_empty());
        check!(controller.lifecycle() == Lifecycle::Uninitialized);
    }

    #[tokio::test]
    async fn test_load_renders_everything() {
        let (mut controller, container) = bound();
        check!(controller.lifecycle() == Lifecycle::Loading);

        let source = StaticSource::from_json(CATS).unwrap();
        controller.load_all(&source).await.unwrap();

        check!(controller.lifecycle() == Lifecycle::Ready);
        check!(container.writes() == 1);
        check!(container.entries().len() == 2);
    }

    #[test]
    fn test_query_while_loading_shows_placeholder() {
        let (mut controller, container) = bound();
        controller.on_query_changed("lu");

        let entries = container.entries();
        let_assert!([ResultEntry::Placeholder { text }] = entries.as_slice());
        check!(text == "Aucun résultat");
    }

    #[test]
    fn test_failed_load_leaves_surface_untouched() {
        let (mut controller, container) = bound();
        let malformed = serde_json::from_str::<Vec<EntityRecord>>("{").unwrap_err();

        let result = controller.finish_load(Err(SourceError::Malformed(malformed)));
        let_assert!(Err(LoadError::Source(SourceError::Malformed(_))) = result);
        check!(controller.lifecycle() == Lifecycle::Failed);
        check!(container.writes() == 0);
    }

    #[test]
    fn test_failed_load_can_render_error_entry() {
        let config = SearchConfig {
            load_error_text: Some("Chargement impossible".to_string()),
            ..SearchConfig::default()
        };
        let (page, _, container) = MemoryPage::for_config(&config);
        let mut controller = SearchController::initialize(&page, config);

        let malformed = serde_json::from_str::<Vec<EntityRecord>>("[1]").unwrap_err();
        check!(controller.finish_load(Err(malformed.into())).is_err());

        check!(
            container.entries()
                == [ResultEntry::LoadError {
                    text: "Chargement impossible".to_string()
                }]
        );
    }

    #[test]
    fn test_ageless_record_does_not_fail_load() {
        let (mut controller, container) = bound();
        let records: Vec<EntityRecord> = serde_json::from_str(
            r#"[{"id": 1, "name": "Milo", "age": "2 ans"}, {"id": 2, "name": "Luna", "birthdate": null}]"#,
        )
        .unwrap();

        controller.finish_load(Ok(records)).unwrap();
        check!(controller.lifecycle() == Lifecycle::Ready);
        check!(controller.dataset().len() == 2);

        let entries = container.entries();
        let_assert!([_, ResultEntry::Item { name, age, .. }] = entries.as_slice());
        check!(name == "Luna");
        check!(age == crate::entity::UNKNOWN_AGE);
    }

    #[test]
    fn test_ages_derive_from_configured_today() {
        let (controller, _container) = bound();
        let mut controller = controller.with_today(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
        let records: Vec<EntityRecord> =
            serde_json::from_str(r#"[{"id": 7, "name": "Caramel", "birthdate": "2022-05-01"}]"#).unwrap();

        controller.finish_load(Ok(records)).unwrap();
        check!(controller.dataset().entities()[0].age() == "2 ans");
    }
}
